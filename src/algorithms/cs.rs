//! Character Swap — transposes each adjacent pair of characters in the label.

use super::{emit, Algorithm};
use crate::domain::{Target, Variant};
use crate::languages::{Keyboard, Language};

pub struct CharacterSwap;

impl Algorithm for CharacterSwap {
    fn id(&self) -> &'static str {
        "cs"
    }
    fn name(&self) -> &'static str {
        "Character Swap"
    }
    fn description(&self) -> &'static str {
        "Swapping adjacent characters in the name"
    }

    fn exec(&self, target: &Target, _languages: &[Language], _keyboards: &[Keyboard]) -> Vec<Variant> {
        let chars: Vec<char> = target.label.chars().collect();
        let mut out = Vec::new();
        for i in 0..chars.len().saturating_sub(1) {
            let mut variant = chars.clone();
            variant.swap(i, i + 1);
            let variant: String = variant.into_iter().collect();
            if let Some(v) = emit(self.id(), target, &target.prefix, &variant, &target.suffix) {
                out.push(v);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parse;

    #[test]
    fn swaps_every_adjacent_pair() {
        let target = parse("google.com").unwrap();
        let got: Vec<String> = CharacterSwap.exec(&target, &[], &[]).iter().map(|v| v.fqdn()).collect();
        for expect in ["ogogle.com", "gogole.com", "goolge.com", "googel.com"] {
            assert!(got.contains(&expect.to_string()));
        }
        // One adjacent pair in "google" (the two 'o's) swaps to an
        // identical string and is dropped by self-exclusion.
        assert_eq!(got.len(), target.label.len() - 2);
    }
}
