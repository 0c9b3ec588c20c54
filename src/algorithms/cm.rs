//! Character Missing — collapses each run of consecutive identical
//! characters down to a single character (the typo of under-pressing a
//! repeated key).

use super::{emit, Algorithm};
use crate::domain::{Target, Variant};
use crate::languages::{Keyboard, Language};

pub struct CharacterMissing;

impl Algorithm for CharacterMissing {
    fn id(&self) -> &'static str {
        "cm"
    }
    fn name(&self) -> &'static str {
        "Character Missing"
    }
    fn description(&self) -> &'static str {
        "Omits one of a pair of consecutive identical characters"
    }

    fn exec(&self, target: &Target, _languages: &[Language], _keyboards: &[Keyboard]) -> Vec<Variant> {
        let chars: Vec<char> = target.label.chars().collect();
        let mut out = Vec::new();
        for i in 0..chars.len().saturating_sub(1) {
            if chars[i] != chars[i + 1] {
                continue;
            }
            let variant: String = chars[..i].iter().chain(chars[i + 1..].iter()).collect();
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
    fn collapses_double_letters_only() {
        let target = parse("google.com").unwrap();
        let got: Vec<String> = CharacterMissing.exec(&target, &[], &[]).iter().map(|v| v.label.clone()).collect();
        assert_eq!(got, vec!["gogle".to_string()]);
    }

    #[test]
    fn no_output_without_repeats() {
        let target = parse("abcdef.com").unwrap();
        assert!(CharacterMissing.exec(&target, &[], &[]).is_empty());
    }
}
