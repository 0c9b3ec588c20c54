//! Character Omission — leaves out a character in the label or a separator
//! adjacent to it.

use super::{emit, Algorithm};
use crate::domain::{Target, Variant};
use crate::languages::{Keyboard, Language};

pub struct CharacterOmission;

impl Algorithm for CharacterOmission {
    fn id(&self) -> &'static str {
        "co"
    }
    fn name(&self) -> &'static str {
        "Character Omission"
    }
    fn description(&self) -> &'static str {
        "Omitting a character from the name"
    }

    fn exec(&self, target: &Target, _languages: &[Language], _keyboards: &[Keyboard]) -> Vec<Variant> {
        let mut out = Vec::new();

        let label_chars: Vec<char> = target.label.chars().collect();
        for i in 0..label_chars.len() {
            let variant: String = label_chars[..i].iter().chain(label_chars[i + 1..].iter()).collect();
            if let Some(v) = emit(self.id(), target, &target.prefix, &variant, &target.suffix) {
                out.push(v);
            }
        }

        let suffix_chars: Vec<char> = target.suffix.chars().collect();
        for i in 0..suffix_chars.len() {
            if suffix_chars[i] == '.' {
                continue;
            }
            let variant: String = suffix_chars[..i].iter().chain(suffix_chars[i + 1..].iter()).collect();
            if let Some(v) = emit(self.id(), target, &target.prefix, &target.label, &variant) {
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
    fn omits_each_position() {
        let target = parse("abcd").unwrap();
        let got: Vec<String> = CharacterOmission
            .exec(&target, &[], &[])
            .iter()
            .map(|v| v.label.clone())
            .collect();
        assert_eq!(got.len(), 4);
        assert!(got.contains(&"bcd".to_string()));
        assert!(got.contains(&"acd".to_string()));
        assert!(got.contains(&"abd".to_string()));
        assert!(got.contains(&"abc".to_string()));
    }
}
