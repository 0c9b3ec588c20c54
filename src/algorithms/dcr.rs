//! Double Character Replacement — for each pair of adjacent duplicate
//! letters, replaces the pair with another grapheme doubled.

use super::{emit, Algorithm};
use crate::domain::{Target, Variant};
use crate::languages::{Keyboard, Language};

pub struct DoubleCharacterReplacement;

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        None
    } else {
        Some(c)
    }
}

impl Algorithm for DoubleCharacterReplacement {
    fn id(&self) -> &'static str {
        "dcr"
    }
    fn name(&self) -> &'static str {
        "Double Character Replacement"
    }
    fn description(&self) -> &'static str {
        "Replaces a pair of adjacent duplicate letters with another letter doubled"
    }

    fn exec(&self, target: &Target, languages: &[Language], _keyboards: &[Keyboard]) -> Vec<Variant> {
        let chars: Vec<char> = target.label.chars().collect();
        let mut graphemes: Vec<char> = Vec::new();
        for lang in languages {
            for g in &lang.graphemes {
                if let Some(c) = single_char(g) {
                    graphemes.push(c);
                }
            }
        }
        graphemes.sort_unstable();
        graphemes.dedup();

        let mut out = Vec::new();
        for i in 0..chars.len().saturating_sub(1) {
            if chars[i] != chars[i + 1] {
                continue;
            }
            for &g in &graphemes {
                if g == chars[i] {
                    continue;
                }
                let variant: String = chars[..i]
                    .iter()
                    .chain([g, g].iter())
                    .chain(chars[i + 2..].iter())
                    .collect();
                if let Some(v) = emit(self.id(), target, &target.prefix, &variant, &target.suffix) {
                    out.push(v);
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parse;
    use crate::languages::build_registry;

    #[test]
    fn replaces_duplicate_pairs_only() {
        let target = parse("google.com").unwrap();
        let reg = build_registry();
        let langs = reg.get(&["en".to_string()]);
        let variants = DoubleCharacterReplacement.exec(&target, &langs, &[]);
        assert!(!variants.is_empty());
        for v in &variants {
            assert_eq!(v.label.chars().count(), target.label.chars().count());
            assert_ne!(v.label, "google");
        }
    }

    #[test]
    fn no_output_without_duplicates() {
        let target = parse("abcdef.com").unwrap();
        let reg = build_registry();
        let langs = reg.get(&["en".to_string()]);
        assert!(DoubleCharacterReplacement.exec(&target, &langs, &[]).is_empty());
    }
}
