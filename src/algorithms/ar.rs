//! Alphabet Replacement — replaces each label position with every
//! grapheme from each active language.

use super::{emit, Algorithm};
use crate::domain::{Target, Variant};
use crate::languages::{Keyboard, Language};

pub struct AlphabetReplacement;

impl Algorithm for AlphabetReplacement {
    fn id(&self) -> &'static str {
        "ar"
    }
    fn name(&self) -> &'static str {
        "Alphabet Replacement"
    }
    fn description(&self) -> &'static str {
        "Replaces an alphabet character in the target domain"
    }

    fn exec(&self, target: &Target, languages: &[Language], _keyboards: &[Keyboard]) -> Vec<Variant> {
        let chars: Vec<char> = target.label.chars().collect();
        let mut out = Vec::new();

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

        for i in 0..chars.len() {
            for &g in &graphemes {
                if g == chars[i] {
                    continue;
                }
                let mut variant = chars.clone();
                variant[i] = g;
                let variant: String = variant.into_iter().collect();
                if let Some(v) = emit(self.id(), target, &target.prefix, &variant, &target.suffix) {
                    out.push(v);
                }
            }
        }
        out
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        None
    } else {
        Some(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parse;
    use crate::languages::build_registry;

    #[test]
    fn replaces_every_position_with_every_grapheme() {
        let target = parse("ab.com").unwrap();
        let reg = build_registry();
        let langs = reg.get(&["en".to_string()]);
        let variants = AlphabetReplacement.exec(&target, &langs, &[]);
        assert!(!variants.is_empty());
        for v in &variants {
            assert_eq!(v.label.chars().count(), 2);
            assert_ne!(v.label, "ab");
        }
    }
}
