//! Vowel Swap — for each vowel in the label, substitutes each other
//! vowel drawn from the active language(s).

use std::collections::BTreeSet;

use super::{emit, Algorithm};
use crate::domain::{Target, Variant};
use crate::languages::{Keyboard, Language};

pub struct VowelSwap;

impl Algorithm for VowelSwap {
    fn id(&self) -> &'static str {
        "vs"
    }
    fn name(&self) -> &'static str {
        "Vowel Swap"
    }
    fn description(&self) -> &'static str {
        "Substitutes one vowel for another"
    }

    fn exec(&self, target: &Target, languages: &[Language], _keyboards: &[Keyboard]) -> Vec<Variant> {
        let mut vowels: BTreeSet<char> = BTreeSet::new();
        for lang in languages {
            for v in &lang.vowels {
                vowels.extend(v.chars());
            }
        }

        let chars: Vec<char> = target.label.chars().collect();
        let mut out = Vec::new();
        for (i, &c) in chars.iter().enumerate() {
            if !vowels.contains(&c.to_ascii_lowercase()) {
                continue;
            }
            for &v in &vowels {
                if v == c {
                    continue;
                }
                let mut variant = chars.clone();
                variant[i] = v;
                let variant: String = variant.into_iter().collect();
                if let Some(variant) = emit(self.id(), target, &target.prefix, &variant, &target.suffix) {
                    out.push(variant);
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
    fn swaps_every_vowel_position() {
        let target = parse("example.com").unwrap();
        let reg = build_registry();
        let langs = reg.get(&["en".to_string()]);
        let variants = VowelSwap.exec(&target, &langs, &[]);
        assert!(variants.iter().any(|v| v.fqdn() == "excmple.com"));
        for v in &variants {
            assert_ne!(v.label, "example");
        }
    }
}
