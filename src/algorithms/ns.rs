//! Numeral Swap — swaps digits for written-out cardinals/ordinals and
//! back, per the active language's numeral table, across every active
//! language rather than a single hardcoded one.

use super::{emit, Algorithm};
use crate::domain::{Target, Variant};
use crate::languages::{Keyboard, Language};

pub struct NumeralSwap;

impl Algorithm for NumeralSwap {
    fn id(&self) -> &'static str {
        "ns"
    }
    fn name(&self) -> &'static str {
        "Numeral Swap"
    }
    fn description(&self) -> &'static str {
        "Swaps a digit for its written-out form, or back"
    }

    fn exec(&self, target: &Target, languages: &[Language], _keyboards: &[Keyboard]) -> Vec<Variant> {
        let mut out = Vec::new();
        for lang in languages {
            for (digit, words) in &lang.numerals {
                if target.label.contains(digit.as_str()) {
                    for word in words {
                        let variant = target.label.replace(digit.as_str(), word);
                        if let Some(v) = emit(self.id(), target, &target.prefix, &variant, &target.suffix) {
                            out.push(v);
                        }
                    }
                }
                for word in words {
                    if target.label.contains(word.as_str()) {
                        let variant = target.label.replace(word.as_str(), digit);
                        if let Some(v) = emit(self.id(), target, &target.prefix, &variant, &target.suffix) {
                            out.push(v);
                        }
                    }
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
    fn swaps_digit_for_word_and_back() {
        let target = parse("4sale.com").unwrap();
        let reg = build_registry();
        let langs = reg.get(&["en".to_string()]);
        let got: Vec<String> = NumeralSwap.exec(&target, &langs, &[]).iter().map(|v| v.label.clone()).collect();
        assert!(got.iter().any(|l| l.contains("four") || l.contains("fourth")));
    }
}
