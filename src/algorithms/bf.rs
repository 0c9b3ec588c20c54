//! Bit Flipping — models random bit-errors in transit that can redirect
//! a lookup to a bit-flipped domain.

use super::{emit, Algorithm};
use crate::domain::{Target, Variant};
use crate::languages::{Keyboard, Language};

pub struct BitFlipping;

impl Algorithm for BitFlipping {
    fn id(&self) -> &'static str {
        "bf"
    }
    fn name(&self) -> &'static str {
        "Bit Flipping"
    }
    fn description(&self) -> &'static str {
        "Relies on random bit-errors to redirect connections"
    }

    fn exec(&self, target: &Target, _languages: &[Language], _keyboards: &[Keyboard]) -> Vec<Variant> {
        let chars: Vec<char> = target.label.chars().collect();
        let mut out = Vec::new();

        for (i, &c) in chars.iter().enumerate() {
            if !c.is_ascii() {
                continue;
            }
            let code = c as u8;
            for bit in 0..8 {
                let flipped = code ^ (1 << bit);
                let flipped = flipped as char;
                if !flipped.is_ascii_alphanumeric() {
                    continue;
                }
                let mut variant = chars.clone();
                variant[i] = flipped;
                let variant: String = variant.into_iter().collect();
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

    #[test]
    fn flips_to_alphanumeric_only() {
        let target = parse("a.com").unwrap();
        for v in BitFlipping.exec(&target, &[], &[]) {
            assert!(v.label.chars().all(|c| c.is_ascii_alphanumeric()));
            assert_ne!(v.label, "a");
        }
    }
}
