//! Homoglyph Insertion — inserts a homoglyph of an adjacent grapheme
//! rather than replacing it, mirroring `aci`'s insert-not-substitute
//! shape but driven by the language homoglyph table instead of a
//! keyboard layout.

use super::{emit, Algorithm};
use crate::domain::{Target, Variant};
use crate::languages::{Keyboard, Language};

pub struct HomoglyphInsertion;

impl Algorithm for HomoglyphInsertion {
    fn id(&self) -> &'static str {
        "hi"
    }
    fn name(&self) -> &'static str {
        "Homoglyph Insertion"
    }
    fn description(&self) -> &'static str {
        "Inserts a homoglyph of an adjacent grapheme"
    }

    fn exec(&self, target: &Target, languages: &[Language], _keyboards: &[Keyboard]) -> Vec<Variant> {
        let chars: Vec<char> = target.label.chars().collect();
        let mut out = Vec::new();

        for (i, c) in chars.iter().enumerate() {
            for lang in languages {
                for glyph in lang.similar_chars(&c.to_string()) {
                    let mut before = chars.clone();
                    before.splice(i..i, glyph.chars());
                    let before: String = before.into_iter().collect();
                    if let Some(v) = emit(self.id(), target, &target.prefix, &before, &target.suffix) {
                        out.push(v);
                    }

                    let mut after = chars.clone();
                    after.splice(i + 1..i + 1, glyph.chars());
                    let after: String = after.into_iter().collect();
                    if let Some(v) = emit(self.id(), target, &target.prefix, &after, &target.suffix) {
                        out.push(v);
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
    fn inserts_without_removing_original() {
        let target = parse("example.com").unwrap();
        let reg = build_registry();
        let langs = reg.get(&["ar".to_string()]);
        for v in HomoglyphInsertion.exec(&target, &langs, &[]) {
            assert!(v.label.chars().count() > target.label.chars().count());
        }
    }
}
