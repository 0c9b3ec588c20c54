//! Homoglyph — replaces each grapheme with each entry of its homoglyph
//! class, per active language's homoglyph table.

use super::{emit, Algorithm};
use crate::domain::{Target, Variant};
use crate::languages::{Keyboard, Language};

pub struct Homoglyph;

impl Algorithm for Homoglyph {
    fn id(&self) -> &'static str {
        "hg"
    }
    fn name(&self) -> &'static str {
        "Homoglyph"
    }
    fn description(&self) -> &'static str {
        "Replaces each grapheme with a visually similar one"
    }

    fn exec(&self, target: &Target, languages: &[Language], _keyboards: &[Keyboard]) -> Vec<Variant> {
        let chars: Vec<char> = target.label.chars().collect();
        let mut out = Vec::new();

        for (i, c) in chars.iter().enumerate() {
            for lang in languages {
                for glyph in lang.similar_chars(&c.to_string()) {
                    let variant: String = chars[..i]
                        .iter()
                        .collect::<String>()
                        + &glyph
                        + &chars[i + 1..].iter().collect::<String>();
                    if let Some(v) = emit(self.id(), target, &target.prefix, &variant, &target.suffix) {
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
    fn replaces_known_homoglyphs() {
        let target = parse("example.com").unwrap();
        let reg = build_registry();
        let langs = reg.get(&["ar".to_string()]);
        let variants = Homoglyph.exec(&target, &langs, &[]);
        for v in &variants {
            assert_ne!(v.label, "example");
        }
    }
}
