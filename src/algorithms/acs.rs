//! Adjacent Character Substitution — replaces a character with a
//! keyboard-adjacent one.

use super::{emit, Algorithm};
use crate::domain::{Target, Variant};
use crate::languages::{Keyboard, Language};

pub struct AdjacentCharacterSubstitution;

impl Algorithm for AdjacentCharacterSubstitution {
    fn id(&self) -> &'static str {
        "acs"
    }
    fn name(&self) -> &'static str {
        "Adjacent Character Substitution"
    }
    fn description(&self) -> &'static str {
        "Replaces a character with one adjacent to it on a keyboard"
    }

    fn exec(&self, target: &Target, _languages: &[Language], keyboards: &[Keyboard]) -> Vec<Variant> {
        let chars: Vec<char> = target.label.chars().collect();
        let mut out = Vec::new();

        for (i, &c) in chars.iter().enumerate() {
            for kb in keyboards {
                for adj in kb.adjacent(c) {
                    if adj == c {
                        continue;
                    }
                    let mut variant = chars.clone();
                    variant[i] = adj;
                    let variant: String = variant.into_iter().collect();
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
    use crate::languages::Keyboard as Kb;

    #[test]
    fn substitutes_with_keyboard_neighbours() {
        let target = parse("rt.com").unwrap();
        let kb = Kb::from_rows("t", "t", "en", &["qwertyuiop"]);
        let got: Vec<String> = AdjacentCharacterSubstitution
            .exec(&target, &[], &[kb])
            .iter()
            .map(|v| v.label.clone())
            .collect();
        assert!(got.contains(&"et".to_string()) || got.contains(&"yt".to_string()));
    }
}
