//! Adjacent Character Insertion — inserts a keyboard-adjacent character
//! before or after its originating position.

use super::{emit, Algorithm};
use crate::domain::{Target, Variant};
use crate::languages::{Keyboard, Language};

pub struct AdjacentCharacterInsertion;

impl Algorithm for AdjacentCharacterInsertion {
    fn id(&self) -> &'static str {
        "aci"
    }
    fn name(&self) -> &'static str {
        "Adjacent Character Insertion"
    }
    fn description(&self) -> &'static str {
        "Inserts a keyboard-adjacent character before or after each position"
    }

    fn exec(&self, target: &Target, _languages: &[Language], keyboards: &[Keyboard]) -> Vec<Variant> {
        let chars: Vec<char> = target.label.chars().collect();
        let mut out = Vec::new();

        for (i, &c) in chars.iter().enumerate() {
            for kb in keyboards {
                for adj in kb.adjacent(c) {
                    let mut before = chars.clone();
                    before.insert(i, adj);
                    let before: String = before.into_iter().collect();
                    if let Some(v) = emit(self.id(), target, &target.prefix, &before, &target.suffix) {
                        out.push(v);
                    }

                    let mut after = chars.clone();
                    after.insert(i + 1, adj);
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
    use crate::languages::Keyboard as Kb;

    #[test]
    fn inserts_adjacent_keys_around_each_char() {
        let target = parse("to.com").unwrap();
        let kb = Kb::from_rows("t", "t", "en", &["qwe", "rty"]);
        let variants = AdjacentCharacterInsertion.exec(&target, &[], &[kb]);
        assert!(!variants.is_empty());
        for v in &variants {
            assert_eq!(v.label.chars().count(), 3);
        }
    }
}
