//! Character Repeat — doubles a character in the label.

use super::{emit, Algorithm};
use crate::domain::{Target, Variant};
use crate::languages::{Keyboard, Language};

pub struct CharacterRepeat;

impl Algorithm for CharacterRepeat {
    fn id(&self) -> &'static str {
        "cr"
    }
    fn name(&self) -> &'static str {
        "Character Repeat"
    }
    fn description(&self) -> &'static str {
        "Repeating a character in the name"
    }

    fn exec(&self, target: &Target, _languages: &[Language], _keyboards: &[Keyboard]) -> Vec<Variant> {
        let chars: Vec<char> = target.label.chars().collect();
        let mut out = Vec::new();
        for i in 0..chars.len() {
            let mut variant: Vec<char> = chars[..i].to_vec();
            variant.push(chars[i]);
            variant.extend(&chars[i..]);
            let variant: String = variant.into_iter().collect();
            if let Some(v) = emit(self.id(), target, &target.prefix, &variant, &target.suffix) {
                out.push(v);
            }
        }
        out
    }
}
