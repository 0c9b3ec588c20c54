//! Homophone Replacement — substitutes per the active language's
//! homophone equivalence classes, generalized to any language's table
//! instead of a hardcoded English list.

use super::{emit, Algorithm};
use crate::domain::{Target, Variant};
use crate::languages::{Keyboard, Language};

pub struct HomophoneReplacement;

impl Algorithm for HomophoneReplacement {
    fn id(&self) -> &'static str {
        "hr"
    }
    fn name(&self) -> &'static str {
        "Homophone Replacement"
    }
    fn description(&self) -> &'static str {
        "Substitutes a same-sounding word or substring"
    }

    fn exec(&self, target: &Target, languages: &[Language], _keyboards: &[Keyboard]) -> Vec<Variant> {
        let mut out = Vec::new();
        for lang in languages {
            for variant in lang.similar_sounds(&target.label) {
                if let Some(v) = emit(self.id(), target, &target.prefix, &variant, &target.suffix) {
                    out.push(v);
                }
            }
        }
        out
    }
}
