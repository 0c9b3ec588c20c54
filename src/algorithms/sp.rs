//! Similar Spelling — applies the active language's misspelling
//! equivalence classes.

use super::{emit, Algorithm};
use crate::domain::{Target, Variant};
use crate::languages::{Keyboard, Language};

pub struct SimilarSpelling;

impl Algorithm for SimilarSpelling {
    fn id(&self) -> &'static str {
        "sp"
    }
    fn name(&self) -> &'static str {
        "Similar Spelling"
    }
    fn description(&self) -> &'static str {
        "Applies a common misspelling of part of the label"
    }

    fn exec(&self, target: &Target, languages: &[Language], _keyboards: &[Keyboard]) -> Vec<Variant> {
        let mut out = Vec::new();
        for lang in languages {
            for variant in lang.similar_spellings(&target.label) {
                if let Some(v) = emit(self.id(), target, &target.prefix, &variant, &target.suffix) {
                    out.push(v);
                }
            }
        }
        out
    }
}
