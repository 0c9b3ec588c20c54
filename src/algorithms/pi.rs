//! Period Insertion — inserts a `.` between every adjacent character pair
//! in the label, turning part of it into an extra subdomain level.

use super::{emit, Algorithm};
use crate::domain::{Target, Variant};
use crate::languages::{Keyboard, Language};

pub struct PeriodInsertion;

impl Algorithm for PeriodInsertion {
    fn id(&self) -> &'static str {
        "pi"
    }
    fn name(&self) -> &'static str {
        "Period Insertion"
    }
    fn description(&self) -> &'static str {
        "Inserts a dot between every adjacent pair of characters"
    }

    fn exec(&self, target: &Target, _languages: &[Language], _keyboards: &[Keyboard]) -> Vec<Variant> {
        let chars: Vec<char> = target.label.chars().collect();
        let mut out = Vec::new();

        for i in 1..chars.len() {
            let head: String = chars[..i].iter().collect();
            let tail: String = chars[i..].iter().collect();
            let new_prefix = if target.prefix.is_empty() {
                head
            } else {
                format!("{}.{}", target.prefix, head)
            };
            if let Some(v) = emit(self.id(), target, &new_prefix, &tail, &target.suffix) {
                out.push(v);
            }
        }
        out
    }
}
