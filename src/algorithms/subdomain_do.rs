//! Dot Omission — same as `md` but restricted to the separator between
//! the label and the suffix.

use super::{emit, Algorithm};
use crate::domain::{Target, Variant};
use crate::languages::{Keyboard, Language};

pub struct DotOmission;

impl Algorithm for DotOmission {
    fn id(&self) -> &'static str {
        "do"
    }
    fn name(&self) -> &'static str {
        "Dot Omission"
    }
    fn description(&self) -> &'static str {
        "Deletes the dot between the label and the suffix"
    }

    fn exec(&self, target: &Target, _languages: &[Language], _keyboards: &[Keyboard]) -> Vec<Variant> {
        let suffix_parts: Vec<&str> = target.suffix.split('.').collect();
        let Some((first, rest)) = suffix_parts.split_first() else {
            return Vec::new();
        };
        let merged_label = format!("{}{}", target.label, first);
        let new_suffix = rest.join(".");
        emit(self.id(), target, &target.prefix, &merged_label, &new_suffix)
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parse;

    #[test]
    fn merges_only_label_suffix_boundary() {
        let target = parse("example.com").unwrap();
        let got: Vec<String> = DotOmission.exec(&target, &[], &[]).iter().map(|v| v.fqdn()).collect();
        assert_eq!(got, vec!["examplecom".to_string()]);
    }
}
