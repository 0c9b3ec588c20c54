//! Missing Dot — deletes any `.` separator in the fqdn: between the
//! prefix and the label, between the label and the suffix, or (for
//! multi-label suffixes like `co.uk`) within the suffix itself. `do`
//! restricts this to only the label/suffix boundary.

use super::{emit, Algorithm};
use crate::domain::{Target, Variant};
use crate::languages::{Keyboard, Language};

pub struct MissingDot;

impl Algorithm for MissingDot {
    fn id(&self) -> &'static str {
        "md"
    }
    fn name(&self) -> &'static str {
        "Missing Dot"
    }
    fn description(&self) -> &'static str {
        "Deletes a dot separator anywhere in the domain"
    }

    fn exec(&self, target: &Target, _languages: &[Language], _keyboards: &[Keyboard]) -> Vec<Variant> {
        let mut out = Vec::new();

        if !target.prefix.is_empty() {
            let merged = format!("{}{}", target.prefix, target.label);
            if let Some(v) = emit(self.id(), target, "", &merged, &target.suffix) {
                out.push(v);
            }
        }

        let suffix_parts: Vec<&str> = target.suffix.split('.').collect();
        if let Some((first, rest)) = suffix_parts.split_first() {
            let merged_label = format!("{}{}", target.label, first);
            let new_suffix = rest.join(".");
            if let Some(v) = emit(self.id(), target, &target.prefix, &merged_label, &new_suffix) {
                out.push(v);
            }
        }

        for i in 1..suffix_parts.len() {
            let mut parts = suffix_parts.clone();
            let merged = format!("{}{}", parts[i - 1], parts[i]);
            parts.splice(i - 1..=i, [merged.as_str()]);
            let new_suffix = parts.join(".");
            if let Some(v) = emit(self.id(), target, &target.prefix, &target.label, &new_suffix) {
                out.push(v);
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
    fn merges_label_and_suffix() {
        let target = parse("example.com").unwrap();
        let got: Vec<String> = MissingDot.exec(&target, &[], &[]).iter().map(|v| v.fqdn()).collect();
        assert!(got.contains(&"examplecom".to_string()));
    }

    #[test]
    fn merges_prefix_and_label() {
        let target = parse("www.example.com").unwrap();
        let got: Vec<String> = MissingDot.exec(&target, &[], &[]).iter().map(|v| v.fqdn()).collect();
        assert!(got.contains(&"wwwexample.com".to_string()));
    }
}
