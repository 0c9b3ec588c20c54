//! Missing Dash — deletes a `-` from any component of the domain, unlike
//! `sd` which is restricted to the label.

use super::{emit, Algorithm};
use crate::domain::{Target, Variant};
use crate::languages::{Keyboard, Language};

pub struct MissingDash;

fn without_dash_at(s: &str, i: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    chars[..i].iter().chain(chars[i + 1..].iter()).collect()
}

impl Algorithm for MissingDash {
    fn id(&self) -> &'static str {
        "mds"
    }
    fn name(&self) -> &'static str {
        "Missing Dash"
    }
    fn description(&self) -> &'static str {
        "Deletes a dash from any part of the domain"
    }

    fn exec(&self, target: &Target, _languages: &[Language], _keyboards: &[Keyboard]) -> Vec<Variant> {
        let mut out = Vec::new();

        for (i, c) in target.prefix.chars().enumerate() {
            if c != '-' {
                continue;
            }
            let variant = without_dash_at(&target.prefix, i);
            if let Some(v) = emit(self.id(), target, &variant, &target.label, &target.suffix) {
                out.push(v);
            }
        }
        for (i, c) in target.label.chars().enumerate() {
            if c != '-' {
                continue;
            }
            let variant = without_dash_at(&target.label, i);
            if let Some(v) = emit(self.id(), target, &target.prefix, &variant, &target.suffix) {
                out.push(v);
            }
        }
        for (i, c) in target.suffix.chars().enumerate() {
            if c != '-' {
                continue;
            }
            let variant = without_dash_at(&target.suffix, i);
            if let Some(v) = emit(self.id(), target, &target.prefix, &target.label, &variant) {
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
    fn strips_dash_from_label() {
        let target = parse("my-brand.com").unwrap();
        let got: Vec<String> = MissingDash.exec(&target, &[], &[]).iter().map(|v| v.label.clone()).collect();
        assert_eq!(got, vec!["mybrand".to_string()]);
    }

    #[test]
    fn strips_dash_from_prefix() {
        let target = parse("my-sub.example.com").unwrap();
        let got: Vec<String> = MissingDash.exec(&target, &[], &[]).iter().map(|v| v.fqdn()).collect();
        assert!(got.contains(&"mysub.example.com".to_string()));
    }
}
