//! Dot/Hyphen Substitution — swaps `.`/`-` separators for each other.
//! Supplemental: not part of the base algorithm table, excluded unless
//! explicitly selected or run via `-t all`.

use super::{emit, Algorithm};
use crate::domain::{Target, Variant};
use crate::languages::{Keyboard, Language};

pub struct DotHyphenSubstitution;

impl Algorithm for DotHyphenSubstitution {
    fn id(&self) -> &'static str {
        "dh"
    }
    fn name(&self) -> &'static str {
        "Dot/Hyphen Substitution"
    }
    fn description(&self) -> &'static str {
        "Swaps dot and hyphen separators for each other"
    }

    fn exec(&self, target: &Target, _languages: &[Language], _keyboards: &[Keyboard]) -> Vec<Variant> {
        let mut out = Vec::new();

        if target.label.contains('-') {
            let dotted = target.label.replace('-', ".");
            let parts: Vec<&str> = dotted.split('.').collect();
            if let Some((first, rest)) = parts.split_first() {
                let new_prefix = if target.prefix.is_empty() {
                    rest.join(".")
                } else {
                    format!("{}.{}", target.prefix, rest.join("."))
                };
                if !rest.is_empty() {
                    if let Some(v) = emit(self.id(), target, &new_prefix, first, &target.suffix) {
                        out.push(v);
                    }
                }
            }
        }

        if !target.prefix.is_empty() {
            let hyphenated_prefix = target.prefix.replace('.', "-");
            let merged_label = format!("{}-{}", hyphenated_prefix, target.label);
            if let Some(v) = emit(self.id(), target, "", &merged_label, &target.suffix) {
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
    fn swaps_hyphen_for_dot() {
        let target = parse("my-brand.com").unwrap();
        let got: Vec<String> = DotHyphenSubstitution.exec(&target, &[], &[]).iter().map(|v| v.fqdn()).collect();
        assert!(got.contains(&"my.brand.com".to_string()));
    }

    #[test]
    fn swaps_dot_for_hyphen() {
        let target = parse("www.example.com").unwrap();
        let got: Vec<String> = DotHyphenSubstitution.exec(&target, &[], &[]).iter().map(|v| v.fqdn()).collect();
        assert!(got.contains(&"www-example.com".to_string()));
    }
}
