//! Subdomain Insertion — prepends a common subdomain token.

use super::{emit, Algorithm};
use crate::domain::{Target, Variant};
use crate::languages::{Keyboard, Language};

const TOKENS: &[&str] = &["www", "mail", "m", "ftp", "secure", "login", "webmail", "portal"];

pub struct SubdomainInsertion;

impl Algorithm for SubdomainInsertion {
    fn id(&self) -> &'static str {
        "si"
    }
    fn name(&self) -> &'static str {
        "Subdomain Insertion"
    }
    fn description(&self) -> &'static str {
        "Prepends a common subdomain token"
    }

    fn exec(&self, target: &Target, _languages: &[Language], _keyboards: &[Keyboard]) -> Vec<Variant> {
        let mut out = Vec::new();
        for token in TOKENS {
            let new_prefix = if target.prefix.is_empty() {
                token.to_string()
            } else {
                format!("{}.{}", token, target.prefix)
            };
            if let Some(v) = emit(self.id(), target, &new_prefix, &target.label, &target.suffix) {
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
    fn prepends_every_token() {
        let target = parse("example.com").unwrap();
        let got: Vec<String> = SubdomainInsertion.exec(&target, &[], &[]).iter().map(|v| v.fqdn()).collect();
        assert_eq!(got.len(), TOKENS.len());
        assert!(got.contains(&"www.example.com".to_string()));
    }
}
