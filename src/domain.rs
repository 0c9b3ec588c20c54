//! Target/Variant domain model.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::tlds;

/// The user-supplied fully-qualified domain, parsed into components.
///
/// Invariant: `label` is non-empty for a valid target; reassembling
/// `prefix + label + suffix` with `.` separators (collapsing empty
/// components) reproduces the canonical representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub prefix: String,
    pub label: String,
    pub suffix: String,
    pub input: String,
}

impl Target {
    pub fn valid(&self) -> bool {
        !self.label.is_empty()
    }

    /// Reassembles prefix/label/suffix into a canonical dotted form,
    /// collapsing empty components.
    pub fn canonical(&self) -> String {
        [self.prefix.as_str(), self.label.as_str(), self.suffix.as_str()]
            .iter()
            .filter(|s| !s.is_empty())
            .cloned()
            .collect::<Vec<_>>()
            .join(".")
    }
}

/// Splits an FQDN into (prefix, label, suffix) using the built-in TLD table.
/// Empty prefix is permitted.
pub fn parse(input: &str) -> Result<Target> {
    let trimmed = input.trim().trim_end_matches('.');
    if trimmed.is_empty() {
        return Err(Error::Parse(input.to_string()));
    }

    let labels: Vec<&str> = trimmed.split('.').collect();
    if labels.iter().any(|l| l.is_empty()) {
        return Err(Error::Parse(input.to_string()));
    }

    let suffix = tlds::longest_match(&labels);
    let suffix_len = suffix.matches('.').count() + 1;

    if labels.len() <= suffix_len {
        // No room left for a registrable label: treat the first label as
        // the name and the rest as suffix.
        let label = labels[0].to_string();
        let suffix = labels[1..].join(".");
        return Ok(Target {
            prefix: String::new(),
            label,
            suffix,
            input: input.to_string(),
        });
    }

    let label_idx = labels.len() - suffix_len - 1;
    let prefix = labels[..label_idx].join(".");
    let label = labels[label_idx].to_string();

    Ok(Target {
        prefix,
        label,
        suffix,
        input: input.to_string(),
    })
}

/// A generated candidate look-alike domain.
///
/// Created by a generator, mutated only by collectors as it flows through
/// the pipeline, frozen at output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Variant {
    pub id: u64,
    pub prefix: String,
    pub label: String,
    pub suffix: String,

    pub punycode: Option<String>,
    pub distance: usize,
    pub live: bool,
    pub cached: bool,

    pub algorithm: String,

    #[serde(default)]
    pub meta: BTreeMap<String, String>,
    #[serde(default)]
    pub data: BTreeMap<String, Value>,
}

impl Variant {
    pub fn new(algorithm: &str, prefix: &str, label: &str, suffix: &str) -> Self {
        Variant {
            id: 0,
            prefix: prefix.to_string(),
            label: label.to_string(),
            suffix: suffix.to_string(),
            punycode: None,
            distance: 0,
            live: false,
            cached: false,
            algorithm: algorithm.to_string(),
            meta: BTreeMap::new(),
            data: BTreeMap::new(),
        }
    }

    /// Canonical dotted representation, also used as the dedup fingerprint.
    pub fn fqdn(&self) -> String {
        [self.prefix.as_str(), self.label.as_str(), self.suffix.as_str()]
            .iter()
            .filter(|s| !s.is_empty())
            .cloned()
            .collect::<Vec<_>>()
            .join(".")
    }

    pub fn set_meta(&mut self, key: &str, value: impl Into<String>) {
        self.meta.insert(key.to_string(), value.into());
    }

    pub fn get_meta(&self, key: &str) -> Option<&str> {
        self.meta.get(key).map(|s| s.as_str())
    }

    pub fn set_data(&mut self, key: &str, value: Value) {
        self.data.insert(key.to_string(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_domain() {
        let t = parse("google.com").unwrap();
        assert_eq!(t.prefix, "");
        assert_eq!(t.label, "google");
        assert_eq!(t.suffix, "com");
        assert!(t.valid());
        assert_eq!(t.canonical(), "google.com");
    }

    #[test]
    fn parses_subdomain() {
        let t = parse("www.example.co.uk").unwrap();
        assert_eq!(t.prefix, "www");
        assert_eq!(t.label, "example");
        assert_eq!(t.suffix, "co.uk");
        assert_eq!(t.canonical(), "www.example.co.uk");
    }

    #[test]
    fn rejects_empty_input() {
        assert!(parse("").is_err());
        assert!(parse("..").is_err());
    }

    #[test]
    fn variant_fqdn_collapses_empty_prefix() {
        let v = Variant::new("co", "", "gogle", "com");
        assert_eq!(v.fqdn(), "gogle.com");
    }
}
