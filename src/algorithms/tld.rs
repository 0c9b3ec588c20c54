//! TLD Substitution — replaces the public suffix with each other known
//! suffix from the static table (`crate::tlds`). `tld2`/`tld3` restrict
//! the replacement pool to two-/three-label suffixes.

use super::{emit, Algorithm};
use crate::domain::{Target, Variant};
use crate::languages::{Keyboard, Language};
use crate::tlds;

pub struct TldSubstitution {
    id: &'static str,
    name: &'static str,
    pool: fn() -> Vec<&'static str>,
}

impl TldSubstitution {
    pub fn all() -> Self {
        TldSubstitution { id: "tld", name: "TLD Substitution", pool: tlds::all }
    }

    pub fn two_label() -> Self {
        TldSubstitution {
            id: "tld2",
            name: "TLD Substitution (two-label)",
            pool: || tlds::DOUBLE.to_vec(),
        }
    }

    pub fn three_label() -> Self {
        TldSubstitution {
            id: "tld3",
            name: "TLD Substitution (three-label)",
            pool: || tlds::TRIPLE.to_vec(),
        }
    }
}

impl Algorithm for TldSubstitution {
    fn id(&self) -> &'static str {
        self.id
    }
    fn name(&self) -> &'static str {
        self.name
    }
    fn description(&self) -> &'static str {
        "Replaces the public suffix with another known suffix"
    }

    fn exec(&self, target: &Target, _languages: &[Language], _keyboards: &[Keyboard]) -> Vec<Variant> {
        let mut out = Vec::new();
        for suffix in (self.pool)() {
            if suffix == target.suffix {
                continue;
            }
            if let Some(v) = emit(self.id, target, &target.prefix, &target.label, suffix) {
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
    fn replaces_suffix_with_other_known_suffixes() {
        let target = parse("example.com").unwrap();
        let variants = TldSubstitution::all().exec(&target, &[], &[]);
        assert!(variants.iter().any(|v| v.suffix == "net"));
        assert!(variants.iter().all(|v| v.suffix != "com"));
    }

    #[test]
    fn two_label_pool_only_uses_double_suffixes() {
        let target = parse("example.com").unwrap();
        let variants = TldSubstitution::two_label().exec(&target, &[], &[]);
        for v in &variants {
            assert!(tlds::DOUBLE.contains(&v.suffix.as_str()));
        }
    }
}
