//! Algorithm Registry — the permutation engine.
//!
//! Each generator is a small standalone module implementing the
//! `Algorithm` trait. `build_registry` constructs one instance of each and
//! is called once at startup; the registry is read-only after that.

mod aci;
mod acs;
mod ar;
mod bf;
mod cm;
mod co;
mod cr;
mod cs;
mod dcr;
mod dh;
mod hg;
mod hi;
mod hr;
mod md;
mod mds;
mod ns;
mod pi;
mod sd;
mod si;
mod sp;
mod subdomain_do;
mod tld;
mod vs;
mod ws;

use std::collections::BTreeMap;

use crate::domain::{Target, Variant};
use crate::languages::{Keyboard, Language};

/// Pure function of the target plus the active language/keyboard sets
/// injected at registration time.
pub trait Algorithm: Send + Sync {
    fn id(&self) -> &'static str;
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;

    /// Produces zero or more variant labels from one target. Implementors
    /// must self-exclude (never emit the target's own canonical form),
    /// preserve prefix/suffix unless the algorithm's nature is to modify
    /// them, and be deterministic.
    fn exec(&self, target: &Target, languages: &[Language], keyboards: &[Keyboard]) -> Vec<Variant>;
}

/// Wraps a generated label/prefix/suffix into a self-excluding Variant, or
/// `None` if it is identical to the target's own canonical form. Shared by
/// every generator so the self-exclusion invariant lives in one place.
fn emit(algo: &'static str, target: &Target, prefix: &str, label: &str, suffix: &str) -> Option<Variant> {
    if label == target.label && prefix == target.prefix && suffix == target.suffix {
        return None;
    }
    if label.is_empty() {
        return None;
    }
    Some(Variant::new(algo, prefix, label, suffix))
}

pub struct Registry {
    algorithms: BTreeMap<String, Box<dyn Algorithm>>,
}

impl Registry {
    pub fn resolve(&self, codes: &[String]) -> Vec<&dyn Algorithm> {
        if codes.iter().any(|c| c.eq_ignore_ascii_case("all")) {
            return self.algorithms.values().map(|b| b.as_ref()).collect();
        }
        codes
            .iter()
            .filter_map(|c| self.algorithms.get(&c.to_lowercase()).map(|b| b.as_ref()))
            .collect()
    }

    pub fn codes(&self) -> Vec<String> {
        self.algorithms.keys().cloned().collect()
    }

    pub fn get(&self, code: &str) -> Option<&dyn Algorithm> {
        self.algorithms.get(&code.to_lowercase()).map(|b| b.as_ref())
    }
}

pub fn build_registry() -> Registry {
    let list: Vec<Box<dyn Algorithm>> = vec![
        Box::new(co::CharacterOmission),
        Box::new(cr::CharacterRepeat),
        Box::new(cs::CharacterSwap),
        Box::new(cm::CharacterMissing),
        Box::new(ar::AlphabetReplacement),
        Box::new(aci::AdjacentCharacterInsertion),
        Box::new(acs::AdjacentCharacterSubstitution),
        Box::new(hg::Homoglyph),
        Box::new(hi::HomoglyphInsertion),
        Box::new(hr::HomophoneReplacement),
        Box::new(md::MissingDot),
        Box::new(mds::MissingDash),
        Box::new(subdomain_do::DotOmission),
        Box::new(pi::PeriodInsertion),
        Box::new(si::SubdomainInsertion),
        Box::new(sd::StripDash),
        Box::new(sp::SimilarSpelling),
        Box::new(vs::VowelSwap),
        Box::new(ns::NumeralSwap),
        Box::new(bf::BitFlipping),
        Box::new(tld::TldSubstitution::all()),
        Box::new(tld::TldSubstitution::two_label()),
        Box::new(tld::TldSubstitution::three_label()),
        Box::new(dcr::DoubleCharacterReplacement),
        Box::new(dh::DotHyphenSubstitution),
        Box::new(ws::WordSwap),
    ];

    let mut algorithms = BTreeMap::new();
    for algo in list {
        algorithms.insert(algo.id().to_string(), algo);
    }
    Registry { algorithms }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parse;

    fn ctx() -> (Vec<Language>, Vec<Keyboard>) {
        let reg = crate::languages::build_registry();
        (reg.get(&["en".to_string()]), reg.keyboards(&["all".to_string()]))
    }

    #[test]
    fn self_exclusion_holds_for_every_algorithm() {
        let target = parse("google.com").unwrap();
        let registry = build_registry();
        let (langs, kbs) = ctx();
        for algo in registry.resolve(&["all".to_string()]) {
            for v in algo.exec(&target, &langs, &kbs) {
                assert_ne!(
                    v.fqdn(),
                    target.canonical(),
                    "algorithm {} produced the target itself",
                    algo.id()
                );
            }
        }
    }

    #[test]
    fn determinism_same_input_same_output_set() {
        let target = parse("google.com").unwrap();
        let registry = build_registry();
        let (langs, kbs) = ctx();
        for algo in registry.resolve(&["all".to_string()]) {
            let mut a: Vec<String> = algo.exec(&target, &langs, &kbs).iter().map(|v| v.fqdn()).collect();
            let mut b: Vec<String> = algo.exec(&target, &langs, &kbs).iter().map(|v| v.fqdn()).collect();
            a.sort();
            b.sort();
            assert_eq!(a, b, "algorithm {} is not deterministic", algo.id());
        }
    }

    #[test]
    fn character_omission_drops_exactly_one_character_per_position() {
        let target = parse("google.com").unwrap();
        let (langs, kbs) = ctx();
        let got: std::collections::HashSet<String> =
            co::CharacterOmission.exec(&target, &langs, &kbs).iter().map(|v| v.fqdn()).collect();
        let expected: std::collections::HashSet<String> = [
            "gogle.com", "oogle.com", "goole.com", "googe.com", "googl.com", "google.om",
            "google.cm", "google.co",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        assert_eq!(got, expected);
        assert!(!got.contains("google.com"));
    }

    #[test]
    fn character_swap_transposes_each_adjacent_pair() {
        let target = parse("google.com").unwrap();
        let (langs, kbs) = ctx();
        let got: Vec<String> = cs::CharacterSwap.exec(&target, &langs, &kbs).iter().map(|v| v.fqdn()).collect();
        for expect in ["ogogle.com", "gogole.com", "goolge.com", "googel.com"] {
            assert!(got.contains(&expect.to_string()), "missing {expect}");
        }
        assert_eq!(got.len(), target.label.len() - 2);
    }

    #[test]
    fn vowel_swap_substitutes_every_vowel_position() {
        let target = parse("example.com").unwrap();
        let (langs, kbs) = ctx();
        let variants = vs::VowelSwap.exec(&target, &langs, &kbs);
        assert!(variants.iter().any(|v| v.fqdn() == "excmple.com"));
        for v in &variants {
            assert_ne!(v.fqdn(), "example.com");
        }
    }
}
