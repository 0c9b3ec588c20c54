//! Integration coverage for the algorithm registry end to end: a real
//! `languages::build_registry()` feeding every generator, exercising
//! invariants across the whole registry rather than one algorithm at a
//! time.

use domtypo::algorithms::build_registry;
use domtypo::domain::parse;
use domtypo::languages;

#[test]
fn every_registered_code_is_resolvable_individually() {
    let registry = build_registry();
    let (langs, kbs) = ctx();
    let target = parse("example.com").unwrap();

    for code in registry.codes() {
        let resolved = registry.resolve(&[code.clone()]);
        assert_eq!(resolved.len(), 1, "code {code} did not resolve to exactly one algorithm");
        // Every algorithm must at least run without panicking on a plain target.
        let _ = resolved[0].exec(&target, &langs, &kbs);
    }
}

#[test]
fn keyboard_based_generators_produce_nothing_without_active_keyboards() {
    let registry = build_registry();
    let langs = languages::build_registry().get(&["en".to_string()]);
    let target = parse("example.com").unwrap();

    for code in ["aci", "acs"] {
        let algo = registry.get(code).unwrap();
        let variants = algo.exec(&target, &langs, &[]);
        assert!(variants.is_empty(), "{code} should produce nothing with no active keyboards");
    }
}

#[test]
fn supplemental_algorithms_are_excluded_unless_requested_individually_or_via_all() {
    let registry = build_registry();
    assert!(registry.codes().contains(&"dh".to_string()));
    assert!(registry.codes().contains(&"ws".to_string()));

    let just_co = registry.resolve(&["co".to_string()]);
    assert!(just_co.iter().all(|a| a.id() != "dh" && a.id() != "ws"));

    let everything = registry.resolve(&["all".to_string()]);
    assert!(everything.iter().any(|a| a.id() == "dh"));
    assert!(everything.iter().any(|a| a.id() == "ws"));
}

fn ctx() -> (Vec<domtypo::languages::Language>, Vec<domtypo::languages::Keyboard>) {
    let reg = languages::build_registry();
    (reg.get(&["all".to_string()]), reg.keyboards(&["all".to_string()]))
}
