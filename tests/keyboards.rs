//! Keyboard adjacency invariants, exercised against the real registry
//! rather than a hand-built layout.

use domtypo::languages::build_registry;

#[test]
fn every_keyboard_cell_has_at_most_four_neighbours() {
    let registry = build_registry();
    for kb in registry.keyboards(&["all".to_string()]) {
        for row in &kb.layout {
            for &c in row {
                if c == ' ' {
                    continue;
                }
                assert!(kb.adjacent(c).len() <= 4, "keyboard {} glyph {c:?} has more than 4 neighbours", kb.code);
            }
        }
    }
}

#[test]
fn every_active_language_has_at_least_one_keyboard() {
    let registry = build_registry();
    for lang in registry.get(&["all".to_string()]) {
        let has_one = registry.keyboards(&["all".to_string()]).iter().any(|kb| kb.language_code == lang.code);
        assert!(has_one, "language {} has no registered keyboard", lang.code);
    }
}
