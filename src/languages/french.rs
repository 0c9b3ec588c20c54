//! French language data and AZERTY keyboard.

use std::collections::BTreeMap;

use super::{Keyboard, Language};

pub fn register() -> (Language, Vec<Keyboard>) {
    let mut graphemes: Vec<String> = ('a'..='z').map(|c| c.to_string()).collect();
    for c in ["é", "è", "ê", "ç", "à", "ù"] {
        graphemes.push(c.to_string());
    }
    let vowels = ["a", "e", "i", "o", "u", "y"].map(String::from).to_vec();

    let mut numerals = BTreeMap::new();
    for (i, (card, ord)) in [
        ("zero", "zero"),
        ("un", "premier"),
        ("deux", "second"),
        ("trois", "troisieme"),
        ("quatre", "quatrieme"),
        ("cinq", "cinquieme"),
        ("six", "sixieme"),
        ("sept", "septieme"),
        ("huit", "huitieme"),
        ("neuf", "neuvieme"),
        ("dix", "dixieme"),
    ]
    .iter()
    .enumerate()
    {
        numerals.insert(i.to_string(), vec![card.to_string(), ord.to_string()]);
    }

    let mut homoglyphs = BTreeMap::new();
    homoglyphs.insert("e".into(), vec!["é".into(), "è".into(), "ê".into(), "3".into()]);
    homoglyphs.insert("c".into(), vec!["ç".into()]);
    homoglyphs.insert("a".into(), vec!["à".into()]);
    homoglyphs.insert("u".into(), vec!["ù".into()]);

    let misspellings = vec![
        vec!["ai".to_string(), "ei".to_string()],
        vec!["ph".to_string(), "f".to_string()],
    ];

    let lang = Language {
        code: "fr".to_string(),
        name: "French".to_string(),
        graphemes,
        vowels,
        numerals,
        homoglyphs,
        homophones: Vec::new(),
        misspellings,
        antonyms: BTreeMap::new(),
    };

    let keyboards = vec![Keyboard::from_rows(
        "fr-azerty",
        "AZERTY",
        "fr",
        &["1234567890", "azertyuiop", "qsdfghjklm", " wxcvbn"],
    )];

    (lang, keyboards)
}
