//! Hebrew language data and keyboard.

use std::collections::BTreeMap;

use super::{Keyboard, Language};

pub fn register() -> (Language, Vec<Keyboard>) {
    let graphemes: Vec<String> = [
        "א", "ב", "ג", "ד", "ה", "ו", "ז", "ח", "ט", "י", "כ", "ל", "מ", "נ", "ס", "ע", "פ", "צ",
        "ק", "ר", "ש", "ת",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    let mut homoglyphs = BTreeMap::new();
    homoglyphs.insert("ו".into(), vec!["י".into()]);
    homoglyphs.insert("י".into(), vec!["ו".into()]);
    homoglyphs.insert("ד".into(), vec!["ר".into()]);
    homoglyphs.insert("ר".into(), vec!["ד".into()]);

    let lang = Language {
        code: "iw".to_string(),
        name: "Hebrew".to_string(),
        graphemes,
        vowels: Vec::new(),
        numerals: BTreeMap::new(),
        homoglyphs,
        homophones: Vec::new(),
        misspellings: Vec::new(),
        antonyms: BTreeMap::new(),
    };

    let keyboards = vec![Keyboard::from_rows(
        "iw1",
        "Hebrew Standard",
        "iw",
        &["1234567890", " פםןוטארק", " ףךלחיעכגדש", " ץתצמנהבסז"],
    )];

    (lang, keyboards)
}
