//! Spanish language data and keyboards.

use std::collections::BTreeMap;

use super::{Keyboard, Language};

pub fn register() -> (Language, Vec<Keyboard>) {
    let mut graphemes: Vec<String> = ('a'..='z').map(|c| c.to_string()).collect();
    graphemes.push("ñ".to_string());
    let vowels = ["a", "e", "i", "o", "u"].map(String::from).to_vec();

    let mut numerals = BTreeMap::new();
    for (i, (card, ord)) in [
        ("cero", "cero"),
        ("uno", "primero"),
        ("dos", "segundo"),
        ("tres", "tercero"),
        ("cuatro", "cuarto"),
        ("cinco", "quinto"),
        ("seis", "sexto"),
        ("siete", "septimo"),
        ("ocho", "octavo"),
        ("nueve", "noveno"),
        ("diez", "decimo"),
    ]
    .iter()
    .enumerate()
    {
        numerals.insert(i.to_string(), vec![card.to_string(), ord.to_string()]);
    }

    let mut homoglyphs = BTreeMap::new();
    homoglyphs.insert("ñ".into(), vec!["n".into(), "ñ".into()]);
    homoglyphs.insert("o".into(), vec!["0".into(), "ó".into()]);
    homoglyphs.insert("i".into(), vec!["1".into(), "í".into()]);
    homoglyphs.insert("a".into(), vec!["á".into()]);
    homoglyphs.insert("e".into(), vec!["é".into()]);
    homoglyphs.insert("u".into(), vec!["ú".into(), "ü".into()]);

    let misspellings = vec![
        vec!["b".to_string(), "v".to_string()],
        vec!["ll".to_string(), "y".to_string()],
        vec!["s".to_string(), "z".to_string()],
    ];

    let homophones = vec![
        vec!["haber".to_string(), "a ver".to_string()],
        vec!["tubo".to_string(), "tuvo".to_string()],
    ];

    let lang = Language {
        code: "es".to_string(),
        name: "Spanish".to_string(),
        graphemes,
        vowels,
        numerals,
        homoglyphs,
        homophones,
        misspellings,
        antonyms: BTreeMap::new(),
    };

    let keyboards = vec![
        Keyboard::from_rows(
            "es1",
            "QWERTY",
            "es",
            &["1234567890-", "qwertyuiop", "asdfghjklñ", "zxcvbnm"],
        ),
        Keyboard::from_rows(
            "es2",
            "QWERTY ISO",
            "es",
            &["1234567890¡", "qwertyuiop", "asdfghjklñ", "zxcvbnm"],
        ),
    ];

    (lang, keyboards)
}
