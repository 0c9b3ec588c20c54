//! Arabic language data and keyboards.

use std::collections::BTreeMap;

use super::{Keyboard, Language};

pub fn register() -> (Language, Vec<Keyboard>) {
    let graphemes: Vec<String> = [
        "ض", "ص", "ث", "ق", "ف", "غ", "ع", "ه", "خ", "ح", "ج", "ة", "ش", "س", "ي", "ب", "ل", "ا",
        "ت", "ن", "م", "ك", "ظ", "ط", "ذ", "د", "ز", "ر", "و",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    let mut numerals = BTreeMap::new();
    for (glyph, card, translit) in [
        ("٠", "صفر", "sifr"),
        ("١", "واحد", "wa7ed"),
        ("٢", "اتنين", "etneyn"),
        ("٣", "تلاتة", "talata"),
        ("٤", "اربعة", "arba3a"),
        ("٥", "خمسة", "7amsa"),
        ("٦", "ستة", "setta"),
        ("٧", "سابعة", "sab3a"),
        ("٨", "تمانية", "tamanya"),
        ("٩", "تسعة", "tes3a"),
    ] {
        numerals.insert(glyph.to_string(), vec![card.to_string(), translit.to_string()]);
    }

    let mut homoglyphs = BTreeMap::new();
    homoglyphs.insert(
        "ه".into(),
        vec!["0", "ο", "о", "ȯ", "ọ", "ơ", "ö"].into_iter().map(String::from).collect(),
    );
    homoglyphs.insert("خ".into(), vec!["ج".into(), "ح".into()]);
    homoglyphs.insert("ح".into(), vec!["خ".into(), "ج".into()]);
    homoglyphs.insert("ج".into(), vec!["خ".into(), "ح".into()]);
    homoglyphs.insert("س".into(), vec!["vv".into(), "ѡ".into(), "ա".into()]);
    homoglyphs.insert(
        "ا".into(),
        vec!["1", "l", "í", "ï", "ı", "ι", "ǐ", "ĭ"].into_iter().map(String::from).collect(),
    );

    let lang = Language {
        code: "ar".to_string(),
        name: "Arabic".to_string(),
        graphemes,
        vowels: Vec::new(),
        numerals,
        homoglyphs,
        homophones: Vec::new(),
        misspellings: Vec::new(),
        antonyms: BTreeMap::new(),
    };

    let keyboards = vec![
        Keyboard::from_rows(
            "ar1",
            "Arabic Standard",
            "ar",
            &["١٢٣٤٥٦٧٨٩٠", "ةجحخهعغفقثصض", " كمنتالبيسش", "  ورزدذطظ"],
        ),
        Keyboard::from_rows(
            "ar4",
            "Arabic QWERTY",
            "ar",
            &["١٢٣٤٥٦٧٨٩٠", "ظثةهيوطترعشق", " لكجحغفدسا", "  منبذصخز"],
        ),
    ];

    (lang, keyboards)
}
