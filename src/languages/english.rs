//! English language data and QWERTY-family keyboards.

use std::collections::BTreeMap;

use super::{Keyboard, Language};

pub fn register() -> (Language, Vec<Keyboard>) {
    let graphemes: Vec<String> = ('a'..='z').map(|c| c.to_string()).collect();
    let vowels = ["a", "e", "i", "o", "u"].map(String::from).to_vec();

    let mut numerals = BTreeMap::new();
    let cardinals = [
        "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    ];
    let ordinals = [
        "zeroth", "first", "second", "third", "fourth", "fifth", "sixth", "seventh", "eighth",
        "ninth", "tenth",
    ];
    for (i, (card, ord)) in cardinals.iter().zip(ordinals.iter()).enumerate() {
        numerals.insert(i.to_string(), vec![card.to_string(), ord.to_string()]);
    }

    let mut homoglyphs = BTreeMap::new();
    homoglyphs.insert("o".into(), vec!["0".into(), "ο".into(), "о".into()]);
    homoglyphs.insert("i".into(), vec!["1".into(), "l".into(), "í".into()]);
    homoglyphs.insert("l".into(), vec!["1".into(), "i".into(), "ⅼ".into()]);
    homoglyphs.insert("m".into(), vec!["rn".into()]);
    homoglyphs.insert("rn".into(), vec!["m".into()]);
    homoglyphs.insert("vv".into(), vec!["w".into()]);
    homoglyphs.insert("w".into(), vec!["vv".into()]);
    homoglyphs.insert("e".into(), vec!["3".into(), "е".into()]);
    homoglyphs.insert("a".into(), vec!["а".into(), "@".into()]);
    homoglyphs.insert("s".into(), vec!["5".into(), "$".into()]);
    homoglyphs.insert("g".into(), vec!["9".into(), "q".into()]);
    homoglyphs.insert("b".into(), vec!["6".into()]);
    homoglyphs.insert("t".into(), vec!["7".into()]);

    let misspellings = vec![
        vec!["ei".to_string(), "ie".to_string()],
        vec!["ance".to_string(), "ence".to_string()],
        vec!["able".to_string(), "ible".to_string()],
        vec!["ent".to_string(), "ant".to_string()],
        vec!["ize".to_string(), "ise".to_string()],
        vec!["or".to_string(), "our".to_string()],
        vec!["er".to_string(), "re".to_string()],
    ];

    let homophones = vec![
        vec!["to".to_string(), "too".to_string(), "two".to_string()],
        vec!["there".to_string(), "their".to_string(), "theyre".to_string()],
        vec!["for".to_string(), "four".to_string()],
        vec!["your".to_string(), "youre".to_string()],
        vec!["site".to_string(), "sight".to_string(), "cite".to_string()],
        vec!["buy".to_string(), "by".to_string(), "bye".to_string()],
        vec!["one".to_string(), "won".to_string()],
        vec!["right".to_string(), "write".to_string()],
    ];

    let mut antonyms = BTreeMap::new();
    antonyms.insert("up".into(), vec!["down".into()]);
    antonyms.insert("in".into(), vec!["out".into()]);
    antonyms.insert("on".into(), vec!["off".into()]);

    let lang = Language {
        code: "en".to_string(),
        name: "English".to_string(),
        graphemes,
        vowels,
        numerals,
        homoglyphs,
        homophones,
        misspellings,
        antonyms,
    };

    let keyboards = vec![
        Keyboard::from_rows(
            "en-qwerty",
            "QWERTY",
            "en",
            &["1234567890-", "qwertyuiop", "asdfghjkl", "zxcvbnm"],
        ),
        Keyboard::from_rows(
            "en-qwertz",
            "QWERTZ",
            "en",
            &["1234567890-", "qwertzuiop", "asdfghjkl", "yxcvbnm"],
        ),
        Keyboard::from_rows(
            "en-azerty",
            "AZERTY",
            "en",
            &["1234567890-", "azertyuiop", "qsdfghjklm", " wxcvbn"],
        ),
        Keyboard::from_rows(
            "en-dvorak",
            "Dvorak",
            "en",
            &["1234567890-", "pyfgcrl", "aoeuidhtns", "qjkxbmwvz"],
        ),
    ];

    (lang, keyboards)
}
