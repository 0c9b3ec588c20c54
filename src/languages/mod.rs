//! Language Registry and Keyboard Registry.
//!
//! One module per language. Each module registers a `Language` plus the
//! `Keyboard`s built for it.

mod arabic;
mod english;
mod french;
mod hebrew;
mod spanish;

use std::collections::BTreeMap;

/// Per-language writing-system data.
#[derive(Debug, Clone)]
pub struct Language {
    pub code: String,
    pub name: String,
    pub graphemes: Vec<String>,
    pub vowels: Vec<String>,
    /// written form -> [cardinal, ordinal] glyphs, e.g. "1" -> ["one", "first"]
    pub numerals: BTreeMap<String, Vec<String>>,
    /// grapheme -> confusable alternatives (sequences allowed, e.g. "m" -> ["rn"])
    pub homoglyphs: BTreeMap<String, Vec<String>>,
    /// equivalence classes of same-sounding substrings
    pub homophones: Vec<Vec<String>>,
    /// equivalence classes of interchangeable misspelled forms
    pub misspellings: Vec<Vec<String>>,
    pub antonyms: BTreeMap<String, Vec<String>>,
}

impl Language {
    /// Returns the confusables for a single grapheme, empty if none.
    pub fn similar_chars(&self, c: &str) -> Vec<String> {
        self.homoglyphs.get(c).cloned().unwrap_or_default()
    }

    /// For each misspelling equivalence class, if `s` contains any member,
    /// produce the substitutions obtained by replacing that member (every
    /// occurrence) with each other member of the class — independent
    /// per-group substitution (groups are never combined with each other).
    pub fn similar_spellings(&self, s: &str) -> Vec<String> {
        substitute_by_groups(s, &self.misspellings)
    }

    /// Same policy as `similar_spellings`, over the homophone groups.
    pub fn similar_sounds(&self, s: &str) -> Vec<String> {
        substitute_by_groups(s, &self.homophones)
    }
}

fn substitute_by_groups(s: &str, groups: &[Vec<String>]) -> Vec<String> {
    let mut out = Vec::new();
    for group in groups {
        for member in group {
            if member.is_empty() || !s.contains(member.as_str()) {
                continue;
            }
            for other in group {
                if other == member {
                    continue;
                }
                out.push(s.replace(member.as_str(), other));
            }
        }
    }
    out
}

/// Physical keyboard layout for a language.
#[derive(Debug, Clone)]
pub struct Keyboard {
    pub code: String,
    pub name: String,
    pub language_code: String,
    /// Ordered rows; space denotes "no key". Rows may vary in length.
    pub layout: Vec<Vec<char>>,
}

impl Keyboard {
    pub fn from_rows(code: &str, name: &str, language_code: &str, rows: &[&str]) -> Self {
        Keyboard {
            code: code.to_string(),
            name: name.to_string(),
            language_code: language_code.to_string(),
            layout: rows.iter().map(|r| r.chars().collect()).collect(),
        }
    }

    /// Returns the up/down/left/right non-space neighbours of the *first*
    /// occurrence of `c` on the layout, in row-major tie-break order.
    pub fn adjacent(&self, c: char) -> Vec<char> {
        for (r, row) in self.layout.iter().enumerate() {
            for (col, &cell) in row.iter().enumerate() {
                if cell != c {
                    continue;
                }
                let mut out = Vec::with_capacity(4);
                if r > 0 {
                    if let Some(&up) = self.layout[r - 1].get(col) {
                        if up != ' ' {
                            out.push(up);
                        }
                    }
                }
                if r + 1 < self.layout.len() {
                    if let Some(&down) = self.layout[r + 1].get(col) {
                        if down != ' ' {
                            out.push(down);
                        }
                    }
                }
                if col > 0 {
                    let left = row[col - 1];
                    if left != ' ' {
                        out.push(left);
                    }
                }
                if col + 1 < row.len() {
                    let right = row[col + 1];
                    if right != ' ' {
                        out.push(right);
                    }
                }
                return out;
            }
        }
        Vec::new()
    }
}

/// Process-wide table of languages and keyboards, populated once at
/// startup and read-only thereafter.
pub struct Registry {
    languages: BTreeMap<String, Language>,
    keyboards: BTreeMap<String, Keyboard>,
}

impl Registry {
    pub fn get(&self, codes: &[String]) -> Vec<Language> {
        if codes.iter().any(|c| c.eq_ignore_ascii_case("all")) {
            return self.all();
        }
        codes
            .iter()
            .filter_map(|c| self.languages.get(&c.to_lowercase()).cloned())
            .collect()
    }

    pub fn all(&self) -> Vec<Language> {
        self.languages.values().cloned().collect()
    }

    pub fn keyboards(&self, codes: &[String]) -> Vec<Keyboard> {
        if codes.iter().any(|c| c.eq_ignore_ascii_case("all")) {
            return self.keyboards.values().cloned().collect();
        }
        self.keyboards
            .values()
            .filter(|kb| codes.iter().any(|c| c.eq_ignore_ascii_case(&kb.code)))
            .cloned()
            .collect()
    }

    pub fn keyboard_codes(&self) -> Vec<String> {
        self.keyboards.keys().cloned().collect()
    }

    pub fn language_codes(&self) -> Vec<String> {
        self.languages.keys().cloned().collect()
    }
}

/// Builds the process-wide language/keyboard registry. Called once from
/// `Config::build`.
pub fn build_registry() -> Registry {
    let mut languages = BTreeMap::new();
    let mut keyboards = BTreeMap::new();

    for (lang, kbs) in [
        english::register(),
        spanish::register(),
        french::register(),
        arabic::register(),
        hebrew::register(),
    ] {
        for kb in kbs {
            keyboards.insert(kb.code.to_lowercase(), kb);
        }
        languages.insert(lang.code.to_lowercase(), lang);
    }

    Registry { languages, keyboards }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_resolves_all() {
        let reg = build_registry();
        let all = reg.get(&["all".to_string()]);
        assert_eq!(all.len(), reg.language_codes().len());
    }

    #[test]
    fn registry_resolves_single_code() {
        let reg = build_registry();
        let en = reg.get(&["en".to_string()]);
        assert_eq!(en.len(), 1);
        assert_eq!(en[0].code, "en");
    }

    #[test]
    fn keyboard_adjacency_interior_and_corner() {
        let kb = Keyboard::from_rows("t1", "test", "en", &["abc", "def"]);
        assert_eq!(kb.adjacent('b').len(), 3); // a, c, e
        assert_eq!(kb.adjacent('a').len(), 2); // b, d (corner)
    }

    #[test]
    fn adjacency_skips_spaces() {
        let kb = Keyboard::from_rows("t2", "test", "en", &["a b", " c "]);
        // 'a' at (0,0): right is ' ' skipped, down is ' ' skipped -> none
        assert_eq!(kb.adjacent('a'), Vec::<char>::new());
        // 'c' at (1,1): up is ' ' skipped -> none
        assert_eq!(kb.adjacent('c'), Vec::<char>::new());
    }
}
