//! Word Swap — for multi-word labels (hyphen or case-boundary
//! separated), swaps the word order. Supplemental: not part of the base
//! algorithm table, excluded unless explicitly selected or run via
//! `-t all`.

use super::{emit, Algorithm};
use crate::domain::{Target, Variant};
use crate::languages::{Keyboard, Language};

pub struct WordSwap;

impl Algorithm for WordSwap {
    fn id(&self) -> &'static str {
        "ws"
    }
    fn name(&self) -> &'static str {
        "Word Swap"
    }
    fn description(&self) -> &'static str {
        "Swaps the order of words in a multi-word label"
    }

    fn exec(&self, target: &Target, _languages: &[Language], _keyboards: &[Keyboard]) -> Vec<Variant> {
        let words = split_words(&target.label);
        if words.len() < 2 {
            return Vec::new();
        }

        let mut out = Vec::new();
        for i in 0..words.len() - 1 {
            let mut swapped = words.clone();
            swapped.swap(i, i + 1);
            let variant = swapped.join("-");
            if let Some(v) = emit(self.id(), target, &target.prefix, &variant, &target.suffix) {
                out.push(v);
            }
        }

        let mut reversed = words.clone();
        reversed.reverse();
        let variant = reversed.join("-");
        if let Some(v) = emit(self.id(), target, &target.prefix, &variant, &target.suffix) {
            out.push(v);
        }

        out
    }
}

fn split_words(label: &str) -> Vec<String> {
    if label.contains('-') {
        return label.split('-').map(str::to_string).collect();
    }
    let mut words = Vec::new();
    let mut current = String::new();
    for c in label.chars() {
        if c.is_uppercase() && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parse;

    #[test]
    fn swaps_hyphenated_words() {
        let target = parse("my-brand.com").unwrap();
        let got: Vec<String> = WordSwap.exec(&target, &[], &[]).iter().map(|v| v.label.clone()).collect();
        assert!(got.contains(&"brand-my".to_string()));
    }

    #[test]
    fn no_output_for_single_word() {
        let target = parse("example.com").unwrap();
        assert!(WordSwap.exec(&target, &[], &[]).is_empty());
    }
}
