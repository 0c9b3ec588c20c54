//! Strip Dash — created by omitting a single dash from the label. The Go
//! original ships this as a stub (`plugins/algorithms/sd/sd.go`).

use super::{emit, Algorithm};
use crate::domain::{Target, Variant};
use crate::languages::{Keyboard, Language};

pub struct StripDash;

impl Algorithm for StripDash {
    fn id(&self) -> &'static str {
        "sd"
    }
    fn name(&self) -> &'static str {
        "Strip Dash"
    }
    fn description(&self) -> &'static str {
        "Created by omitting a single dash from the domain"
    }

    fn exec(&self, target: &Target, _languages: &[Language], _keyboards: &[Keyboard]) -> Vec<Variant> {
        let chars: Vec<char> = target.label.chars().collect();
        let mut out = Vec::new();
        for (i, &c) in chars.iter().enumerate() {
            if c != '-' {
                continue;
            }
            let variant: String = chars[..i].iter().chain(chars[i + 1..].iter()).collect();
            if let Some(v) = emit(self.id(), target, &target.prefix, &variant, &target.suffix) {
                out.push(v);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parse;

    #[test]
    fn strips_each_dash_once() {
        let target = parse("my-brand.com").unwrap();
        let got: Vec<String> = StripDash.exec(&target, &[], &[]).iter().map(|v| v.label.clone()).collect();
        assert_eq!(got, vec!["mybrand".to_string()]);
    }

    #[test]
    fn no_output_without_dash() {
        let target = parse("nodash.com").unwrap();
        assert!(StripDash.exec(&target, &[], &[]).is_empty());
    }
}
