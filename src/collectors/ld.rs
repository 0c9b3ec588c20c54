//! Levenshtein distance between target and variant, for ranking variants
//! by edit distance in the output.

use async_trait::async_trait;

use super::{Collector, CollectorContext};
use crate::domain::Variant;

pub struct LevenshteinDistance;

#[async_trait]
impl Collector for LevenshteinDistance {
    fn id(&self) -> &'static str {
        "ld"
    }
    fn order(&self) -> i32 {
        0
    }
    fn headers(&self) -> Vec<&'static str> {
        vec!["LD"]
    }

    #[tracing::instrument(level = "debug", skip(self, variant, ctx), fields(collector = self.id(), domain = %variant.fqdn()))]
    async fn exec(&self, mut variant: Variant, ctx: &CollectorContext) -> Variant {
        let distance = levenshtein(&ctx.target.canonical(), &variant.fqdn());
        variant.distance = distance;
        variant.set_meta("LD", distance.to_string());
        variant
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (len1, len2) = (a.len(), b.len());

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    let mut matrix = vec![vec![0usize; len2 + 1]; len1 + 1];
    for (i, row) in matrix.iter_mut().enumerate().take(len1 + 1) {
        row[0] = i;
    }
    for j in 0..=len2 {
        matrix[0][j] = j;
    }

    for i in 0..len1 {
        for j in 0..len2 {
            let cost = if a[i] == b[j] { 0 } else { 1 };
            matrix[i + 1][j + 1] =
                (matrix[i][j + 1] + 1).min(matrix[i + 1][j] + 1).min(matrix[i][j] + cost);
        }
    }

    matrix[len1][len2]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symmetric_and_zero_for_equal_strings() {
        assert_eq!(levenshtein("google.com", "google.com"), 0);
        assert_eq!(levenshtein("google.com", "gogle.com"), levenshtein("gogle.com", "google.com"));
        assert_eq!(levenshtein("google.com", "gogle.com"), 1);
    }
}
