//! Content similarity — fetches `http://target` and `http://variant` and
//! scores how alike the bodies are.
//!
//! No maintained fuzzy-hashing (`ssdeep`) crate exists in this ecosystem,
//! so this is a hand-rolled n-gram Jaccard index instead of reaching for
//! an external service.

use std::collections::HashSet;

use async_trait::async_trait;

use super::{Collector, CollectorContext};
use crate::domain::Variant;

const NGRAM: usize = 4;

pub struct Similarity;

#[async_trait]
impl Collector for Similarity {
    fn id(&self) -> &'static str {
        "sim"
    }
    fn order(&self) -> i32 {
        30
    }
    fn headers(&self) -> Vec<&'static str> {
        vec!["SIM"]
    }

    #[tracing::instrument(level = "debug", skip(self, variant, ctx), fields(collector = self.id(), domain = %variant.fqdn()))]
    async fn exec(&self, mut variant: Variant, ctx: &CollectorContext) -> Variant {
        let target_url = format!("http://{}", ctx.target.canonical());
        let variant_url = format!("http://{}", variant.fqdn());

        let (target_body, variant_body) = tokio::join!(fetch(&ctx.http, &target_url), fetch(&ctx.http, &variant_url));

        if let (Some(a), Some(b)) = (target_body, variant_body) {
            let score = jaccard(&a, &b);
            variant.set_meta("SIM", format!("{}", (score * 100.0).round() as u32));
        }
        variant
    }
}

async fn fetch(client: &reqwest::Client, url: &str) -> Option<String> {
    client.get(url).send().await.ok()?.text().await.ok()
}

fn ngrams(s: &str, n: usize) -> HashSet<String> {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() < n {
        return [s.to_string()].into_iter().collect();
    }
    (0..=chars.len() - n).map(|i| chars[i..i + n].iter().collect()).collect()
}

fn jaccard(a: &str, b: &str) -> f64 {
    let a = ngrams(a, NGRAM);
    let b = ngrams(b, NGRAM);
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    let intersection = a.intersection(&b).count() as f64;
    let union = a.union(&b).count() as f64;
    if union == 0.0 {
        0.0
    } else {
        intersection / union
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_bodies_score_one() {
        assert_eq!(jaccard("the quick brown fox", "the quick brown fox"), 1.0);
    }

    #[test]
    fn disjoint_bodies_score_zero() {
        assert_eq!(jaccard("aaaa", "zzzz"), 0.0);
    }
}
