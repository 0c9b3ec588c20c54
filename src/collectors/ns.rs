//! DNS NS record lookup.

use async_trait::async_trait;
use serde_json::json;

use super::{Collector, CollectorContext};
use crate::domain::Variant;

pub struct Ns;

#[async_trait]
impl Collector for Ns {
    fn id(&self) -> &'static str {
        "ns"
    }
    fn order(&self) -> i32 {
        12
    }
    fn headers(&self) -> Vec<&'static str> {
        vec!["NS"]
    }

    #[tracing::instrument(level = "debug", skip(self, variant, ctx), fields(collector = self.id(), domain = %variant.fqdn()))]
    async fn exec(&self, mut variant: Variant, ctx: &CollectorContext) -> Variant {
        if let Ok(lookup) = ctx.resolver.ns_lookup(variant.fqdn()).await {
            let records: Vec<String> = lookup.iter().map(|ns| ns.0.to_string()).collect();
            if !records.is_empty() {
                variant.set_meta("NS", records.join(","));
                variant.set_data("ns", json!(records));
            }
        }
        variant
    }
}
