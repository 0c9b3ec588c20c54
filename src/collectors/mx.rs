//! DNS MX record lookup.

use async_trait::async_trait;
use serde_json::json;

use super::{Collector, CollectorContext};
use crate::domain::Variant;

pub struct Mx;

#[async_trait]
impl Collector for Mx {
    fn id(&self) -> &'static str {
        "mx"
    }
    fn order(&self) -> i32 {
        11
    }
    fn headers(&self) -> Vec<&'static str> {
        vec!["MX"]
    }

    #[tracing::instrument(level = "debug", skip(self, variant, ctx), fields(collector = self.id(), domain = %variant.fqdn()))]
    async fn exec(&self, mut variant: Variant, ctx: &CollectorContext) -> Variant {
        if let Ok(lookup) = ctx.resolver.mx_lookup(variant.fqdn()).await {
            let records: Vec<String> = lookup.iter().map(|mx| mx.exchange().to_string()).collect();
            if !records.is_empty() {
                variant.set_meta("MX", records.join(","));
                variant.set_data("mx", json!(records));
            }
        }
        variant
    }
}
