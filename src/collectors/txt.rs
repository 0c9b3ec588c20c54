//! DNS TXT record lookup.

use async_trait::async_trait;
use serde_json::json;

use super::{Collector, CollectorContext};
use crate::domain::Variant;

pub struct Txt;

#[async_trait]
impl Collector for Txt {
    fn id(&self) -> &'static str {
        "txt"
    }
    fn order(&self) -> i32 {
        13
    }
    fn headers(&self) -> Vec<&'static str> {
        vec!["TXT"]
    }

    #[tracing::instrument(level = "debug", skip(self, variant, ctx), fields(collector = self.id(), domain = %variant.fqdn()))]
    async fn exec(&self, mut variant: Variant, ctx: &CollectorContext) -> Variant {
        if let Ok(lookup) = ctx.resolver.txt_lookup(variant.fqdn()).await {
            let records: Vec<String> = lookup.iter().map(|txt| txt.to_string()).collect();
            if !records.is_empty() {
                variant.set_meta("TXT", records.join(" | "));
                variant.set_data("txt", json!(records));
            }
        }
        variant
    }
}
