//! DNS CNAME record lookup.

use async_trait::async_trait;
use hickory_resolver::proto::rr::{RData, RecordType};
use serde_json::json;

use super::{Collector, CollectorContext};
use crate::domain::Variant;

pub struct Cname;

#[async_trait]
impl Collector for Cname {
    fn id(&self) -> &'static str {
        "cname"
    }
    fn order(&self) -> i32 {
        14
    }
    fn headers(&self) -> Vec<&'static str> {
        vec!["CNAME"]
    }

    #[tracing::instrument(level = "debug", skip(self, variant, ctx), fields(collector = self.id(), domain = %variant.fqdn()))]
    async fn exec(&self, mut variant: Variant, ctx: &CollectorContext) -> Variant {
        if let Ok(lookup) = ctx.resolver.lookup(variant.fqdn(), RecordType::CNAME).await {
            let records: Vec<String> = lookup
                .iter()
                .filter_map(|rdata| match rdata {
                    RData::CNAME(name) => Some(name.0.to_string()),
                    _ => None,
                })
                .collect();
            if !records.is_empty() {
                variant.set_meta("CNAME", records.join(","));
                variant.set_data("cname", json!(records));
            }
        }
        variant
    }
}
