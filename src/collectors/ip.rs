//! DNS A/AAAA lookup. Liveness is true if any address resolves.

use async_trait::async_trait;
use serde_json::json;

use super::{Collector, CollectorContext};
use crate::domain::Variant;

pub struct Ip;

#[async_trait]
impl Collector for Ip {
    fn id(&self) -> &'static str {
        "ip"
    }
    fn order(&self) -> i32 {
        10
    }
    fn headers(&self) -> Vec<&'static str> {
        vec!["IP"]
    }

    #[tracing::instrument(level = "debug", skip(self, variant, ctx), fields(collector = self.id(), domain = %variant.fqdn()))]
    async fn exec(&self, mut variant: Variant, ctx: &CollectorContext) -> Variant {
        if let Ok(lookup) = ctx.resolver.lookup_ip(variant.fqdn()).await {
            let addrs: Vec<String> = lookup.iter().map(|ip| ip.to_string()).collect();
            if !addrs.is_empty() {
                variant.live = true;
                variant.set_meta("IP", addrs.join(","));
                variant.set_data("ip", json!(addrs));
            }
        }
        variant
    }
}
