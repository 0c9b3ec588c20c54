//! Follows HTTP redirects from `http://variant` and records the final
//! domain if it differs from the target.

use async_trait::async_trait;

use super::{Collector, CollectorContext};
use crate::domain::Variant;

pub struct Redirect;

#[async_trait]
impl Collector for Redirect {
    fn id(&self) -> &'static str {
        "301"
    }
    fn order(&self) -> i32 {
        31
    }
    fn headers(&self) -> Vec<&'static str> {
        vec!["Redirect"]
    }

    #[tracing::instrument(level = "debug", skip(self, variant, ctx), fields(collector = self.id(), domain = %variant.fqdn()))]
    async fn exec(&self, mut variant: Variant, ctx: &CollectorContext) -> Variant {
        let url = format!("http://{}", variant.fqdn());
        if let Ok(resp) = ctx.http.get(&url).send().await {
            if let Some(host) = resp.url().host_str() {
                if host != variant.fqdn() && host != ctx.target.canonical() {
                    variant.set_meta("Redirect", host.to_string());
                }
            }
        }
        variant
    }
}
