//! IDNA/punycode conversion — Unicode label to its ASCII-compatible
//! encoding, stored on `Variant::punycode`.

use async_trait::async_trait;

use super::{Collector, CollectorContext};
use crate::domain::Variant;

pub struct Idna;

#[async_trait]
impl Collector for Idna {
    fn id(&self) -> &'static str {
        "idna"
    }
    fn order(&self) -> i32 {
        1
    }
    fn headers(&self) -> Vec<&'static str> {
        vec!["Punycode"]
    }

    #[tracing::instrument(level = "debug", skip(self, variant, _ctx), fields(collector = self.id(), domain = %variant.fqdn()))]
    async fn exec(&self, mut variant: Variant, _ctx: &CollectorContext) -> Variant {
        if let Ok(ascii) = ::idna::domain_to_ascii(&variant.fqdn()) {
            if ascii != variant.fqdn() {
                variant.punycode = Some(ascii);
            }
        }
        variant
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Target;
    use std::sync::Arc;
    use std::time::Duration;

    fn ctx() -> CollectorContext {
        CollectorContext {
            target: crate::domain::parse("google.com").unwrap(),
            resolver: Arc::new(
                hickory_resolver::TokioAsyncResolver::tokio(Default::default(), Default::default()),
            ),
            http: reqwest::Client::new(),
            geo_db: None,
            delay: Duration::from_millis(0),
            whois_enabled: false,
        }
    }

    #[tokio::test]
    async fn leaves_ascii_labels_unpunycoded() {
        let v = Variant::new("co", "", "google", "com");
        let out = Idna.exec(v, &ctx()).await;
        assert!(out.punycode.is_none());
    }

    #[tokio::test]
    async fn encodes_unicode_labels() {
        let v = Variant::new("co", "", "xn--test", "com");
        let unicode = Variant::new("hg", "", "münchen", "com");
        let out = Idna.exec(unicode, &ctx()).await;
        assert!(out.punycode.is_some());
        let _ = v;
    }
}
