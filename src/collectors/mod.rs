//! Collector Registry.
//!
//! Each collector enriches one `Variant` with observable evidence (DNS
//! records, liveness, similarity, geo, registration status). All network
//! I/O is best-effort: on any upstream failure a collector records
//! nothing and returns the variant unchanged.

mod cname;
mod geo;
mod idna;
mod ip;
mod ld;
mod mx;
mod ns;
mod redirect;
mod sim;
mod txt;
mod whois;

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use hickory_resolver::TokioAsyncResolver;

use crate::domain::{Target, Variant};

/// Shared resources collectors need, built once in `Config::build` and
/// handed to every `exec` call: one client/resolver, not one per
/// collector invocation.
pub struct CollectorContext {
    pub target: Target,
    pub resolver: Arc<TokioAsyncResolver>,
    pub http: reqwest::Client,
    pub geo_db: Option<Arc<maxminddb::Reader<Vec<u8>>>>,
    pub whois_enabled: bool,
}

/// `Init`/`Exec`/`Close` collapsed into Rust idiom: `Init` becomes the
/// shared `CollectorContext` built once by `Config`, `Close` is dropped
/// in favour of RAII (no collector here owns a resource that outlives
/// one process), `Exec` is `exec`.
#[async_trait]
pub trait Collector: Send + Sync {
    fn id(&self) -> &'static str;
    /// Ascending execution order; ties break by registration order
    /// (BTreeMap iteration order, i.e. collector code).
    fn order(&self) -> i32;
    fn headers(&self) -> Vec<&'static str>;
    async fn exec(&self, variant: Variant, ctx: &CollectorContext) -> Variant;
}

pub struct Registry {
    collectors: BTreeMap<String, Box<dyn Collector>>,
}

impl Registry {
    pub fn resolve(&self, codes: &[String]) -> Vec<&dyn Collector> {
        let mut chosen: Vec<&dyn Collector> = if codes.iter().any(|c| c.eq_ignore_ascii_case("all")) {
            self.collectors.values().map(|b| b.as_ref()).collect()
        } else {
            codes
                .iter()
                .filter_map(|c| self.collectors.get(&c.to_lowercase()).map(|b| b.as_ref()))
                .collect()
        };
        chosen.sort_by_key(|c| c.order());
        chosen
    }

    pub fn codes(&self) -> Vec<String> {
        self.collectors.keys().cloned().collect()
    }

    pub fn get(&self, code: &str) -> Option<&dyn Collector> {
        self.collectors.get(&code.to_lowercase()).map(|b| b.as_ref())
    }
}

pub fn build_registry() -> Registry {
    let list: Vec<Box<dyn Collector>> = vec![
        Box::new(ld::LevenshteinDistance),
        Box::new(idna::Idna),
        Box::new(ip::Ip),
        Box::new(mx::Mx),
        Box::new(ns::Ns),
        Box::new(txt::Txt),
        Box::new(cname::Cname),
        Box::new(geo::Geo),
        Box::new(sim::Similarity),
        Box::new(redirect::Redirect),
        Box::new(whois::Whois),
    ];

    let mut collectors = BTreeMap::new();
    for c in list {
        collectors.insert(c.id().to_string(), c);
    }
    Registry { collectors }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_all_sorts_by_declared_order() {
        let reg = build_registry();
        let chosen = reg.resolve(&["all".to_string()]);
        assert_eq!(chosen.len(), reg.codes().len());
        for pair in chosen.windows(2) {
            assert!(pair[0].order() <= pair[1].order());
        }
    }

    #[test]
    fn resolve_filters_to_requested_codes() {
        let reg = build_registry();
        let chosen = reg.resolve(&["ld".to_string(), "ip".to_string()]);
        let ids: Vec<&str> = chosen.iter().map(|c| c.id()).collect();
        assert_eq!(ids, vec!["ld", "ip"]);
    }
}
