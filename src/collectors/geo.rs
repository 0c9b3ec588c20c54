//! MaxMind-style country lookup keyed on each resolved IPv4, via the
//! `maxminddb` crate.

use std::net::IpAddr;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use super::{Collector, CollectorContext};
use crate::domain::Variant;

pub struct Geo;

#[derive(Deserialize)]
struct Country {
    country: Option<CountryNames>,
}

#[derive(Deserialize)]
struct CountryNames {
    names: Option<std::collections::BTreeMap<String, String>>,
}

#[async_trait]
impl Collector for Geo {
    fn id(&self) -> &'static str {
        "geo"
    }
    fn order(&self) -> i32 {
        20
    }
    fn headers(&self) -> Vec<&'static str> {
        vec!["Country"]
    }

    #[tracing::instrument(level = "debug", skip(self, variant, ctx), fields(collector = self.id(), domain = %variant.fqdn()))]
    async fn exec(&self, mut variant: Variant, ctx: &CollectorContext) -> Variant {
        let Some(db) = &ctx.geo_db else {
            return variant;
        };
        let Some(ips) = variant.data.get("ip").cloned() else {
            return variant;
        };
        let Some(ips) = ips.as_array() else {
            return variant;
        };

        for ip in ips {
            let Some(ip) = ip.as_str().and_then(|s| s.parse::<IpAddr>().ok()) else {
                continue;
            };
            if let Ok(record) = db.lookup::<Country>(ip) {
                if let Some(name) = record
                    .country
                    .and_then(|c| c.names)
                    .and_then(|names| names.get("en").cloned())
                {
                    variant.set_meta("Country", name.clone());
                    variant.set_data("country", json!(name));
                    break;
                }
            }
        }
        variant
    }
}
