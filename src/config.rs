//! The composition root: builds the three read-only registries plus
//! every shared resource a collector needs, once, at startup. Nothing
//! downstream constructs its own resolver, HTTP client, or registry.

use std::sync::Arc;
use std::time::Duration;

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;

use crate::algorithms::{self, Algorithm};
use crate::cache::{Cache, MemoryCache};
use crate::cli::Cli;
use crate::collectors::{self, Collector, CollectorContext};
use crate::domain::Target;
use crate::error::{Error, Result};
use crate::languages::{self, Keyboard, Language};

pub struct Config {
    languages_registry: languages::Registry,
    algorithms_registry: algorithms::Registry,
    collectors_registry: collectors::Registry,

    language_codes: Vec<String>,
    keyboard_codes: Vec<String>,
    typo_codes: Vec<String>,
    collector_codes: Vec<String>,

    pub concurrency: usize,
    pub delay: Duration,
    pub no_cache: bool,
    pub online_only: bool,

    pub cache: Arc<dyn Cache>,
    resolver: Arc<TokioAsyncResolver>,
    http: reqwest::Client,
    geo_db: Option<Arc<maxminddb::Reader<Vec<u8>>>>,
    whois_enabled: bool,
}

impl Config {
    pub fn build(cli: &Cli) -> Result<Self> {
        let languages_registry = languages::build_registry();
        let algorithms_registry = algorithms::build_registry();
        let collectors_registry = collectors::build_registry();

        check_codes("language", &cli.languages, &languages_registry.language_codes())?;
        check_codes("keyboard", &cli.keyboards, &languages_registry.keyboard_codes())?;
        check_codes("algorithm", &cli.typos, &algorithms_registry.codes())?;
        check_codes("collector", &cli.info, &collectors_registry.codes())?;

        let resolver = TokioAsyncResolver::tokio(ResolverConfig::default(), ResolverOpts::default());

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent("Mozilla/5.0 (compatible; domtypo/0.1)")
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| Error::Config { kind: "http-client", code: e.to_string() })?;

        let geo_db = match &cli.geo_db {
            Some(path) => Some(Arc::new(
                maxminddb::Reader::open_readfile(path)
                    .map_err(|e| Error::Config { kind: "geo-db", code: e.to_string() })?,
            )),
            None => None,
        };

        Ok(Config {
            languages_registry,
            algorithms_registry,
            collectors_registry,
            language_codes: cli.languages.clone(),
            keyboard_codes: cli.keyboards.clone(),
            typo_codes: cli.typos.clone(),
            collector_codes: cli.info.clone(),
            concurrency: cli.concurrency.max(1),
            delay: Duration::from_millis(cli.delay),
            no_cache: cli.no_cache,
            online_only: cli.online,
            cache: Arc::new(MemoryCache::new()),
            resolver: Arc::new(resolver),
            http,
            geo_db,
            whois_enabled: cli.whois,
        })
    }

    pub fn active_languages(&self) -> Vec<Language> {
        self.languages_registry.get(&self.language_codes)
    }

    pub fn active_keyboards(&self) -> Vec<Keyboard> {
        self.languages_registry.keyboards(&self.keyboard_codes)
    }

    pub fn active_algorithms(&self) -> Vec<&dyn Algorithm> {
        self.algorithms_registry.resolve(&self.typo_codes)
    }

    pub fn active_collectors(&self) -> Vec<&dyn Collector> {
        self.collectors_registry.resolve(&self.collector_codes)
    }

    pub fn algorithm(&self, code: &str) -> Option<&dyn Algorithm> {
        self.algorithms_registry.get(code)
    }

    pub fn collector(&self, code: &str) -> Option<&dyn Collector> {
        self.collectors_registry.get(code)
    }

    pub fn collector_context(&self, target: Target) -> CollectorContext {
        CollectorContext {
            target,
            resolver: Arc::clone(&self.resolver),
            http: self.http.clone(),
            geo_db: self.geo_db.clone(),
            whois_enabled: self.whois_enabled,
        }
    }
}

fn check_codes(kind: &'static str, requested: &[String], known: &[String]) -> Result<()> {
    for code in requested {
        if code.eq_ignore_ascii_case("all") {
            continue;
        }
        if !known.iter().any(|k| k.eq_ignore_ascii_case(code)) {
            return Err(Error::Config { kind, code: code.clone() });
        }
    }
    Ok(())
}
