//! Cache interface for enrichment results.
//!
//! Keyed on a compound `(variant fqdn, collector id)` tuple. `MemoryCache`
//! is the only implementation shipped; no on-disk cache is implemented,
//! but the trait is real and exercised by the pipeline and its tests.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::Variant;
use crate::error::{Error, Result};

pub type CacheKey = (String, String);

pub trait Cache: Send + Sync {
    fn read(&self, key: &CacheKey) -> Result<Option<Variant>>;
    fn write(&self, key: CacheKey, value: Variant) -> Result<()>;
}

#[derive(Default)]
pub struct MemoryCache {
    store: Mutex<HashMap<CacheKey, Variant>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        MemoryCache::default()
    }
}

impl Cache for MemoryCache {
    fn read(&self, key: &CacheKey) -> Result<Option<Variant>> {
        let store = self.store.lock().map_err(|e| Error::Cache(e.to_string()))?;
        Ok(store.get(key).cloned())
    }

    fn write(&self, key: CacheKey, value: Variant) -> Result<()> {
        let mut store = self.store.lock().map_err(|e| Error::Cache(e.to_string()))?;
        store.insert(key, value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_a_value() {
        let cache = MemoryCache::new();
        let key = ("gogle.com".to_string(), "ip".to_string());
        assert!(cache.read(&key).unwrap().is_none());

        let variant = Variant::new("co", "", "gogle", "com");
        cache.write(key.clone(), variant.clone()).unwrap();

        let got = cache.read(&key).unwrap().unwrap();
        assert_eq!(got.fqdn(), variant.fqdn());
    }

    #[test]
    fn distinguishes_by_collector_id() {
        let cache = MemoryCache::new();
        let v = Variant::new("co", "", "gogle", "com");
        cache.write(("gogle.com".to_string(), "ip".to_string()), v.clone()).unwrap();
        assert!(cache.read(&("gogle.com".to_string(), "mx".to_string())).unwrap().is_none());
    }
}
