use dashmap::DashMap;
use rift_dns_application::ports::{CachedIp, ResolutionCache};
use rustc_hash::FxBuildHasher;
use std::time::Duration;
use tracing::debug;

/// Concurrent TTL cache for upstream answers.
///
/// Sharded dashmap, so readers and writers never contend globally. Expired
/// entries are not swept; they linger until the next write-through for the
/// same domain overwrites them (lazy eviction, unbounded growth accepted).
pub struct IpCache {
    entries: DashMap<String, CachedIp, FxBuildHasher>,
}

impl IpCache {
    pub fn new() -> Self {
        Self {
            entries: DashMap::with_hasher(FxBuildHasher),
        }
    }
}

impl Default for IpCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ResolutionCache for IpCache {
    fn get(&self, domain: &str) -> Option<CachedIp> {
        self.entries.get(domain).map(|e| e.value().clone())
    }

    fn put(&self, domain: &str, ip: &str, ttl: Duration) {
        debug!(domain = %domain, ip = %ip, ttl_secs = ttl.as_secs(), "caching upstream answer");
        self.entries
            .insert(domain.to_string(), CachedIp::new(ip, ttl));
    }
}
