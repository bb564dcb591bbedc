use std::time::{Duration, Instant};

/// A cached upstream answer. Entries are created only by successful DoH
/// resolutions and overwritten wholesale on refresh.
#[derive(Debug, Clone)]
pub struct CachedIp {
    pub ip: String,
    pub expires_at: Instant,
}

impl CachedIp {
    pub fn new(ip: impl Into<String>, ttl: Duration) -> Self {
        Self {
            ip: ip.into(),
            expires_at: Instant::now() + ttl,
        }
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// Port for the shared resolution cache.
///
/// `get` returns stale entries as-is; expiry is the caller's decision
/// (lazy eviction). Concurrent get/put on the same domain is a benign
/// last-write-wins race, not a linearizability requirement.
pub trait ResolutionCache: Send + Sync {
    fn get(&self, domain: &str) -> Option<CachedIp>;

    fn put(&self, domain: &str, ip: &str, ttl: Duration);
}
