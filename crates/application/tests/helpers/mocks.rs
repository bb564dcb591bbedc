#![allow(dead_code)]

use async_trait::async_trait;
use rift_dns_application::ports::{CachedIp, ResolutionCache, UpstreamResolver};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;
use std::time::Duration;

/// Upstream stub with canned per-domain answers and a call counter, so tests
/// can assert exactly how many times the pipeline reached for DoH.
pub struct MockUpstreamResolver {
    responses: RwLock<HashMap<String, String>>,
    calls: AtomicUsize,
}

impl MockUpstreamResolver {
    pub fn new() -> Self {
        Self {
            responses: RwLock::new(HashMap::new()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn set_response(&self, domain: &str, ip: &str) {
        self.responses
            .write()
            .unwrap()
            .insert(domain.to_string(), ip.to_string());
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockUpstreamResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UpstreamResolver for MockUpstreamResolver {
    async fn resolve_a(&self, domain: &str) -> Option<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.responses.read().unwrap().get(domain).cloned()
    }
}

/// Plain RwLock-backed cache for test isolation. Same contract as the
/// production dashmap cache: get returns stale entries, put overwrites.
pub struct InMemoryCache {
    entries: RwLock<HashMap<String, CachedIp>>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Seed an entry directly, bypassing the pipeline (e.g. already expired
    /// via a zero TTL).
    pub fn seed(&self, domain: &str, ip: &str, ttl: Duration) {
        self.put(domain, ip, ttl);
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    /// The unexpired ip for `domain`, if any.
    pub fn get_fresh(&self, domain: &str) -> Option<String> {
        self.entries
            .read()
            .unwrap()
            .get(domain)
            .filter(|e| !e.is_expired())
            .map(|e| e.ip.clone())
    }
}

impl Default for InMemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ResolutionCache for InMemoryCache {
    fn get(&self, domain: &str) -> Option<CachedIp> {
        self.entries.read().unwrap().get(domain).cloned()
    }

    fn put(&self, domain: &str, ip: &str, ttl: Duration) {
        self.entries
            .write()
            .unwrap()
            .insert(domain.to_string(), CachedIp::new(ip, ttl));
    }
}
