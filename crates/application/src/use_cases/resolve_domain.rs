use crate::ports::{ResolutionCache, UpstreamResolver};
use rift_dns_domain::{Resolution, ResolutionSource, RuleKind, RuleTable};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// The domain resolution pipeline.
///
/// Strict precedence, each step short-circuiting on success:
/// exact rule, suffix-wildcard rule, unexpired cache entry, DoH upstream
/// (with write-through). `None` means unresolved — the wire layer renders
/// that as an empty answer section, never as an error response.
///
/// Owns no mutable state; safe to call concurrently from any number of
/// query tasks. The cache is injected so tests can supply an isolated
/// instance.
pub struct ResolveDomainUseCase {
    rules: Arc<RuleTable>,
    cache: Arc<dyn ResolutionCache>,
    upstream: Arc<dyn UpstreamResolver>,
    cache_ttl: Duration,
}

impl ResolveDomainUseCase {
    pub fn new(
        rules: Arc<RuleTable>,
        cache: Arc<dyn ResolutionCache>,
        upstream: Arc<dyn UpstreamResolver>,
        cache_ttl: Duration,
    ) -> Self {
        Self {
            rules,
            cache,
            upstream,
            cache_ttl,
        }
    }

    pub async fn execute(&self, domain: &str) -> Option<Resolution> {
        let domain = normalize_domain(domain);

        if let Some(m) = self.rules.lookup(&domain) {
            let source = match m.kind {
                RuleKind::Exact => ResolutionSource::DomainRule,
                RuleKind::SuffixWildcard => ResolutionSource::SubdomainRule,
            };
            return Some(Resolution::new(m.ip, source));
        }

        if let Some(entry) = self.cache.get(&domain) {
            if !entry.is_expired() {
                return Some(Resolution::new(entry.ip, ResolutionSource::Cache));
            }
            // Stale entry: fall through to the upstream and let the
            // write-through overwrite it.
            debug!(domain = %domain, "cache entry expired");
        }

        match self.upstream.resolve_a(&domain).await {
            Some(ip) => {
                self.cache.put(&domain, &ip, self.cache_ttl);
                Some(Resolution::new(ip, ResolutionSource::Doh))
            }
            None => {
                warn!(domain = %domain, "failed to resolve domain");
                None
            }
        }
    }
}

/// Strip the trailing root label and lowercase, so query names, cache keys
/// and rule patterns all compare equal.
fn normalize_domain(domain: &str) -> String {
    domain.trim_end_matches('.').to_ascii_lowercase()
}
