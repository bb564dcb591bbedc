use rift_dns_application::use_cases::ResolveDomainUseCase;
use rift_dns_domain::{Config, RuleTable};
use rift_dns_infrastructure::dns::{DohClient, IpCache};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub struct DnsServices {
    pub resolve_domain: Arc<ResolveDomainUseCase>,
}

impl DnsServices {
    pub fn new(config: &Config) -> Self {
        let rules = Arc::new(RuleTable::build(config.rules.clone()));
        info!(
            exact_rules = rules.exact_count(),
            wildcard_rules = rules.wildcard_count(),
            "Loaded override rules"
        );

        let cache = Arc::new(IpCache::new());
        let upstream = Arc::new(DohClient::new(
            config.upstream.doh_url.clone(),
            Duration::from_secs(config.upstream.query_timeout),
        ));
        info!(doh_url = %config.upstream.doh_url, "Using DoH upstream");

        let resolve_domain = Arc::new(ResolveDomainUseCase::new(
            rules,
            cache,
            upstream,
            Duration::from_secs(config.cache.ttl_secs),
        ));

        Self { resolve_domain }
    }
}
