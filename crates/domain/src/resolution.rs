use std::fmt;

/// Which stage of the resolution pipeline produced an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionSource {
    DomainRule,
    SubdomainRule,
    Cache,
    Doh,
}

impl ResolutionSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionSource::DomainRule => "domain rule",
            ResolutionSource::SubdomainRule => "subdomain rule",
            ResolutionSource::Cache => "cache",
            ResolutionSource::Doh => "DoH",
        }
    }
}

impl fmt::Display for ResolutionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved A answer plus its provenance. Transient, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub ip: String,
    pub source: ResolutionSource,
}

impl Resolution {
    pub fn new(ip: impl Into<String>, source: ResolutionSource) -> Self {
        Self {
            ip: ip.into(),
            source,
        }
    }
}
