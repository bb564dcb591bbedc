use serde::{Deserialize, Serialize};

/// DoH upstream configuration.
///
/// The endpoint must speak the JSON resolver API
/// (`GET <doh_url>?name=<domain>&type=A`).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    #[serde(default = "default_doh_url")]
    pub doh_url: String,

    /// Per-request timeout in seconds. A slow upstream is treated as a
    /// failed resolution, never as a hung query.
    #[serde(default = "default_query_timeout")]
    pub query_timeout: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            doh_url: default_doh_url(),
            query_timeout: default_query_timeout(),
        }
    }
}

fn default_doh_url() -> String {
    "https://dns.google/resolve".to_string()
}

fn default_query_timeout() -> u64 {
    30
}
