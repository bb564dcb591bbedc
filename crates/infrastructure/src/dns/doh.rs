//! DoH upstream client — JSON resolver API
//!
//! Sends `GET <doh_url>?name=<domain>&type=A` and picks the first A entry
//! out of the JSON `Answer` list. Every failure mode (transport error,
//! timeout, non-200 status, undecodable body, no A answer) collapses to
//! `None`; nothing here raises.

use async_trait::async_trait;
use rift_dns_application::ports::UpstreamResolver;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

/// Numeric code for an A record in the JSON answer list.
const TYPE_A: u16 = 1;

/// DoH upstream over the JSON resolver API.
pub struct DohClient {
    url: String,
    client: reqwest::Client,
}

impl DohClient {
    /// A slow or unreachable upstream must never hang a query, so the
    /// timeout bounds the whole request including the body read.
    pub fn new(url: String, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(timeout)
            .pool_max_idle_per_host(4)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self { url, client }
    }
}

#[derive(Debug, Deserialize)]
struct DohResponse {
    #[serde(rename = "Answer", default)]
    answer: Vec<DohAnswer>,
}

#[derive(Debug, Deserialize)]
struct DohAnswer {
    #[serde(rename = "type")]
    record_type: u16,
    data: String,
}

/// First A entry's data, verbatim. CNAMEs and other types in the list are
/// skipped, not followed.
fn first_a_answer(response: DohResponse) -> Option<String> {
    response
        .answer
        .into_iter()
        .find(|a| a.record_type == TYPE_A)
        .map(|a| a.data)
}

#[async_trait]
impl UpstreamResolver for DohClient {
    async fn resolve_a(&self, domain: &str) -> Option<String> {
        debug!(url = %self.url, domain = %domain, "sending DoH query");

        let response = match self
            .client
            .get(&self.url)
            .query(&[("name", domain), ("type", "A")])
            .header("Accept", "application/dns-json")
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => {
                warn!(url = %self.url, domain = %domain, error = %e, "DoH request failed");
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!(url = %self.url, domain = %domain, status = status.as_u16(), "DoH server returned error status");
            return None;
        }

        let body = match response.bytes().await {
            Ok(b) => b,
            Err(e) => {
                warn!(url = %self.url, domain = %domain, error = %e, "failed to read DoH response body");
                return None;
            }
        };

        let decoded: DohResponse = match serde_json::from_slice(&body) {
            Ok(d) => d,
            Err(e) => {
                warn!(url = %self.url, domain = %domain, error = %e, "failed to decode DoH response");
                return None;
            }
        };

        first_a_answer(decoded)
    }
}
