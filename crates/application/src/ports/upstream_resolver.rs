use async_trait::async_trait;

/// Port for upstream A-record resolution.
///
/// Best-effort by design: transport errors, timeouts, bad status codes,
/// undecodable bodies and answerless responses all collapse to `None`.
/// Nothing here is fatal at request scope, so the pipeline's control flow
/// stays linear.
#[async_trait]
pub trait UpstreamResolver: Send + Sync {
    /// Resolve the first A answer for `domain`, or `None` on any failure.
    /// A single attempt per call; retry policy, if any, belongs to the caller.
    async fn resolve_a(&self, domain: &str) -> Option<String>;
}
