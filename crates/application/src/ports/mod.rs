mod resolution_cache;
mod upstream_resolver;

pub use resolution_cache::{CachedIp, ResolutionCache};
pub use upstream_resolver::UpstreamResolver;
