mod mocks;

pub use mocks::{InMemoryCache, MockUpstreamResolver};
