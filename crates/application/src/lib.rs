//! Rift DNS Application Layer
//!
//! Ports (traits) for the infrastructure adapters plus the resolution
//! pipeline use case that orchestrates them.
pub mod ports;
pub mod use_cases;
