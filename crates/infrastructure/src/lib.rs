//! Rift DNS Infrastructure Layer
//!
//! Concrete adapters: the dashmap-backed resolution cache, the DoH JSON
//! upstream client and the hickory-server request handler.
pub mod dns;
