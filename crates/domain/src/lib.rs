//! Rift DNS Domain Layer
pub mod config;
pub mod resolution;
pub mod rule_table;

pub use config::{CliOverrides, Config, ConfigError};
pub use resolution::{Resolution, ResolutionSource};
pub use rule_table::{RuleKind, RuleMatch, RuleTable};
