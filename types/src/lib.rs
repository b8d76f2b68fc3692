pub mod config;
pub mod formatting;

pub use config::{ChallengePath, ConfigError, ParsingConfig};
