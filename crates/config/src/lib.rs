//! Static chain-parameter tables for the wallet session orchestrator.
//!
//! Descriptors are immutable configuration: they are loaded once (builtin
//! defaults, TOML or JSON files, environment overrides for RPC endpoints)
//! and swapped wholesale when the user changes network selection.

mod loader;
mod registry;
mod validation;

pub use loader::*;
pub use registry::*;
pub use validation::*;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to load chain registry: {0}")]
    LoadError(String),

    #[error("Chain registry validation failed: {0}")]
    ValidationError(String),

    #[error("Unknown chain id: {0}")]
    UnknownChain(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
