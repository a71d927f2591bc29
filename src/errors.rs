// src/errors.rs

//! Crate-wide error aliases and helpers.
//!
//! The render pipeline itself never fails; these errors only come from the
//! outer surfaces (config, input files, the refresh loop and the CLI).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StepgraphError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, StepgraphError>;
