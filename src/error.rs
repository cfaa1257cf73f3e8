//! Error types for the DeFi agent backend

use std::path::PathBuf;
use thiserror::Error;

/// Startup failures. Everything here is fatal and happens before the
/// listener is bound.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Failed to read env file {}: {source}", .path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}
