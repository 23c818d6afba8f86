//! CLI error types.

use std::path::PathBuf;

use portal_config::ConfigError;
use portal_nav::{NavError, NavErrors};

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{0}")]
    Nav(#[from] NavError),

    #[error("{0}")]
    Navigation(#[from] NavErrors),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown sidebar '{0}'")]
    UnknownSidebar(String),

    #[error("Check failed with {0} error(s)")]
    Check(usize),
}
