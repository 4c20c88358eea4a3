//! @acp:module "Errors"
//! @acp:summary "Library error type and result alias"
//! @acp:domain cli
//! @acp:layer types

use std::path::PathBuf;

use thiserror::Error;

/// @acp:summary "Errors raised by catalog loading, input coercion and export"
#[derive(Debug, Error)]
pub enum RenoError {
    /// Negative value under the `reject` negative-input policy
    #[error("negative value for {field}: {value}")]
    NegativeInput { field: String, value: f64 },

    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("unknown cost item: {0}")]
    UnknownItem(String),

    #[error("unsupported catalog format: {}", .0.display())]
    UnsupportedCatalogFormat(PathBuf),

    #[error("unknown export format: {0}")]
    UnknownExportFormat(String),

    /// The exporter could not produce a document; nothing was written
    #[error("export failed: {0}")]
    ExportFailure(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

impl RenoError {
    /// Wrap any displayable error as an export failure
    pub fn export<E: std::fmt::Display>(err: E) -> Self {
        RenoError::ExportFailure(err.to_string())
    }
}

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, RenoError>;
