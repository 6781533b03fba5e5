//! Catalog loading errors.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::foundation::ValidationError;

/// Errors raised while loading or validating a catalog.
///
/// These are configuration errors: they stop the catalog from being built, so
/// the engine never sees an inconsistent catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid catalog: {0}")]
    Invalid(#[from] ValidationError),

    #[error("Bundled catalog is unusable: {0}")]
    Bundled(String),
}
