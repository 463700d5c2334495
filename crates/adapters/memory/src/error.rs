//! Memory adapter error types.

use std::path::PathBuf;

use playbooks_domain::error::PlaybookError;

/// Errors specific to the memory adapter.
#[derive(Debug, thiserror::Error)]
pub enum MemoryAdapterError {
    /// A file could not be read.
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A TOML document could not be parsed.
    #[error("invalid TOML document")]
    Parse(#[from] toml::de::Error),

    /// A lock was poisoned by a panicking holder.
    #[error("{0} lock poisoned")]
    Poisoned(&'static str),

    /// A domain-level error (validation, not-found, etc.).
    #[error("domain error")]
    Domain(#[source] PlaybookError),
}

impl MemoryAdapterError {
    /// Convert into a [`PlaybookError::Storage`] for propagation across port
    /// boundaries.
    #[must_use]
    pub fn into_domain(self) -> PlaybookError {
        match self {
            Self::Domain(err) => err,
            other => PlaybookError::Storage(Box::new(other)),
        }
    }
}

impl From<MemoryAdapterError> for PlaybookError {
    fn from(err: MemoryAdapterError) -> Self {
        err.into_domain()
    }
}
