//! Error type shared by the CLI surface.
//!
//! Only startup failures (manifest or catalog source missing or
//! malformed) surface as `Err` from the driver; per-language failures are
//! converted to report lines at the language boundary and never cross
//! into the top-level loop.

use std::path::PathBuf;

use langsync_core::LocateError;
use thiserror::Error;

/// Convenience result alias for this crate.
pub type Result<T> = std::result::Result<T, SyncError>;

/// Errors surfaced by the langsync CLI.
#[derive(Debug, Error)]
pub enum SyncError {
    /// A required path does not exist.
    #[error("path not found: {path}")]
    MissingPath {
        /// The missing path.
        path: PathBuf,
    },

    /// The manifest parsed but its contents are unusable.
    #[error("invalid manifest: {message}")]
    InvalidManifest {
        /// Human-readable reason.
        message: String,
    },

    /// A literal could not be located in a target file.
    #[error("{lang}: {source}")]
    Locate {
        /// Language whose target failed.
        lang: String,
        /// Underlying locator failure.
        #[source]
        source: LocateError,
    },

    /// Generic invalid input.
    #[error("{message}")]
    InvalidArgument {
        /// Human-readable reason.
        message: String,
    },

    /// Filesystem failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON parse failure in the manifest or catalog source.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl SyncError {
    /// Build an [`SyncError::InvalidArgument`].
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Process exit code for this error.
    ///
    /// Anything that escapes the driver is a startup failure; exit 2
    /// distinguishes it from per-language trouble, which is reported but
    /// leaves the exit code at 0.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        2
    }
}
