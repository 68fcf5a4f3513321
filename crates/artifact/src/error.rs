//! Error types for artifact storage and resolution

use miette::Diagnostic;
use std::path::Path;
use thiserror::Error;

/// Error type for artifact cache and snapshot operations
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// I/O error during artifact operations
    #[error("I/O {operation} failed{}", path.as_ref().map_or(String::new(), |p| format!(": {}", p.display())))]
    #[diagnostic(
        code(buildview::artifact::io),
        help("Check file permissions and ensure the path exists")
    )]
    Io {
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
        /// Path that caused the error, if available
        path: Option<Box<Path>>,
        /// Operation that failed (e.g., "read", "write", "create")
        operation: String,
    },

    /// A digest string failed validation
    #[error("Invalid artifact digest: {message}")]
    #[diagnostic(code(buildview::artifact::invalid_digest))]
    InvalidDigest {
        /// Why the digest string was rejected
        message: String,
    },

    /// Cached bytes did not hash to the digest they were stored under
    #[error("Artifact integrity check failed: expected {expected}, computed {computed}")]
    #[diagnostic(
        code(buildview::artifact::digest_mismatch),
        help("The cache entry is corrupt; evict it and rebuild the artifact")
    )]
    DigestMismatch {
        /// Digest the entry was stored under
        expected: String,
        /// Digest computed from the bytes on disk
        computed: String,
    },

    /// A cache entry vanished between lookup and fetch
    #[error("Artifact {digest} is not present in {cache}")]
    #[diagnostic(
        code(buildview::artifact::not_cached),
        help("The cache entry may have been evicted between lookup and fetch")
    )]
    NotCached {
        /// Digest of the missing artifact
        digest: String,
        /// Identity of the cache that was queried
        cache: String,
    },
}

impl Error {
    /// Create an I/O error with path context
    #[must_use]
    pub fn io(
        source: std::io::Error,
        path: impl AsRef<Path>,
        operation: impl Into<String>,
    ) -> Self {
        Self::Io {
            source,
            path: Some(path.as_ref().into()),
            operation: operation.into(),
        }
    }

    /// Create an invalid digest error
    #[must_use]
    pub fn invalid_digest(msg: impl Into<String>) -> Self {
        Self::InvalidDigest {
            message: msg.into(),
        }
    }

    /// Create a not cached error
    #[must_use]
    pub fn not_cached(digest: impl Into<String>, cache: impl Into<String>) -> Self {
        Self::NotCached {
            digest: digest.into(),
            cache: cache.into(),
        }
    }
}

/// Result type for artifact operations
pub type Result<T> = std::result::Result<T, Error>;
