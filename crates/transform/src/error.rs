//! Error taxonomy for transform application
//!
//! Nothing in this crate catches and suppresses these errors: every
//! failure aborts the current transform and propagates to the sync
//! orchestrator, which keeps the previous project model in effect. The
//! contract is to fail the whole sync rather than produce a model with
//! missing or guessed dependency data.

use buildview_artifact::{ArtifactDigest, ArtifactDirectory};
use miette::Diagnostic;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for transform application
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// An artifact is absent from both the cache and the snapshot
    #[error(
        "Artifact {} (digest {digest}) missing from the {cache} and from directory {directory}",
        artifact_path.display()
    )]
    #[diagnostic(
        code(buildview::transform::artifact_not_found),
        help("The cache entry may have been evicted since the last build; rerun the dependency build")
    )]
    ArtifactNotFound {
        /// Logical path of the missing artifact
        artifact_path: PathBuf,
        /// Digest that could not be resolved
        digest: ArtifactDigest,
        /// Directory whose snapshot was consulted as fallback
        directory: ArtifactDirectory,
        /// Identity of the cache that was queried
        cache: String,
    },

    /// Package extraction from artifact contents failed
    #[error("Failed to extract package name from {}: {message}", artifact_path.display())]
    #[diagnostic(
        code(buildview::transform::extraction),
        help("The archive contents are malformed; retrying will not help")
    )]
    Extraction {
        /// Logical path of the artifact whose contents were rejected
        artifact_path: PathBuf,
        /// What the extractor reported
        message: String,
    },

    /// Cache fetch or other artifact-layer failure, propagated unchanged
    #[error(transparent)]
    #[diagnostic(transparent)]
    Artifact(#[from] buildview_artifact::Error),
}

impl Error {
    /// Create a resolution failure for an artifact missing everywhere
    #[must_use]
    pub fn artifact_not_found(
        artifact_path: impl Into<PathBuf>,
        digest: ArtifactDigest,
        directory: ArtifactDirectory,
        cache: impl Into<String>,
    ) -> Self {
        Self::ArtifactNotFound {
            artifact_path: artifact_path.into(),
            digest,
            directory,
            cache: cache.into(),
        }
    }

    /// Create an extraction failure
    #[must_use]
    pub fn extraction(artifact_path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        Self::Extraction {
            artifact_path: artifact_path.as_ref().to_path_buf(),
            message: message.into(),
        }
    }
}

/// Result type for transform application
pub type Result<T> = std::result::Result<T, Error>;
