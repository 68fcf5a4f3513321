//! Dependency-artifact resolution
//!
//! Turns a [`BuildArtifact`] reference into a locally readable
//! [`CachedArtifact`]: the content-addressable cache is consulted first,
//! then the directory snapshot from a previous sync, and a double miss
//! fails the resolution. No retries at this layer; failures propagate to
//! the operation, the transform, and ultimately the sync orchestrator.

use crate::{Error, Result};
use buildview_artifact::{
    ArtifactDirectory, ArtifactDirectorySnapshot, BuildArtifact, BuildArtifactCache,
    CachedArtifact,
};
use std::sync::Arc;

/// Resolves build artifact references to locally readable files
///
/// A narrow interface so update operations can be tested with fakes.
pub trait ResolveArtifact: Send + Sync {
    /// Resolve one artifact destined for the given directory
    ///
    /// # Errors
    ///
    /// Returns an error if the artifact is in neither the cache nor the
    /// snapshot, or if the cache fetch fails.
    fn resolve(
        &self,
        artifact: &BuildArtifact,
        directory: &ArtifactDirectory,
    ) -> Result<CachedArtifact>;
}

/// Cache-first resolver with snapshot fallback
///
/// Bound to one session's cache handle and directory snapshot; the
/// snapshot is read-only for the lifetime of a transform application.
pub struct ArtifactResolver {
    cache: Arc<dyn BuildArtifactCache>,
    snapshot: Arc<ArtifactDirectorySnapshot>,
}

impl ArtifactResolver {
    /// Create a resolver over the session's cache and snapshot
    #[must_use]
    pub fn new(
        cache: Arc<dyn BuildArtifactCache>,
        snapshot: Arc<ArtifactDirectorySnapshot>,
    ) -> Self {
        Self { cache, snapshot }
    }
}

impl ResolveArtifact for ArtifactResolver {
    fn resolve(
        &self,
        artifact: &BuildArtifact,
        directory: &ArtifactDirectory,
    ) -> Result<CachedArtifact> {
        // Fast path: the artifact was retrieved by a recent build.
        if let Some(entry) = self.cache.get(&artifact.digest) {
            tracing::debug!(
                digest = %artifact.digest,
                path = %artifact.artifact_path.display(),
                "artifact cache hit"
            );
            return Ok(self.cache.blocking_fetch(&entry)?);
        }

        // Artifacts materialized by a previous sync are reused as-is.
        if let Some(path) = self.snapshot.lookup(directory, &artifact.digest) {
            tracing::debug!(
                digest = %artifact.digest,
                directory = %directory,
                path = %path.display(),
                "artifact cache miss, reusing snapshot path"
            );
            return Ok(CachedArtifact::new(path));
        }

        Err(Error::artifact_not_found(
            &artifact.artifact_path,
            artifact.digest.clone(),
            directory.clone(),
            self.cache.identity(),
        ))
    }
}
