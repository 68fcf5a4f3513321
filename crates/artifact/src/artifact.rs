//! Build artifact identities and locally resolved artifact handles

use crate::digest::ArtifactDigest;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// One build output, identified by content digest and logical path
///
/// The `artifact_path` is the path the artifact takes within its owning
/// [`ArtifactDirectory`], not a filesystem location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildArtifact {
    /// Content hash identifying the artifact's exact bytes
    pub digest: ArtifactDigest,
    /// Logical path within the owning artifact directory
    pub artifact_path: PathBuf,
}

impl BuildArtifact {
    /// Create a new build artifact reference
    #[must_use]
    pub fn new(digest: ArtifactDigest, artifact_path: impl Into<PathBuf>) -> Self {
        Self {
            digest,
            artifact_path: artifact_path.into(),
        }
    }
}

/// A named logical destination for a class of artifacts
///
/// The identity is a symbolic path (e.g. `"default"`), not a filesystem
/// path; where a directory is materialized on disk is decided elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ArtifactDirectory(String);

impl ArtifactDirectory {
    /// Create an artifact directory with the given symbolic path
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The symbolic path of this directory
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ArtifactDirectory {
    /// The `"default"` directory, destination for most dependency artifacts
    fn default() -> Self {
        Self("default".to_string())
    }
}

impl std::fmt::Display for ArtifactDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A resolved, locally readable handle to an artifact's bytes
///
/// Backed either by a cache entry or by a filesystem path from a previous
/// sync's directory snapshot. Created per resolution call and never
/// retained by the resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedArtifact {
    path: PathBuf,
}

impl CachedArtifact {
    /// Wrap a locally readable file as a cached artifact
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Filesystem location of the artifact's bytes
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open the artifact contents for reading
    ///
    /// # Errors
    ///
    /// Returns an error if the backing file cannot be opened
    pub fn open(&self) -> Result<fs::File> {
        fs::File::open(&self.path).map_err(|e| Error::io(e, &self.path, "open"))
    }

    /// Read the full artifact contents into memory
    ///
    /// # Errors
    ///
    /// Returns an error if the backing file cannot be read
    pub fn read_bytes(&self) -> Result<Vec<u8>> {
        fs::read(&self.path).map_err(|e| Error::io(e, &self.path, "read"))
    }
}
