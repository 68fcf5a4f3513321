//! The project model consumed by the IDE
//!
//! [`Project`] is an immutable value: a transform application replaces it
//! wholesale, never mutates it in place. Collections are kept in sorted
//! order so that two applications over the same inputs compare equal.

use buildview_artifact::{ArtifactDigest, ArtifactDirectory};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// An external dependency library attached to the project
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ExternalLibrary {
    /// Package identifier extracted from the archive contents
    pub package_name: String,
    /// Logical path of the archive within its artifact directory
    pub archive_path: PathBuf,
    /// Digest of the archive bytes
    pub digest: ArtifactDigest,
}

/// The structured project description consumed by the IDE
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// External dependency libraries, sorted by package name
    pub libraries: Vec<ExternalLibrary>,
    /// Resource package names, sorted and deduplicated
    pub res_packages: Vec<String>,
    /// Per-directory artifact contents to materialize on disk,
    /// keyed by logical path within the directory
    pub artifact_directories:
        BTreeMap<ArtifactDirectory, BTreeMap<PathBuf, ArtifactDigest>>,
}

impl Project {
    /// An empty project model
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }
}
