//! Snapshots of artifact directories materialized by a previous sync
//!
//! When the IDE has already staged artifacts on disk, a later sync can
//! reuse them without touching the cache. The snapshot records, per
//! artifact directory, which digests are present and where.

use crate::artifact::ArtifactDirectory;
use crate::digest::ArtifactDigest;
use crate::{Error, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Read-only mapping from artifact directory to its on-disk contents
///
/// Built once per sync session before any transform runs, and safely
/// shareable across resolutions within that session.
#[derive(Debug, Clone, Default)]
pub struct ArtifactDirectorySnapshot {
    directories: HashMap<ArtifactDirectory, HashMap<ArtifactDigest, PathBuf>>,
}

impl ArtifactDirectorySnapshot {
    /// Create an empty snapshot
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directory's contents to the snapshot
    #[must_use]
    pub fn with_directory(
        mut self,
        directory: ArtifactDirectory,
        contents: HashMap<ArtifactDigest, PathBuf>,
    ) -> Self {
        self.directories.insert(directory, contents);
        self
    }

    /// Whether the snapshot covers the given directory at all
    #[must_use]
    pub fn contains_directory(&self, directory: &ArtifactDirectory) -> bool {
        self.directories.contains_key(directory)
    }

    /// Look up the on-disk path of a digest within a directory
    #[must_use]
    pub fn lookup(
        &self,
        directory: &ArtifactDirectory,
        digest: &ArtifactDigest,
    ) -> Option<&Path> {
        self.directories
            .get(directory)?
            .get(digest)
            .map(PathBuf::as_path)
    }
}

/// Scan a materialized artifact directory and index its files by digest
///
/// Each regular file under `root` is hashed; the result maps digests to
/// absolute paths. Non-file entries are skipped.
///
/// # Errors
///
/// Returns an error if the directory cannot be walked or a file cannot
/// be read.
pub fn resolve_existing_contents(root: &Path) -> Result<HashMap<ArtifactDigest, PathBuf>> {
    let mut contents = HashMap::new();
    if !root.exists() {
        return Ok(contents);
    }

    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|e| Error::Io {
            source: e.into(),
            path: Some(root.into()),
            operation: "walk".into(),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.into_path();
        let data = fs::read(&path).map_err(|e| Error::io(e, &path, "read"))?;
        contents.insert(ArtifactDigest::from_data(&data), path);
    }

    tracing::debug!(
        root = %root.display(),
        files = contents.len(),
        "indexed existing artifact directory contents"
    );
    Ok(contents)
}
