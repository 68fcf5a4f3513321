//! Content-addressable artifact cache
//!
//! Artifacts are stored by their SHA-256 digest in a two-level directory
//! structure to avoid filesystem limitations with large numbers of files
//! in a single directory:
//!
//! ```text
//! <root>/
//!   ab/
//!     cd/
//!       abcdef123456... (actual blob)
//! ```

use crate::artifact::CachedArtifact;
use crate::digest::ArtifactDigest;
use crate::{Error, Result};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Handle to an artifact known to be present in a cache
///
/// Returned by [`BuildArtifactCache::get`]; fetching the bytes is a
/// separate, potentially blocking step.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// Digest the entry is stored under
    pub digest: ArtifactDigest,
    /// Location of the entry within the cache
    pub path: PathBuf,
}

/// A content-addressable store of build artifacts keyed by digest
///
/// The cache may or may not contain a given artifact; lookups are cheap,
/// fetches may block on I/O. Implementations decide retry policy; callers
/// treat a fetch as a synchronous call that either completes or fails.
pub trait BuildArtifactCache: Send + Sync {
    /// Look up an artifact by digest without fetching its bytes
    fn get(&self, digest: &ArtifactDigest) -> Option<CacheEntry>;

    /// Fetch the bytes of a previously looked-up entry (may block)
    ///
    /// # Errors
    ///
    /// Returns an error if the entry has vanished since lookup, fails its
    /// integrity check, or cannot be read.
    fn blocking_fetch(&self, entry: &CacheEntry) -> Result<CachedArtifact>;

    /// Identity string for this cache, used in resolution diagnostics
    fn identity(&self) -> String;
}

/// Filesystem-backed artifact cache
#[derive(Debug, Clone)]
pub struct LocalArtifactCache {
    root: PathBuf,
}

impl LocalArtifactCache {
    /// Create a cache rooted at the given directory
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Get the blob path for a digest
    ///
    /// Uses a two-level directory structure: `{root}/{hex[0:2]}/{hex[2:4]}/{hex}`
    fn blob_path(&self, digest: &ArtifactDigest) -> PathBuf {
        let hex = digest.as_hex();
        self.root.join(&hex[0..2]).join(&hex[2..4]).join(hex)
    }

    /// Store a blob and return its digest
    ///
    /// # Errors
    ///
    /// Returns an error if I/O operations fail
    pub fn store(&self, data: &[u8]) -> Result<ArtifactDigest> {
        let digest = ArtifactDigest::from_data(data);
        let path = self.blob_path(&digest);

        // Identical content is already present
        if path.exists() {
            return Ok(digest);
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::io(e, parent, "create_dir_all"))?;
        }

        // Write atomically via a temporary file and rename
        let tmp_path = path.with_extension("tmp");
        let mut file =
            fs::File::create(&tmp_path).map_err(|e| Error::io(e, &tmp_path, "create"))?;
        file.write_all(data)
            .map_err(|e| Error::io(e, &tmp_path, "write"))?;
        file.sync_all()
            .map_err(|e| Error::io(e, &tmp_path, "sync"))?;
        drop(file);

        fs::rename(&tmp_path, &path).map_err(|e| Error::io(e, &path, "rename"))?;

        tracing::debug!(digest = %digest, path = %path.display(), "artifact stored");
        Ok(digest)
    }
}

impl BuildArtifactCache for LocalArtifactCache {
    fn get(&self, digest: &ArtifactDigest) -> Option<CacheEntry> {
        let path = self.blob_path(digest);
        if path.exists() {
            Some(CacheEntry {
                digest: digest.clone(),
                path,
            })
        } else {
            None
        }
    }

    fn blocking_fetch(&self, entry: &CacheEntry) -> Result<CachedArtifact> {
        if !entry.path.exists() {
            return Err(Error::not_cached(entry.digest.as_hex(), self.identity()));
        }
        let data = fs::read(&entry.path).map_err(|e| Error::io(e, &entry.path, "read"))?;

        // Verify integrity before handing the bytes out
        let computed = ArtifactDigest::from_data(&data);
        if computed != entry.digest {
            return Err(Error::DigestMismatch {
                expected: entry.digest.as_hex().to_string(),
                computed: computed.as_hex().to_string(),
            });
        }

        tracing::debug!(digest = %entry.digest, path = %entry.path.display(), "artifact fetched");
        Ok(CachedArtifact::new(&entry.path))
    }

    fn identity(&self) -> String {
        format!("local artifact cache at {}", self.root.display())
    }
}

impl std::fmt::Display for LocalArtifactCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.identity())
    }
}
