//! Build artifact identities and storage for buildview
//!
//! This crate provides the artifact layer of the project-model
//! synchronizer:
//! - Content-addressing digests ([`ArtifactDigest`])
//! - Build artifact references ([`BuildArtifact`]) and the symbolic
//!   directories they are destined for ([`ArtifactDirectory`])
//! - A content-addressable artifact cache ([`BuildArtifactCache`]) with a
//!   filesystem implementation ([`LocalArtifactCache`])
//! - Snapshots of directories already materialized by a previous sync
//!   ([`ArtifactDirectorySnapshot`])
//!
//! The cache and the snapshot are the two sources a resolver consults to
//! turn a [`BuildArtifact`] reference into a locally readable
//! [`CachedArtifact`].

mod artifact;
mod digest;
mod error;
pub mod snapshot;
pub mod store;

pub use artifact::{ArtifactDirectory, BuildArtifact, CachedArtifact};
pub use digest::ArtifactDigest;
pub use error::{Error, Result};
pub use snapshot::{resolve_existing_contents, ArtifactDirectorySnapshot};
pub use store::{BuildArtifactCache, CacheEntry, LocalArtifactCache};
