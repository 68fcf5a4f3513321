//! Project-proto transform pipeline for buildview
//!
//! This crate is the core of the synchronizer: it turns already-computed
//! build graph data into enriched project-model updates via cached
//! artifacts.
//!
//! # Overview
//!
//! - [`ResolveArtifact`] / [`ArtifactResolver`]: resolve a build artifact
//!   reference to a locally readable file, preferring the
//!   content-addressable cache and falling back to the directory snapshot
//!   from a previous sync
//! - [`ProjectUpdateOperation`]: one unit of enrichment appended to a
//!   pending update
//! - [`ProjectTransform`] / [`UpdateTransform`]: apply an ordered list of
//!   operations against exactly one pending update, all-or-nothing
//! - [`TransformProvider`] / [`SyncSession`]: session-start factory wiring
//!   transforms to the session's cache, snapshot and project definition
//!
//! # Failure model
//!
//! A resolution failure, extraction failure or cache-fetch failure aborts
//! the current transform; no partial model is ever observable. The sync
//! orchestrator keeps the previous project model in effect.

mod context;
mod error;
mod operation;
mod resolver;
mod transform;

pub use context::SyncContext;
pub use error::{Error, Result};
pub use operation::ProjectUpdateOperation;
pub use resolver::{ArtifactResolver, ResolveArtifact};
pub use transform::{compose, ProjectTransform, SyncSession, TransformProvider, UpdateTransform};
