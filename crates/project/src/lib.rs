//! Project model and build graph data for buildview
//!
//! This crate holds the data model side of the synchronizer:
//! - The immutable project model ([`Project`]) the IDE consumes
//! - The mutable pending update ([`ProjectUpdate`]) a transform threads
//!   through its update operations and finalizes exactly once
//! - Read-only build graph data ([`BuildGraphData`]) and per-target
//!   artifact state ([`ArtifactState`])
//! - The project definition ([`ProjectDefinition`]) scoping which targets
//!   belong to the project

pub mod definition;
pub mod deps;
mod error;
pub mod graph;
pub mod proto;
pub mod update;

pub use definition::ProjectDefinition;
pub use deps::{ArtifactState, ArtifactStateSource, TargetBuildInfo};
pub use error::{Error, Result};
pub use graph::{BuildGraphData, Label};
pub use proto::{ExternalLibrary, Project};
pub use update::ProjectUpdate;
