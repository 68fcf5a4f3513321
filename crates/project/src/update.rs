//! Pending project-model update
//!
//! [`ProjectUpdate`] is the mutable accumulator threaded through a
//! transform's update operations. It is a distinct type from [`Project`]:
//! no partially updated model is ever observable, only the finalized value
//! returned by [`ProjectUpdate::build`].

use crate::graph::BuildGraphData;
use crate::proto::{ExternalLibrary, Project};
use buildview_artifact::{ArtifactDigest, ArtifactDirectory};
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

/// Accumulated changes for one transform application
///
/// Created per application from a base model and the current build graph,
/// mutated by each update operation in turn, and consumed exactly once by
/// [`build`](Self::build).
#[derive(Debug)]
pub struct ProjectUpdate {
    graph: BuildGraphData,
    libraries: BTreeMap<String, ExternalLibrary>,
    res_packages: BTreeSet<String>,
    artifact_directories: BTreeMap<ArtifactDirectory, BTreeMap<PathBuf, ArtifactDigest>>,
}

impl ProjectUpdate {
    /// Open an update seeded from the base model and the current graph
    #[must_use]
    pub fn new(base: &Project, graph: &BuildGraphData) -> Self {
        Self {
            graph: graph.clone(),
            libraries: base
                .libraries
                .iter()
                .map(|lib| (lib.package_name.clone(), lib.clone()))
                .collect(),
            res_packages: base.res_packages.iter().cloned().collect(),
            artifact_directories: base.artifact_directories.clone(),
        }
    }

    /// The build graph this update is being computed against
    #[must_use]
    pub fn graph(&self) -> &BuildGraphData {
        &self.graph
    }

    /// Attach an external library, keyed by its package name
    ///
    /// A later entry for the same package replaces the earlier one.
    pub fn add_library(&mut self, library: ExternalLibrary) {
        self.libraries
            .insert(library.package_name.clone(), library);
    }

    /// Libraries accumulated so far, in package-name order
    pub fn libraries(&self) -> impl Iterator<Item = &ExternalLibrary> {
        self.libraries.values()
    }

    /// Attach a resource package
    pub fn add_res_package(&mut self, package: impl Into<String>) {
        self.res_packages.insert(package.into());
    }

    /// Resource packages accumulated so far, in sorted order
    pub fn res_packages(&self) -> impl Iterator<Item = &str> {
        self.res_packages.iter().map(String::as_str)
    }

    /// Record an artifact to be materialized under the given directory
    pub fn record_artifact(
        &mut self,
        directory: ArtifactDirectory,
        artifact_path: PathBuf,
        digest: ArtifactDigest,
    ) {
        self.artifact_directories
            .entry(directory)
            .or_default()
            .insert(artifact_path, digest);
    }

    /// Finalize the accumulated changes into a new project model
    #[must_use]
    pub fn build(self) -> Project {
        Project {
            libraries: self.libraries.into_values().collect(),
            res_packages: self.res_packages.into_iter().collect(),
            artifact_directories: self.artifact_directories,
        }
    }
}
