//! Android update operations
//!
//! Two operations enrich the project model, in this order: dependency AAR
//! attachment (resolves archives and extracts their package names), then
//! resource-package attachment (straight from artifact state, no resolver
//! involved).

use crate::manifest::PackageNameExtractor;
use buildview_artifact::ArtifactDirectory;
use buildview_project::{
    ArtifactStateSource, ExternalLibrary, ProjectDefinition, ProjectUpdate,
};
use buildview_transform::{Error, ProjectUpdateOperation, ResolveArtifact, Result};
use std::sync::Arc;

/// Attaches out-of-project dependency AARs as external libraries
///
/// For each archive artifact in the current state, resolves it to a local
/// file, extracts the package name from its contents, attaches a library
/// entry keyed by that package, and records the archive under the default
/// artifact directory for materialization.
pub struct AddDependencyAars {
    state: Arc<dyn ArtifactStateSource>,
    resolver: Arc<dyn ResolveArtifact>,
    definition: ProjectDefinition,
    extractor: Arc<dyn PackageNameExtractor>,
}

impl AddDependencyAars {
    /// Create the operation with its session-scoped bindings
    #[must_use]
    pub fn new(
        state: Arc<dyn ArtifactStateSource>,
        resolver: Arc<dyn ResolveArtifact>,
        definition: ProjectDefinition,
        extractor: Arc<dyn PackageNameExtractor>,
    ) -> Self {
        Self {
            state,
            resolver,
            definition,
            extractor,
        }
    }
}

impl ProjectUpdateOperation for AddDependencyAars {
    fn name(&self) -> &'static str {
        "add-dependency-aars"
    }

    fn update(&self, update: &mut ProjectUpdate) -> Result<()> {
        let directory = ArtifactDirectory::default();
        let state = self.state.state_snapshot();
        for (label, info) in &state.targets {
            // In-project targets get their resources from source roots,
            // not from cached archives.
            if self.definition.is_included(label) {
                continue;
            }
            for artifact in &info.dependency_archives {
                let cached = self.resolver.resolve(artifact, &directory)?;
                let mut contents = cached.open()?;
                let package = self
                    .extractor
                    .extract(&mut contents)
                    .map_err(|e| Error::extraction(&artifact.artifact_path, e.to_string()))?;

                tracing::debug!(
                    target = %label,
                    package = %package,
                    archive = %artifact.artifact_path.display(),
                    "attaching dependency aar"
                );
                update.add_library(ExternalLibrary {
                    package_name: package,
                    archive_path: artifact.artifact_path.clone(),
                    digest: artifact.digest.clone(),
                });
                update.record_artifact(
                    directory.clone(),
                    artifact.artifact_path.clone(),
                    artifact.digest.clone(),
                );
            }
        }
        Ok(())
    }
}

/// Attaches resource packages for build-graph targets carrying them
///
/// No resolver call: the package names come straight from graph-derived
/// build data. State entries for targets no longer in the graph are
/// stale and skipped.
pub struct AddResourcePackages {
    state: Arc<dyn ArtifactStateSource>,
}

impl AddResourcePackages {
    /// Create the operation over the session's artifact state source
    #[must_use]
    pub fn new(state: Arc<dyn ArtifactStateSource>) -> Self {
        Self { state }
    }
}

impl ProjectUpdateOperation for AddResourcePackages {
    fn name(&self) -> &'static str {
        "add-resource-packages"
    }

    fn update(&self, update: &mut ProjectUpdate) -> Result<()> {
        let state = self.state.state_snapshot();
        for (label, info) in &state.targets {
            if !update.graph().contains(label) {
                continue;
            }
            if let Some(package) = &info.resource_package {
                tracing::debug!(target = %label, package = %package, "attaching resource package");
                update.add_res_package(package.clone());
            }
        }
        Ok(())
    }
}
