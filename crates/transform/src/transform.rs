//! Project-model transforms and their providers
//!
//! A transform applies an ordered list of update operations against one
//! pending update and finalizes it into a new project model. Application
//! is all-or-nothing: if any operation fails, no model is produced and the
//! caller keeps the previous, last-known-good one.

use crate::context::SyncContext;
use crate::operation::ProjectUpdateOperation;
use crate::Result;
use buildview_artifact::{ArtifactDirectorySnapshot, BuildArtifactCache};
use buildview_project::{ArtifactStateSource, BuildGraphData, Project, ProjectDefinition, ProjectUpdate};
use std::sync::Arc;

/// Produces an updated project model from a base model and graph data
///
/// The base model is never mutated; `apply` either returns a complete new
/// model or an error, with no third outcome. Callers serialize
/// applications — at most one transform is in flight per session.
pub trait ProjectTransform: Send + Sync {
    /// Apply this transform to the base model
    ///
    /// # Errors
    ///
    /// Returns an error if any update operation fails; the base model
    /// remains the valid one.
    fn apply(
        &self,
        base: &Project,
        graph: &BuildGraphData,
        context: &SyncContext,
    ) -> Result<Project>;
}

/// Transform that runs a fixed list of update operations in order
pub struct UpdateTransform {
    operations: Vec<Box<dyn ProjectUpdateOperation>>,
}

impl UpdateTransform {
    /// Create a transform over the given operations
    ///
    /// The list order is fixed for the transform's lifetime; later
    /// operations may assume the pending update already reflects earlier
    /// ones.
    #[must_use]
    pub fn new(operations: Vec<Box<dyn ProjectUpdateOperation>>) -> Self {
        Self { operations }
    }
}

impl ProjectTransform for UpdateTransform {
    fn apply(
        &self,
        base: &Project,
        graph: &BuildGraphData,
        context: &SyncContext,
    ) -> Result<Project> {
        let mut update = ProjectUpdate::new(base, graph);
        for operation in &self.operations {
            tracing::debug!(
                sync_id = context.sync_id,
                operation = operation.name(),
                "applying update operation"
            );
            operation.update(&mut update)?;
        }
        Ok(update.build())
    }
}

/// Session-scoped bindings shared by all transforms of one sync session
///
/// Captured once at session start so repeated applications across the
/// session's syncs reuse the same cache handle, snapshot and project
/// definition without re-deriving them.
pub struct SyncSession {
    /// Content-addressable artifact cache for the session
    pub cache: Arc<dyn BuildArtifactCache>,
    /// Snapshot of artifact directories materialized by a previous sync
    pub snapshot: Arc<ArtifactDirectorySnapshot>,
    /// Scope filter for the project
    pub definition: ProjectDefinition,
    /// Source of the current per-target artifact state
    pub artifact_state: Arc<dyn ArtifactStateSource>,
}

/// Factory for the transforms a platform contributes to a session
///
/// Pure: construction has no failure path of its own.
pub trait TransformProvider: Send + Sync {
    /// Build the transforms bound to the given session
    fn create_transforms(&self, session: &SyncSession) -> Vec<Box<dyn ProjectTransform>>;
}

/// Compose transforms into one, applied in order
///
/// Each transform's output model is the next one's base.
#[must_use]
pub fn compose(transforms: Vec<Box<dyn ProjectTransform>>) -> Box<dyn ProjectTransform> {
    struct Composite(Vec<Box<dyn ProjectTransform>>);

    impl ProjectTransform for Composite {
        fn apply(
            &self,
            base: &Project,
            graph: &BuildGraphData,
            context: &SyncContext,
        ) -> Result<Project> {
            let mut project = base.clone();
            for transform in &self.0 {
                project = transform.apply(&project, graph, context)?;
            }
            Ok(project)
        }
    }

    Box::new(Composite(transforms))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use buildview_artifact::{ArtifactDigest, BuildArtifact};
    use buildview_project::ExternalLibrary;

    /// Adds one fixed library entry
    struct AddLibrary {
        package: &'static str,
    }

    impl ProjectUpdateOperation for AddLibrary {
        fn name(&self) -> &'static str {
            "add-library"
        }

        fn update(&self, update: &mut ProjectUpdate) -> Result<()> {
            let artifact =
                BuildArtifact::new(ArtifactDigest::from_data(self.package.as_bytes()), "x.aar");
            update.add_library(ExternalLibrary {
                package_name: self.package.to_string(),
                archive_path: artifact.artifact_path,
                digest: artifact.digest,
            });
            Ok(())
        }
    }

    /// Adds a resource package for every library already attached —
    /// observably depends on what ran before it
    struct MirrorLibrariesAsResPackages;

    impl ProjectUpdateOperation for MirrorLibrariesAsResPackages {
        fn name(&self) -> &'static str {
            "mirror-libraries"
        }

        fn update(&self, update: &mut ProjectUpdate) -> Result<()> {
            let packages: Vec<String> = update
                .libraries()
                .map(|lib| lib.package_name.clone())
                .collect();
            for package in packages {
                update.add_res_package(package);
            }
            Ok(())
        }
    }

    /// Always fails
    struct FailingOperation;

    impl ProjectUpdateOperation for FailingOperation {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn update(&self, _update: &mut ProjectUpdate) -> Result<()> {
            Err(Error::extraction("broken.aar", "malformed contents"))
        }
    }

    fn apply(transform: &UpdateTransform) -> Result<Project> {
        transform.apply(
            &Project::empty(),
            &BuildGraphData::default(),
            &SyncContext::new(1),
        )
    }

    #[test]
    fn operations_run_in_list_order() {
        let forward = UpdateTransform::new(vec![
            Box::new(AddLibrary { package: "com.dep" }),
            Box::new(MirrorLibrariesAsResPackages),
        ]);
        let project = apply(&forward).unwrap();
        assert_eq!(project.res_packages, ["com.dep"]);

        // Reversed, the mirror runs before any library exists.
        let reversed = UpdateTransform::new(vec![
            Box::new(MirrorLibrariesAsResPackages),
            Box::new(AddLibrary { package: "com.dep" }),
        ]);
        let project = apply(&reversed).unwrap();
        assert!(project.res_packages.is_empty());
    }

    #[test]
    fn failing_operation_aborts_the_whole_transform() {
        let transform = UpdateTransform::new(vec![
            Box::new(AddLibrary { package: "com.dep" }),
            Box::new(FailingOperation),
        ]);
        // Either a complete model or an error; here, an error.
        assert!(matches!(apply(&transform), Err(Error::Extraction { .. })));
    }

    #[test]
    fn application_is_idempotent() {
        let transform = UpdateTransform::new(vec![
            Box::new(AddLibrary { package: "com.dep" }),
            Box::new(MirrorLibrariesAsResPackages),
        ]);
        let first = apply(&transform).unwrap();
        let second = apply(&transform).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn base_model_is_never_mutated() {
        let base = Project::empty();
        let transform = UpdateTransform::new(vec![Box::new(AddLibrary { package: "com.dep" })]);
        let updated = transform
            .apply(&base, &BuildGraphData::default(), &SyncContext::default())
            .unwrap();

        assert_eq!(base, Project::empty());
        assert_eq!(updated.libraries.len(), 1);
    }

    #[test]
    fn compose_feeds_each_output_into_the_next() {
        let composed = compose(vec![
            Box::new(UpdateTransform::new(vec![Box::new(AddLibrary {
                package: "com.dep",
            })])),
            Box::new(UpdateTransform::new(vec![Box::new(
                MirrorLibrariesAsResPackages,
            )])),
        ]);
        let project = composed
            .apply(
                &Project::empty(),
                &BuildGraphData::default(),
                &SyncContext::new(2),
            )
            .unwrap();
        assert_eq!(project.res_packages, ["com.dep"]);
    }
}
