//! Android transform provider

use crate::manifest::PackageNameExtractor;
use crate::ops::{AddDependencyAars, AddResourcePackages};
use buildview_transform::{
    ArtifactResolver, ProjectTransform, ProjectUpdateOperation, ResolveArtifact, SyncSession,
    TransformProvider, UpdateTransform,
};
use std::sync::Arc;

/// Provides the transform that adds Android-specific information to the
/// project model
///
/// Holds the package-name extractor; everything else comes from the
/// session at transform-construction time. Dependency AAR attachment runs
/// before resource-package attachment.
pub struct AndroidTransformProvider {
    extractor: Arc<dyn PackageNameExtractor>,
}

impl AndroidTransformProvider {
    /// Create a provider using the given package-name extractor
    #[must_use]
    pub fn new(extractor: Arc<dyn PackageNameExtractor>) -> Self {
        Self { extractor }
    }
}

impl TransformProvider for AndroidTransformProvider {
    fn create_transforms(&self, session: &SyncSession) -> Vec<Box<dyn ProjectTransform>> {
        let resolver: Arc<dyn ResolveArtifact> = Arc::new(ArtifactResolver::new(
            Arc::clone(&session.cache),
            Arc::clone(&session.snapshot),
        ));
        let operations: Vec<Box<dyn ProjectUpdateOperation>> = vec![
            Box::new(AddDependencyAars::new(
                Arc::clone(&session.artifact_state),
                resolver,
                session.definition.clone(),
                Arc::clone(&self.extractor),
            )),
            Box::new(AddResourcePackages::new(Arc::clone(
                &session.artifact_state,
            ))),
        ];
        vec![Box::new(UpdateTransform::new(operations))]
    }
}
