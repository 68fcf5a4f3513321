//! Per-target artifact state produced by dependency builds

use crate::graph::Label;
use buildview_artifact::BuildArtifact;
use std::collections::BTreeMap;

/// Build outputs recorded for one target
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetBuildInfo {
    /// Dependency archives (e.g. AARs) produced when the target was built
    pub dependency_archives: Vec<BuildArtifact>,
    /// Resource package carried by the target, if it has one
    pub resource_package: Option<String>,
}

/// Snapshot of built-artifact state across all targets
///
/// Keyed by target label; reflects what the most recent dependency builds
/// produced for each target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtifactState {
    /// Build info per target
    pub targets: BTreeMap<Label, TargetBuildInfo>,
}

impl ArtifactState {
    /// Record build info for a target
    pub fn insert(&mut self, label: Label, info: TargetBuildInfo) {
        self.targets.insert(label, info);
    }
}

/// Session-scoped source of the current artifact state
///
/// Update operations are constructed once per session but applied across
/// many syncs; each application reads a fresh snapshot through this trait
/// rather than capturing state at construction time.
pub trait ArtifactStateSource: Send + Sync {
    /// The current artifact state snapshot
    fn state_snapshot(&self) -> ArtifactState;
}

impl ArtifactStateSource for ArtifactState {
    fn state_snapshot(&self) -> ArtifactState {
        self.clone()
    }
}
