//! End-to-end tests for the Android project-model transform
//!
//! Exercises the full pipeline: a session wired to a real local artifact
//! cache and a directory snapshot, the Android transform provider, and
//! repeated transform applications over the same inputs.

use buildview_android::{AndroidTransformProvider, PackageNameExtractor};
use buildview_artifact::{
    resolve_existing_contents, ArtifactDigest, ArtifactDirectory, ArtifactDirectorySnapshot,
    BuildArtifact, LocalArtifactCache,
};
use buildview_project::{
    ArtifactState, BuildGraphData, Label, Project, ProjectDefinition, TargetBuildInfo,
};
use buildview_transform::{compose, SyncContext, SyncSession, TransformProvider};
use std::collections::BTreeSet;
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

/// Test extractor: archive contents are the package name itself
struct PlainTextExtractor;

impl PackageNameExtractor for PlainTextExtractor {
    fn extract(
        &self,
        contents: &mut dyn Read,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let mut buf = String::new();
        contents.read_to_string(&mut buf)?;
        let package = buf.trim();
        if package.is_empty() {
            return Err("no package name in manifest".into());
        }
        Ok(package.to_string())
    }
}

fn label(s: &str) -> Label {
    Label::new(s).unwrap()
}

struct Fixture {
    _cache_dir: TempDir,
    _staged_dir: TempDir,
    session: SyncSession,
    graph: BuildGraphData,
}

/// Two dependency AARs: one present in the cache, one only staged on disk
/// by a "previous sync"; plus one in-project target with a res package.
fn fixture() -> Fixture {
    let cache_dir = TempDir::new().unwrap();
    let cache = LocalArtifactCache::new(cache_dir.path());

    // com.vendor.cached lives in the artifact cache.
    let cached_digest = cache.store(b"com.vendor.cached").unwrap();
    let cached_aar = BuildArtifact::new(cached_digest, "libs/cached.aar");

    // com.vendor.staged exists only in the staged directory snapshot.
    let staged_dir = TempDir::new().unwrap();
    fs::write(staged_dir.path().join("staged.aar"), b"com.vendor.staged").unwrap();
    let staged_contents = resolve_existing_contents(staged_dir.path()).unwrap();
    let staged_digest = ArtifactDigest::from_data(b"com.vendor.staged");
    let staged_aar = BuildArtifact::new(staged_digest, "libs/staged.aar");
    let snapshot =
        ArtifactDirectorySnapshot::new().with_directory(ArtifactDirectory::default(), staged_contents);

    let mut state = ArtifactState::default();
    state.insert(
        label("//third_party/cached:cached"),
        TargetBuildInfo {
            dependency_archives: vec![cached_aar],
            resource_package: None,
        },
    );
    state.insert(
        label("//third_party/staged:staged"),
        TargetBuildInfo {
            dependency_archives: vec![staged_aar],
            resource_package: None,
        },
    );
    state.insert(
        label("//java/com/example/app:app"),
        TargetBuildInfo {
            dependency_archives: vec![],
            resource_package: Some("com.example.app".to_string()),
        },
    );

    let graph = BuildGraphData::new(BTreeSet::from([
        label("//java/com/example/app:app"),
        label("//third_party/cached:cached"),
        label("//third_party/staged:staged"),
    ]));

    let session = SyncSession {
        cache: Arc::new(cache),
        snapshot: Arc::new(snapshot),
        definition: ProjectDefinition::new(
            BTreeSet::from(["java/com/example".to_string()]),
            BTreeSet::new(),
        ),
        artifact_state: Arc::new(state),
    };

    Fixture {
        _cache_dir: cache_dir,
        _staged_dir: staged_dir,
        session,
        graph,
    }
}

#[test]
fn provider_transform_enriches_the_project_model() {
    let fx = fixture();
    let provider = AndroidTransformProvider::new(Arc::new(PlainTextExtractor));
    let transform = compose(provider.create_transforms(&fx.session));

    let project = transform
        .apply(&Project::empty(), &fx.graph, &SyncContext::new(1))
        .unwrap();

    // Both dependency AARs are attached, sorted by package name; the
    // in-project app target contributes no library.
    let packages: Vec<_> = project
        .libraries
        .iter()
        .map(|l| l.package_name.as_str())
        .collect();
    assert_eq!(packages, ["com.vendor.cached", "com.vendor.staged"]);

    // Resource packages come from state, after the AAR pass.
    assert_eq!(project.res_packages, ["com.example.app"]);

    // Both archives are recorded for materialization under "default".
    let default_dir = &project.artifact_directories[&ArtifactDirectory::default()];
    assert!(default_dir.contains_key(&PathBuf::from("libs/cached.aar")));
    assert!(default_dir.contains_key(&PathBuf::from("libs/staged.aar")));
}

#[test]
fn repeated_application_yields_structurally_equal_models() {
    let fx = fixture();
    let provider = AndroidTransformProvider::new(Arc::new(PlainTextExtractor));
    let transform = compose(provider.create_transforms(&fx.session));

    let first = transform
        .apply(&Project::empty(), &fx.graph, &SyncContext::new(1))
        .unwrap();
    let second = transform
        .apply(&Project::empty(), &fx.graph, &SyncContext::new(2))
        .unwrap();
    assert_eq!(first, second);

    // Applying on top of the produced model is stable too.
    let third = transform
        .apply(&first, &fx.graph, &SyncContext::new(3))
        .unwrap();
    assert_eq!(first, third);
}

#[test]
fn missing_artifact_fails_the_sync_with_full_diagnostics() {
    let fx = fixture();

    // Add a target whose archive is in neither the cache nor the snapshot.
    let missing_digest = ArtifactDigest::from_data(b"com.vendor.missing");
    let mut state = fx.session.artifact_state.state_snapshot();
    state.insert(
        label("//third_party/missing:missing"),
        TargetBuildInfo {
            dependency_archives: vec![BuildArtifact::new(
                missing_digest.clone(),
                "libs/missing.aar",
            )],
            resource_package: None,
        },
    );
    let session = SyncSession {
        cache: Arc::clone(&fx.session.cache),
        snapshot: Arc::clone(&fx.session.snapshot),
        definition: fx.session.definition.clone(),
        artifact_state: Arc::new(state),
    };

    let provider = AndroidTransformProvider::new(Arc::new(PlainTextExtractor));
    let transform = compose(provider.create_transforms(&session));

    let err = transform
        .apply(&Project::empty(), &fx.graph, &SyncContext::new(1))
        .unwrap_err();
    let message = err.to_string();
    assert!(message.contains("libs/missing.aar"));
    assert!(message.contains(missing_digest.as_hex()));
    assert!(message.contains("default"));
    assert!(message.contains("local artifact cache"));
}
