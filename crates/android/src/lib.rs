//! Android enrichment for the buildview project model
//!
//! Adds Android-specific information to the project proto during sync:
//! dependency AARs become external library entries keyed by the package
//! name extracted from their contents, and resource packages are attached
//! from graph-derived build state. Manifest parsing itself stays with an
//! external collaborator behind [`PackageNameExtractor`].

pub mod manifest;
pub mod ops;
pub mod provider;

pub use manifest::PackageNameExtractor;
pub use ops::{AddDependencyAars, AddResourcePackages};
pub use provider::AndroidTransformProvider;
