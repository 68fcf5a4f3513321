//! Package-name extraction interface
//!
//! Parsing the Android manifest out of an archive is owned by an external
//! collaborator; this crate only consumes the contract.

use std::io::Read;

/// Extracts the package identifier from dependency archive contents
///
/// Implementations parse the archive's manifest (or equivalent) and
/// return the package name. Malformed contents fail the extraction; the
/// failure is fatal to the current transform and is not retried.
pub trait PackageNameExtractor: Send + Sync {
    /// Extract the package identifier from the given contents
    ///
    /// # Errors
    ///
    /// Returns an error if the contents cannot be parsed.
    fn extract(
        &self,
        contents: &mut dyn Read,
    ) -> std::result::Result<String, Box<dyn std::error::Error + Send + Sync>>;
}
