//! Update operations
//!
//! An update operation is one unit of enrichment work: it inspects
//! build-derived state and appends entries to the pending project update.
//! Operations are constructed once per session with explicit bindings
//! (state source, resolver, scope filter, extractor) and applied against
//! many [`ProjectUpdate`] instances over the session's lifetime, one per
//! sync.

use crate::Result;
use buildview_project::ProjectUpdate;

/// One unit of project-model enrichment
///
/// Operations run strictly sequentially in the order fixed at transform
/// construction; a later operation may rely on entries an earlier one
/// added to the same pending update. Any failure aborts the whole
/// transform.
pub trait ProjectUpdateOperation: Send + Sync {
    /// Name of the operation, used in log output
    fn name(&self) -> &'static str;

    /// Append this operation's entries to the pending update
    ///
    /// # Errors
    ///
    /// Returns an error if artifact resolution or content extraction
    /// fails; the error fails the whole transform.
    fn update(&self, update: &mut ProjectUpdate) -> Result<()>;
}
