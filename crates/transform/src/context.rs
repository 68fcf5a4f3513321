//! Per-sync context

/// Context for one transform application
///
/// Carries identifying information for the sync pass; transforms thread
/// it through for log correlation. Cheap to clone.
#[derive(Debug, Clone, Default)]
pub struct SyncContext {
    /// Monotonic identifier of the sync pass within the session
    pub sync_id: u64,
}

impl SyncContext {
    /// Create a context for the given sync pass
    #[must_use]
    pub fn new(sync_id: u64) -> Self {
        Self { sync_id }
    }
}
