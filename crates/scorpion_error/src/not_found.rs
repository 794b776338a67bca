//! Missing block or asset errors.

/// A block directory or asset that does not exist in any storage root.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Not Found: {} at line {} in {}", target, line, file)]
pub struct NotFoundError {
    /// The block id or logical path that was requested
    pub target: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl NotFoundError {
    /// Create a new NotFoundError for `target` at the current location.
    #[track_caller]
    pub fn new(target: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            target: target.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
