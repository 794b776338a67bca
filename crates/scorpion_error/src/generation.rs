//! Generator subprocess error types.

/// Ways a generator invocation can fail.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GenerationErrorKind {
    /// The generator program could not be started
    #[display("Failed to launch generator: {}", _0)]
    Spawn(String),
    /// The generator ran and exited with a non-zero status
    #[display("Generation failed with exit code {code:?}")]
    Failed {
        /// Exit code, `None` when the process was terminated by a signal
        code: Option<i32>,
        /// Captured standard error
        stderr: String,
        /// Captured standard output
        stdout: String,
    },
    /// The generator did not finish within the configured timeout
    #[display("Generation timed out after {} seconds", _0)]
    TimedOut(u64),
}

/// Generation error with location tracking.
///
/// A [`GenerationErrorKind::Failed`] is a report about the generator program,
/// not a fault in the bridge itself.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    /// The error kind
    pub kind: GenerationErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
