//! Top-level error wrapper types.

use crate::{
    ConfigError, GenerationError, NotFoundError, StorageError, ValidationError,
};

/// Every error condition the bridge can surface.
///
/// # Examples
///
/// ```
/// use scorpion_error::{ScorpionError, ValidationError};
///
/// let err: ScorpionError = ValidationError::new("Missing blockId").into();
/// assert!(format!("{}", err).contains("Validation Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ScorpionErrorKind {
    /// Malformed or incomplete request
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Block or asset absent
    #[from(NotFoundError)]
    NotFound(NotFoundError),
    /// Filesystem fault
    #[from(StorageError)]
    Storage(StorageError),
    /// Generator subprocess failure
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
}

/// Scorpion error with kind discrimination.
///
/// # Examples
///
/// ```
/// use scorpion_error::{ScorpionErrorKind, ScorpionResult, NotFoundError};
///
/// fn might_fail() -> ScorpionResult<()> {
///     Err(NotFoundError::new("block_042"))?
/// }
///
/// let err = might_fail().unwrap_err();
/// assert!(matches!(err.kind(), ScorpionErrorKind::NotFound(_)));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Scorpion Error: {}", _0)]
pub struct ScorpionError(Box<ScorpionErrorKind>);

impl ScorpionError {
    /// Create a new error from a kind.
    pub fn new(kind: ScorpionErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ScorpionErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to ScorpionErrorKind
impl<T> From<T> for ScorpionError
where
    T: Into<ScorpionErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Scorpion operations.
pub type ScorpionResult<T> = std::result::Result<T, ScorpionError>;
