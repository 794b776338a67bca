//! Generator trait definition.

use crate::{GenerationReport, GenerationRequest};
use scorpion_error::ScorpionResult;

/// Produces media for a block.
///
/// The HTTP layer holds a `dyn MediaGenerator` so tests can substitute a fake.
#[async_trait::async_trait]
pub trait MediaGenerator: Send + Sync {
    /// Run generation to completion.
    ///
    /// # Errors
    ///
    /// Returns a `Generation` error when the generator cannot be started, exits
    /// unsuccessfully, or exceeds its timeout. A failed run carries the captured
    /// stdout and stderr.
    async fn generate(&self, request: &GenerationRequest) -> ScorpionResult<GenerationReport>;

    /// Human-readable description of what will be run, for logs.
    fn describe(&self) -> String;
}
