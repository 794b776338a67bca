//! Generation requests and their results.

use derive_getters::Getters;
use scorpion_error::{ScorpionResult, ValidationError};
use serde::{Deserialize, Serialize};

/// One invocation of the generator for a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GenerationRequest {
    /// Block id without the `block_` prefix
    block_id: String,
    /// Assets to regenerate, e.g. `slide_a`; empty means all
    targets: Vec<String>,
    /// Overwrite existing output
    force: bool,
}

impl GenerationRequest {
    /// A request regenerating every asset of `block_id`, keeping existing output.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `block_id` is empty or would be read as a flag.
    pub fn new(block_id: impl Into<String>) -> ScorpionResult<Self> {
        let block_id = block_id.into();
        if block_id.trim().is_empty() {
            return Err(ValidationError::new("Missing blockId").into());
        }
        if block_id.starts_with('-') {
            return Err(ValidationError::new(format!("Invalid blockId: {:?}", block_id)).into());
        }
        Ok(Self {
            block_id,
            targets: Vec::new(),
            force: false,
        })
    }

    /// Restrict generation to `targets`.
    pub fn with_targets(mut self, targets: Vec<String>) -> Self {
        self.targets = targets;
        self
    }

    /// Whether to pass `--force`.
    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// Arguments appended after the configured command.
    ///
    /// ```
    /// use scorpion_generator::GenerationRequest;
    ///
    /// let request = GenerationRequest::new("003")
    ///     .unwrap()
    ///     .with_force(true)
    ///     .with_targets(vec!["slide_a".to_string(), "audio".to_string()]);
    /// assert_eq!(
    ///     request.args(),
    ///     ["--block", "003", "--force", "--regenerate", "slide_a", "audio"]
    /// );
    /// ```
    pub fn args(&self) -> Vec<String> {
        let mut args = vec!["--block".to_string(), self.block_id.clone()];
        if self.force {
            args.push("--force".to_string());
        }
        if !self.targets.is_empty() {
            args.push("--regenerate".to_string());
            args.extend(self.targets.iter().cloned());
        }
        args
    }
}

/// Output of a successful generator run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GenerationReport {
    /// Captured standard output
    stdout: String,
    /// Captured standard error; generators often log progress here
    stderr: String,
}

impl GenerationReport {
    /// Create a report from captured output.
    pub fn new(stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }
}
