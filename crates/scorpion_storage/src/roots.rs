//! Storage root configuration.

use derive_getters::Getters;
use scorpion_error::{ConfigError, ScorpionResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The directories content is read from and written to.
///
/// The primary root holds authored content arranged by hour; the optional
/// secondary root holds generator output arranged by block name only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct StorageRoots {
    /// Authored content, `{primary_root}/{hour}/block_<id>/`
    primary_root: PathBuf,
    /// Generated output, `{secondary_root}/block_<id>/`
    #[serde(default)]
    secondary_root: Option<PathBuf>,
}

impl StorageRoots {
    /// Roots with no secondary output directory.
    pub fn new(primary_root: impl Into<PathBuf>) -> Self {
        Self {
            primary_root: primary_root.into(),
            secondary_root: None,
        }
    }

    /// Set the generated-output root.
    pub fn with_secondary_root(mut self, secondary_root: impl Into<PathBuf>) -> Self {
        self.secondary_root = Some(secondary_root.into());
        self
    }

    /// Check that the primary root is an existing directory.
    ///
    /// A missing secondary root only produces a warning: generation may not
    /// have run yet.
    pub fn validate(&self) -> ScorpionResult<()> {
        if !self.primary_root.is_dir() {
            return Err(ConfigError::invalid(
                "primary_root",
                format!("is not a directory: {}", self.primary_root.display()),
            )
            .into());
        }
        if let Some(secondary) = &self.secondary_root {
            if !secondary.is_dir() {
                tracing::warn!(path = %secondary.display(), "secondary_root does not exist yet");
            }
        }
        Ok(())
    }

    /// `{secondary_root}/{block_dir_name}`, if a secondary root is configured.
    pub fn secondary_block_dir(&self, block_dir_name: &str) -> Option<PathBuf> {
        self.secondary_root
            .as_deref()
            .map(|root: &Path| root.join(block_dir_name))
    }
}
