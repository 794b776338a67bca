//! Generator subprocess configuration.

use derive_getters::Getters;
use scorpion_error::{ConfigError, ScorpionResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// How to launch the generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GeneratorConfig {
    /// Program followed by its leading arguments, e.g. `["python", "tools/generate.py"]`
    command: Vec<String>,
    /// Kill the child after this many seconds; `None` waits indefinitely
    #[serde(default)]
    timeout_secs: Option<u64>,
    /// Working directory for the child; inherits the bridge's when `None`
    #[serde(default)]
    working_dir: Option<PathBuf>,
}

impl GeneratorConfig {
    /// A configuration with no timeout and an inherited working directory.
    pub fn new(command: Vec<String>) -> Self {
        Self {
            command,
            timeout_secs: None,
            working_dir: None,
        }
    }

    /// Set the timeout in seconds.
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = Some(timeout_secs);
        self
    }

    /// Set the child's working directory.
    pub fn with_working_dir(mut self, working_dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(working_dir.into());
        self
    }

    /// The timeout as a [`Duration`].
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Reject an empty command line or a zero timeout.
    pub fn validate(&self) -> ScorpionResult<()> {
        match self.command.first() {
            None => return Err(ConfigError::invalid("generator_command", "must not be empty").into()),
            Some(program) if program.trim().is_empty() => {
                return Err(ConfigError::invalid("generator_command", "program is blank").into());
            }
            Some(_) => {}
        }
        if self.timeout_secs == Some(0) {
            return Err(ConfigError::invalid("generator_timeout_secs", "must be positive").into());
        }
        Ok(())
    }
}
