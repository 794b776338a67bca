//! Bridge configuration errors.
//!
//! Raised while merging `scorpion.toml`, `SCORPION_*` variables and
//! command-line flags, or when the merged settings fail validation (a
//! missing primary root, an empty generator command).

use std::fmt;

/// Configuration error with source location.
///
/// `setting` names the offending key when the fault is a bad value rather
/// than an unreadable or unparsable source.
#[derive(Debug, Clone, derive_more::Error)]
pub struct ConfigError {
    /// Configuration key at fault, e.g. `primary_root`
    pub setting: Option<String>,
    /// What went wrong
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// A fault loading the configuration sources themselves.
    ///
    /// ```
    /// use scorpion_error::ConfigError;
    ///
    /// let err = ConfigError::new("scorpion.toml: expected a table");
    /// assert!(err.setting.is_none());
    /// assert!(err.to_string().starts_with("Configuration Error: scorpion.toml"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            setting: None,
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }

    /// A setting whose merged value cannot be used.
    ///
    /// ```
    /// use scorpion_error::ConfigError;
    ///
    /// let err = ConfigError::invalid("generator_timeout_secs", "must be positive");
    /// assert_eq!(err.setting.as_deref(), Some("generator_timeout_secs"));
    /// assert!(err.to_string().contains("generator_timeout_secs must be positive"));
    /// ```
    #[track_caller]
    pub fn invalid(setting: impl Into<String>, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            setting: Some(setting.into()),
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Configuration Error: ")?;
        if let Some(setting) = &self.setting {
            write!(f, "{} ", setting)?;
        }
        write!(f, "{} at line {} in {}", self.message, self.line, self.file)
    }
}
