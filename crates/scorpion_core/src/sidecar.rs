//! Structured block fields from the optional `manifest.json` sidecar.

use derive_getters::Getters;
use scorpion_error::{ScorpionResult, StorageError, StorageErrorKind};
use serde::{Deserialize, Serialize};

/// Optional structured fields for a block.
///
/// Every field is optional; absent fields fall back to the assembler's defaults.
/// Unknown keys are ignored so authoring tools can store extra data alongside.
///
/// ```json
/// {
///   "title": "Disinfecting Implements",
///   "tdlr_citation": "§83.102",
///   "content": { "scenario": "...", "connection": "...", "law": "..." }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Sidecar {
    /// Block title
    #[serde(default)]
    title: Option<String>,
    /// Lesson title, overriding the one derived from the hour directory
    #[serde(default)]
    lesson_title: Option<String>,
    /// Regulatory citation
    #[serde(default)]
    tdlr_citation: Option<String>,
    /// Running time in minutes
    #[serde(default)]
    duration_minutes: Option<u32>,
    /// Structured script fields
    #[serde(default)]
    content: Option<SidecarContent>,
}

/// Script fields inside a sidecar, using the authoring tool's short key names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct SidecarContent {
    /// Becomes `SCENARIO`
    #[serde(default)]
    scenario: Option<String>,
    /// Becomes `COSMETOLOGY_CONNECTION`
    #[serde(default)]
    connection: Option<String>,
    /// Becomes `THE_LAW`
    #[serde(default)]
    law: Option<String>,
}

impl Sidecar {
    /// Parse sidecar JSON.
    ///
    /// `origin` names the source file in the error message.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageErrorKind::Malformed`] error when `text` is not a JSON
    /// object of the expected shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use scorpion_core::Sidecar;
    ///
    /// let sidecar = Sidecar::from_json(r#"{"title": "Intro"}"#, "manifest.json").unwrap();
    /// assert_eq!(sidecar.title().as_deref(), Some("Intro"));
    /// assert!(Sidecar::from_json("{not json", "manifest.json").is_err());
    /// ```
    pub fn from_json(text: &str, origin: &str) -> ScorpionResult<Self> {
        serde_json::from_str(text).map_err(|e| {
            StorageError::new(StorageErrorKind::Malformed(format!("{}: {}", origin, e))).into()
        })
    }

    /// Builder-style setter for the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Builder-style setter for the citation.
    pub fn with_citation(mut self, citation: impl Into<String>) -> Self {
        self.tdlr_citation = Some(citation.into());
        self
    }

    /// Builder-style setter for the structured script fields.
    pub fn with_content(mut self, content: SidecarContent) -> Self {
        self.content = Some(content);
        self
    }
}

impl SidecarContent {
    /// Create content with all three fields present.
    pub fn new(
        scenario: impl Into<String>,
        connection: impl Into<String>,
        law: impl Into<String>,
    ) -> Self {
        Self {
            scenario: Some(scenario.into()),
            connection: Some(connection.into()),
            law: Some(law.into()),
        }
    }
}
