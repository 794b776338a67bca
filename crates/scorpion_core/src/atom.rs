//! Typed content units within a block.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Discriminant of an [`Atom`], as written to the `atom_type` field.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AtomType {
    /// Narration text
    Script,
    /// Slide image
    Visual,
    /// Narration audio
    Audio,
}

/// One typed content unit within a [`Block`](crate::Block).
///
/// Serialized as a flat object tagged by `atom_type`:
///
/// ```
/// use scorpion_core::{Atom, AudioAtom};
///
/// let atom = Atom::Audio(AudioAtom::new("001", "block_001/audio.wav", "script-001"));
/// let json = serde_json::to_value(&atom).unwrap();
/// assert_eq!(json["atom_type"], "audio");
/// assert_eq!(json["metadata"]["linked_script_atom"], "script-001");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "atom_type", rename_all = "lowercase")]
pub enum Atom {
    /// Narration text atom
    Script(ScriptAtom),
    /// Slide image atom
    Visual(VisualAtom),
    /// Narration audio atom
    Audio(AudioAtom),
}

impl Atom {
    /// The atom's identifier, unique within its block.
    pub fn atom_id(&self) -> &str {
        match self {
            Atom::Script(atom) => atom.atom_id(),
            Atom::Visual(atom) => atom.atom_id(),
            Atom::Audio(atom) => atom.atom_id(),
        }
    }

    /// Which variant this is.
    pub fn atom_type(&self) -> AtomType {
        match self {
            Atom::Script(_) => AtomType::Script,
            Atom::Visual(_) => AtomType::Visual,
            Atom::Audio(_) => AtomType::Audio,
        }
    }

    /// Relative path of the referenced asset, if this atom points at one.
    pub fn asset_id(&self) -> Option<&str> {
        match self {
            Atom::Script(_) => None,
            Atom::Visual(atom) => Some(atom.asset_id()),
            Atom::Audio(atom) => Some(atom.asset_id()),
        }
    }
}

/// Structured narration fields. Keys are upper-case on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ScriptContent {
    /// Scenario paragraph
    #[serde(rename = "SCENARIO")]
    scenario: String,
    /// How the scenario relates to cosmetology practice
    #[serde(rename = "COSMETOLOGY_CONNECTION")]
    cosmetology_connection: String,
    /// Regulatory text
    #[serde(rename = "THE_LAW")]
    the_law: String,
}

impl ScriptContent {
    /// Create structured content from its three fields.
    pub fn new(
        scenario: impl Into<String>,
        cosmetology_connection: impl Into<String>,
        the_law: impl Into<String>,
    ) -> Self {
        Self {
            scenario: scenario.into(),
            cosmetology_connection: cosmetology_connection.into(),
            the_law: the_law.into(),
        }
    }
}

/// Raw script text attached to a script atom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ScriptMetadata {
    /// Verbatim contents of `script.txt`, empty when the file is absent
    full_script: String,
}

/// Narration text atom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ScriptAtom {
    /// Identifier, `script-<block_id>`
    atom_id: String,
    /// Structured narration fields
    content: ScriptContent,
    /// Raw script text
    metadata: ScriptMetadata,
}

impl ScriptAtom {
    /// Build the script atom for `block_id`.
    pub fn new(block_id: &str, content: ScriptContent, full_script: impl Into<String>) -> Self {
        Self {
            atom_id: Self::id_for(block_id),
            content,
            metadata: ScriptMetadata {
                full_script: full_script.into(),
            },
        }
    }

    /// The script atom id used by a block.
    pub fn id_for(block_id: &str) -> String {
        format!("script-{}", block_id)
    }
}

/// Prompt and caption attached to a visual atom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct VisualMetadata {
    /// Image generation prompt, or a `Shot <LETTER>` placeholder
    prompt: String,
    /// Human-readable caption
    description: String,
}

/// Slide image atom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct VisualAtom {
    /// Identifier, `vis-<block_id>-<letter>`
    atom_id: String,
    /// Relative path of the image, `<block_dir>/<file>`
    asset_id: String,
    /// Prompt and caption
    metadata: VisualMetadata,
}

impl VisualAtom {
    /// Build a visual atom for slide `letter` of `block_id`.
    pub fn new(
        block_id: &str,
        letter: char,
        asset_id: impl Into<String>,
        prompt: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            atom_id: format!("vis-{}-{}", block_id, letter),
            asset_id: asset_id.into(),
            metadata: VisualMetadata {
                prompt: prompt.into(),
                description: description.into(),
            },
        }
    }
}

/// Back-reference from an audio atom to the script it narrates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct AudioMetadata {
    /// Id of the script atom in the same block
    linked_script_atom: String,
}

/// Narration audio atom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct AudioAtom {
    /// Identifier, `aud-<block_id>`
    atom_id: String,
    /// Relative path of the audio file
    asset_id: String,
    /// Link to the script atom
    metadata: AudioMetadata,
}

impl AudioAtom {
    /// Build the audio atom for `block_id`.
    pub fn new(
        block_id: &str,
        asset_id: impl Into<String>,
        linked_script_atom: impl Into<String>,
    ) -> Self {
        Self {
            atom_id: format!("aud-{}", block_id),
            asset_id: asset_id.into(),
            metadata: AudioMetadata {
                linked_script_atom: linked_script_atom.into(),
            },
        }
    }
}
