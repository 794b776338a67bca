//! The assembled block record.

use crate::Atom;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Duration reported for every block unless the sidecar overrides it.
pub const DEFAULT_DURATION_MINUTES: u32 = 5;

/// Citation reported when the sidecar does not name one.
pub const DEFAULT_CITATION: &str = "§83.100";

/// Placeholder for structured script fields with no source.
pub const NOT_AVAILABLE: &str = "N/A";

/// One lesson segment's complete content record.
///
/// Recomputed from the block directory on every request and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Block {
    /// Directory name without its `block_` prefix
    block_id: String,
    /// Display title
    block_title: String,
    /// Lesson the block belongs to
    lesson_title: String,
    /// Hour label, e.g. `Hour 1`
    hour_name: String,
    /// Running time in minutes
    duration_minutes: u32,
    /// Regulatory citation
    tdlr_citation: String,
    /// Script atom first, then visuals by slide letter, then audio
    atoms: Vec<Atom>,
}

impl Block {
    pub(crate) fn new(
        block_id: String,
        block_title: String,
        lesson_title: String,
        hour_name: String,
        duration_minutes: u32,
        tdlr_citation: String,
        atoms: Vec<Atom>,
    ) -> Self {
        Self {
            block_id,
            block_title,
            lesson_title,
            hour_name,
            duration_minutes,
            tdlr_citation,
            atoms,
        }
    }

    /// Look up an atom by id.
    pub fn atom(&self, atom_id: &str) -> Option<&Atom> {
        self.atoms.iter().find(|atom| atom.atom_id() == atom_id)
    }
}
