//! Core data model and pure assembly logic for the Scorpion content bridge.
//!
//! A lesson *block* lives on disk as a loose folder of files. This crate turns
//! the contents of such a folder into a structured [`Block`] record without
//! touching the filesystem itself:
//!
//! - [`parse_prompts`] extracts `IMAGE n (timestamp):` segments from a prompts document
//! - [`Sidecar`] carries the optional structured fields from `manifest.json`
//! - [`assemble`] combines everything into a deterministic [`Block`]
//!
//! Reading the folder is the job of `scorpion_storage`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod assemble;
mod atom;
mod block;
mod hour;
mod prompt;
mod sidecar;
mod slide;

pub use assemble::{BlockSource, BlockSourceBuilder, assemble};
pub use atom::{
    Atom, AtomType, AudioAtom, AudioMetadata, ScriptAtom, ScriptContent, ScriptMetadata,
    VisualAtom, VisualMetadata,
};
pub use block::{Block, DEFAULT_CITATION, DEFAULT_DURATION_MINUTES, NOT_AVAILABLE};
pub use hour::HourLabel;
pub use prompt::{PromptEntry, find_prompt, parse_prompts, replace_prompt};
pub use sidecar::{Sidecar, SidecarContent};
pub use slide::{IMAGE_EXTENSIONS, SlideFile};
