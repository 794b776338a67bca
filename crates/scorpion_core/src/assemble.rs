//! Manifest assembly: a block directory's contents → [`Block`].

use crate::{
    Atom, AudioAtom, Block, DEFAULT_CITATION, DEFAULT_DURATION_MINUTES, HourLabel, NOT_AVAILABLE,
    PromptEntry, ScriptAtom, ScriptContent, Sidecar, SlideFile, VisualAtom,
};
use derive_getters::Getters;
use scorpion_error::{ScorpionResult, ValidationError};
use std::collections::BTreeMap;

/// Everything read from disk for one block, ready for assembly.
///
/// # Examples
///
/// ```
/// use scorpion_core::{BlockSourceBuilder, assemble};
///
/// let source = BlockSourceBuilder::default()
///     .block_id("001")
///     .block_dir_name("block_001")
///     .hour("Hour 1 - Sanitation")
///     .script_text("Welcome to hour one.")
///     .build()
///     .unwrap();
///
/// let block = assemble(&source);
/// assert_eq!(block.atoms().len(), 1);
/// assert_eq!(block.lesson_title(), "Sanitation");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_builder::Builder)]
#[builder(setter(into), build_fn(private, name = "build_internal"))]
pub struct BlockSource {
    /// Block id without the `block_` prefix
    block_id: String,
    /// Directory name, used as the prefix of every asset id
    block_dir_name: String,
    /// Name of the hour directory containing the block
    #[builder(default)]
    hour: String,
    /// Raw `script.txt` contents, empty when absent
    #[builder(default)]
    script_text: String,
    /// Parsed `manifest.json`, if present and well-formed
    #[builder(default)]
    sidecar: Option<Sidecar>,
    /// Parsed prompt entries
    #[builder(default)]
    prompts: Vec<PromptEntry>,
    /// File names found in the block directory (non-slides are ignored)
    #[builder(default)]
    visual_files: Vec<String>,
    /// Whether `audio.wav` exists in any recognised location
    #[builder(default)]
    audio_present: bool,
}

impl BlockSourceBuilder {
    /// Build the BlockSource.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `block_id` or `block_dir_name` is missing.
    pub fn build(&self) -> ScorpionResult<BlockSource> {
        self.build_internal()
            .map_err(|e| ValidationError::new(e.to_string()).into())
    }
}

/// Assemble a [`Block`] from its source files.
///
/// The result depends only on `source`: assembling the same input twice yields
/// identical atoms in identical order. Atoms are ordered script first, then one
/// visual atom per slide letter in ascending order, then audio.
#[tracing::instrument(skip(source), fields(block_id = %source.block_id))]
pub fn assemble(source: &BlockSource) -> Block {
    let block_id = source.block_id.as_str();
    let sidecar = source.sidecar.clone().unwrap_or_default();
    let hour = HourLabel::parse(&source.hour);

    let mut atoms = Vec::with_capacity(source.visual_files.len() + 2);

    let script = ScriptAtom::new(block_id, script_content(&sidecar), source.script_text.as_str());
    let script_id = script.atom_id().clone();
    atoms.push(Atom::Script(script));

    // First entry per index wins.
    let mut prompts: BTreeMap<u32, &PromptEntry> = BTreeMap::new();
    for entry in &source.prompts {
        prompts.entry(*entry.index()).or_insert(entry);
    }

    let mut slides: Vec<SlideFile> = source
        .visual_files
        .iter()
        .filter_map(|name| SlideFile::parse(name))
        .collect();
    slides.sort();
    slides.dedup_by_key(|slide| slide.letter());

    for slide in &slides {
        let entry = prompts.get(&slide.index());
        let prompt = entry
            .map(|e| e.body().clone())
            .unwrap_or_else(|| slide.placeholder_prompt());
        let description = entry
            .and_then(|e| e.timestamp().as_deref())
            .filter(|ts| !ts.is_empty())
            .map(|ts| format!("Timestamp: {}", ts))
            .unwrap_or_else(|| slide.default_description());

        atoms.push(Atom::Visual(VisualAtom::new(
            block_id,
            slide.letter(),
            format!("{}/{}", source.block_dir_name, slide.file_name()),
            prompt,
            description,
        )));
    }

    if source.audio_present {
        atoms.push(Atom::Audio(AudioAtom::new(
            block_id,
            format!("{}/audio.wav", source.block_dir_name),
            script_id,
        )));
    }

    tracing::debug!(
        atoms = atoms.len(),
        slides = slides.len(),
        audio = source.audio_present,
        "Assembled block"
    );

    Block::new(
        block_id.to_string(),
        sidecar
            .title()
            .clone()
            .unwrap_or_else(|| format!("Block {}", block_id)),
        sidecar
            .lesson_title()
            .clone()
            .unwrap_or_else(|| hour.lesson_title().to_string()),
        hour.hour_name().to_string(),
        sidecar.duration_minutes().unwrap_or(DEFAULT_DURATION_MINUTES),
        sidecar
            .tdlr_citation()
            .clone()
            .unwrap_or_else(|| DEFAULT_CITATION.to_string()),
        atoms,
    )
}

fn script_content(sidecar: &Sidecar) -> ScriptContent {
    let content = sidecar.content().clone().unwrap_or_default();
    let or_na = |field: &Option<String>| field.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string());
    ScriptContent::new(
        or_na(content.scenario()),
        or_na(content.connection()),
        or_na(content.law()),
    )
}
