//! Reads a block directory and assembles its manifest.

use crate::fs::{is_file, list_names, read_optional};
use crate::{
    AUDIO_FILE, IMAGES_SUBDIR, PROMPT_FILES, SCRIPT_FILE, SIDECAR_FILE, StorageRoots,
    block_id_from_dir_name,
};
use scorpion_core::{Block, BlockSourceBuilder, PromptEntry, Sidecar, assemble, parse_prompts};
use scorpion_error::{NotFoundError, ScorpionResult};
use std::path::{Path, PathBuf};

/// Turns a block directory into a [`Block`].
///
/// Missing files are not errors: an absent script yields empty text, absent
/// prompts yield placeholder captions, an absent or malformed sidecar yields
/// default fields. Only an unreadable directory listing aborts the load.
#[derive(Debug, Clone)]
pub struct BlockLoader {
    roots: StorageRoots,
}

impl BlockLoader {
    /// Create a loader over `roots`.
    pub fn new(roots: StorageRoots) -> Self {
        Self { roots }
    }

    /// Load and assemble the block in `block_dir`.
    ///
    /// `hour` is the name of the hour directory containing it.
    ///
    /// # Errors
    ///
    /// - `NotFound` if `block_dir` is not an existing `block_<id>` directory
    /// - `Storage` if a candidate directory cannot be listed
    #[tracing::instrument(skip(self, block_dir), fields(dir = %block_dir.display()))]
    pub async fn load(&self, block_dir: &Path, hour: &str) -> ScorpionResult<Block> {
        let dir_name = block_dir
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();
        let Some(block_id) = block_id_from_dir_name(dir_name) else {
            return Err(NotFoundError::new(block_dir.display().to_string()).into());
        };
        if !crate::fs::is_dir(block_dir).await? {
            return Err(NotFoundError::new(block_dir.display().to_string()).into());
        }

        let candidates = self.candidate_dirs(block_dir, dir_name);

        let script_text = read_optional(&block_dir.join(SCRIPT_FILE))
            .await
            .unwrap_or_default();
        let sidecar = self.read_sidecar(block_dir).await;
        let prompts = self.read_prompts(&candidates).await;

        let mut visual_files = Vec::new();
        for dir in &candidates {
            visual_files.extend(list_names(dir, |m| m.is_file()).await?);
        }

        let mut audio_present = false;
        for dir in &candidates {
            if is_file(&dir.join(AUDIO_FILE)).await? {
                audio_present = true;
                break;
            }
        }

        let source = BlockSourceBuilder::default()
            .block_id(block_id)
            .block_dir_name(dir_name)
            .hour(hour)
            .script_text(script_text)
            .sidecar(sidecar)
            .prompts(prompts)
            .visual_files(visual_files)
            .audio_present(audio_present)
            .build()?;

        Ok(assemble(&source))
    }

    /// Primary block directory, then the secondary root's block directory and its images.
    fn candidate_dirs(&self, block_dir: &Path, dir_name: &str) -> Vec<PathBuf> {
        let mut dirs = vec![block_dir.to_path_buf()];
        if let Some(secondary) = self.roots.secondary_block_dir(dir_name) {
            dirs.push(secondary.join(IMAGES_SUBDIR));
            dirs.insert(1, secondary);
        }
        dirs
    }

    async fn read_sidecar(&self, block_dir: &Path) -> Option<Sidecar> {
        let path = block_dir.join(SIDECAR_FILE);
        let text = read_optional(&path).await?;
        match Sidecar::from_json(&text, &path.display().to_string()) {
            Ok(sidecar) => Some(sidecar),
            Err(error) => {
                tracing::warn!(%error, "Ignoring malformed sidecar");
                None
            }
        }
    }

    async fn read_prompts(&self, candidates: &[PathBuf]) -> Vec<PromptEntry> {
        for dir in candidates {
            for name in PROMPT_FILES {
                let path = dir.join(name);
                if let Some(text) = read_optional(&path).await {
                    tracing::debug!(path = %path.display(), "Using prompts document");
                    return parse_prompts(&text);
                }
            }
        }
        tracing::debug!("No prompts document found");
        Vec::new()
    }
}
