//! Block discovery and text edits in the primary root.

use crate::fs::{is_dir, is_file, list_names, read_for_update, write_atomic};
use crate::{
    AssetKind, BLOCK_PREFIX, PROMPT_FILES, SCRIPT_FILE, StorageRoots, block_id_from_dir_name,
    validate_block_id,
};
use scorpion_core::replace_prompt;
use scorpion_error::{NotFoundError, ScorpionResult};
use std::path::{Path, PathBuf};

/// Lists blocks and overwrites their editable text files.
///
/// Edits replace one whole file at a time (temporary file + rename). Concurrent
/// edits to the same file are not coordinated; the last writer wins.
#[derive(Debug, Clone)]
pub struct BlockStore {
    roots: StorageRoots,
}

impl BlockStore {
    /// Create a store over `roots`.
    pub fn new(roots: StorageRoots) -> Self {
        Self { roots }
    }

    /// The roots this store reads from.
    pub fn roots(&self) -> &StorageRoots {
        &self.roots
    }

    /// Every block as `<hour>/<block_dir>`, sorted.
    ///
    /// These are the logical paths clients pass back to fetch a block.
    #[tracing::instrument(skip(self))]
    pub async fn list_blocks(&self) -> ScorpionResult<Vec<String>> {
        let primary = self.roots.primary_root();
        let mut blocks = Vec::new();

        for hour in list_names(primary, |m| m.is_dir()).await? {
            let block_dirs = list_names(&primary.join(&hour), |m| m.is_dir()).await?;
            blocks.extend(
                block_dirs
                    .into_iter()
                    .filter(|name| block_id_from_dir_name(name).is_some())
                    .map(|name| format!("{}/{}", hour, name)),
            );
        }

        blocks.sort();
        tracing::debug!(count = blocks.len(), "Listed blocks");
        Ok(blocks)
    }

    /// Locate `block_<id>` among the hour directories.
    ///
    /// When several hours contain the same block id, the first hour in name order wins.
    ///
    /// # Errors
    ///
    /// - `Validation` if `block_id` is empty or contains a path separator
    /// - `NotFound` if no hour contains the block
    #[tracing::instrument(skip(self))]
    pub async fn find_block_dir(&self, block_id: &str) -> ScorpionResult<PathBuf> {
        validate_block_id(block_id)?;
        let primary = self.roots.primary_root();
        let dir_name = format!("{}{}", BLOCK_PREFIX, block_id);

        for hour in list_names(primary, |m| m.is_dir()).await? {
            let candidate = primary.join(&hour).join(&dir_name);
            if is_dir(&candidate).await? {
                tracing::debug!(path = %candidate.display(), "Found block directory");
                return Ok(candidate);
            }
        }

        tracing::warn!(root = %primary.display(), "Block directory not found");
        Err(NotFoundError::new(format!("Block {} not found", block_id)).into())
    }

    /// Overwrite the text file for `kind` in block `block_id` with `content`.
    ///
    /// Prompts are written to whichever recognised prompts document already
    /// exists, or `image_prompts.txt` when there is none. Returns the path written.
    ///
    /// Nothing is written when the block does not exist.
    #[tracing::instrument(skip(self, content), fields(len = content.len()))]
    pub async fn write_asset(
        &self,
        block_id: &str,
        kind: AssetKind,
        content: &str,
    ) -> ScorpionResult<PathBuf> {
        let block_dir = self.find_block_dir(block_id).await?;

        let path = match kind {
            AssetKind::Script => block_dir.join(SCRIPT_FILE),
            AssetKind::ImagePrompts => prompts_path(&block_dir).await?,
        };

        write_atomic(&path, content).await?;
        tracing::info!(path = %path.display(), %kind, "Updated block text");
        Ok(path)
    }

    /// Replace the body of one `IMAGE <index>` entry in the block's prompts document.
    ///
    /// Other entries are preserved. The entry is appended when absent, and the
    /// document is created when the block has none. Returns the path written.
    #[tracing::instrument(skip(self, body), fields(len = body.len()))]
    pub async fn write_prompt_entry(
        &self,
        block_id: &str,
        index: u32,
        body: &str,
    ) -> ScorpionResult<PathBuf> {
        let block_dir = self.find_block_dir(block_id).await?;
        let path = prompts_path(&block_dir).await?;

        let existing = read_for_update(&path).await?.unwrap_or_default();
        write_atomic(&path, &replace_prompt(&existing, index, body)).await?;
        tracing::info!(path = %path.display(), index, "Updated prompt entry");
        Ok(path)
    }
}

/// The existing prompts document of `block_dir`, or the default name when there is none.
async fn prompts_path(block_dir: &Path) -> ScorpionResult<PathBuf> {
    for name in PROMPT_FILES {
        let candidate = block_dir.join(name);
        if is_file(&candidate).await? {
            return Ok(candidate);
        }
    }
    Ok(block_dir.join(PROMPT_FILES[0]))
}
