//! Fixed file names of the block directory layout.

use scorpion_error::{ScorpionResult, ValidationError};

/// Directory name prefix identifying a block.
pub const BLOCK_PREFIX: &str = "block_";

/// Narration script.
pub const SCRIPT_FILE: &str = "script.txt";

/// Recognised prompts documents, checked in this order.
pub const PROMPT_FILES: [&str; 2] = ["image_prompts.txt", "prompts_debug.md"];

/// Optional structured sidecar.
pub const SIDECAR_FILE: &str = "manifest.json";

/// Narration audio.
pub const AUDIO_FILE: &str = "audio.wav";

/// Subdirectory of a secondary block directory holding generated images.
pub const IMAGES_SUBDIR: &str = "images";

/// Text files of a block that may be edited through the bridge.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::EnumString,
    strum::IntoStaticStr,
    derive_more::Display,
)]
pub enum AssetKind {
    /// `script.txt`
    #[strum(serialize = "script")]
    #[display("script")]
    Script,
    /// The prompts document
    #[strum(serialize = "image_prompts")]
    #[display("image_prompts")]
    ImagePrompts,
}

/// Block id from a directory name, or `None` if it is not a block directory.
///
/// ```
/// use scorpion_storage::block_id_from_dir_name;
///
/// assert_eq!(block_id_from_dir_name("block_001"), Some("001"));
/// assert_eq!(block_id_from_dir_name("block_"), None);
/// assert_eq!(block_id_from_dir_name("images"), None);
/// ```
pub fn block_id_from_dir_name(dir_name: &str) -> Option<&str> {
    dir_name
        .strip_prefix(BLOCK_PREFIX)
        .filter(|id| !id.is_empty())
}

/// Reject block ids that could address anything other than a single block directory,
/// or that a generator would read as a command-line flag.
pub fn validate_block_id(block_id: &str) -> ScorpionResult<()> {
    let valid = !block_id.trim().is_empty()
        && !block_id.starts_with('-')
        && block_id != "."
        && block_id != ".."
        && !block_id.contains(['/', '\\'])
        && !block_id.chars().any(char::is_control);
    if valid {
        Ok(())
    } else {
        Err(ValidationError::new(format!("Invalid blockId: {:?}", block_id)).into())
    }
}
