//! Filesystem layer for the Scorpion content bridge.
//!
//! Lesson content lives in loose folders on disk. This crate knows the layout:
//!
//! ```text
//! {primary_root}/
//! └── Hour 1 - Sanitation/
//!     └── block_001/
//!         ├── script.txt
//!         ├── image_prompts.txt     (or prompts_debug.md)
//!         ├── manifest.json         (optional sidecar)
//!         ├── slide_a.png
//!         └── audio.wav
//!
//! {secondary_root}/                 (generated output, hour-independent)
//! └── block_001/
//!     ├── audio.wav
//!     └── images/
//!         └── slide_b.png
//! ```
//!
//! - [`BlockStore`] lists blocks and overwrites their text files
//! - [`AssetResolver`] maps a logical path to a file or block directory
//! - [`BlockLoader`] reads a block directory and assembles its [`Block`](scorpion_core::Block)
//!
//! Nothing is cached: every call reads the filesystem afresh.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod fs;
mod layout;
mod loader;
mod media_type;
mod resolver;
mod roots;
mod store;

pub use layout::{
    AUDIO_FILE, AssetKind, BLOCK_PREFIX, IMAGES_SUBDIR, PROMPT_FILES, SCRIPT_FILE, SIDECAR_FILE,
    block_id_from_dir_name, validate_block_id,
};
pub use loader::BlockLoader;
pub use media_type::MediaType;
pub use resolver::{AssetResolver, LogicalPath, Resolved};
pub use roots::StorageRoots;
pub use store::BlockStore;
