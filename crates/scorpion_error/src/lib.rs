//! Error types for the Scorpion content bridge.
//!
//! This crate provides the foundation error types used throughout the Scorpion workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! Parsing gaps (absent script, absent prompts, absent audio) are never errors;
//! they resolve to documented defaults before reaching this crate.
//!
//! # Examples
//!
//! ```
//! use scorpion_error::{ScorpionResult, NotFoundError};
//!
//! fn find_block() -> ScorpionResult<String> {
//!     Err(NotFoundError::new("block_999"))?
//! }
//!
//! match find_block() {
//!     Ok(path) => println!("Found: {}", path),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod generation;
mod not_found;
mod storage;
mod validation;

pub use config::ConfigError;
pub use error::{ScorpionError, ScorpionErrorKind, ScorpionResult};
pub use generation::{GenerationError, GenerationErrorKind};
pub use not_found::NotFoundError;
pub use storage::{StorageError, StorageErrorKind};
pub use validation::ValidationError;
