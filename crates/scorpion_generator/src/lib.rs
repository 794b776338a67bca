//! Generation invoker for the Scorpion content bridge.
//!
//! Media for a block (slide images, narration audio) is produced by an external
//! program. This crate runs that program as a subprocess and reports what it
//! printed:
//!
//! ```text
//! <command...> --block <id> [--force] [--regenerate <target> ...]
//! ```
//!
//! The [`MediaGenerator`] trait is the seam the HTTP layer depends on;
//! [`CommandGenerator`] is the subprocess implementation.
//!
//! # Example
//!
//! ```no_run
//! use scorpion_generator::{CommandGenerator, GenerationRequest, GeneratorConfig, MediaGenerator};
//!
//! # async fn example() -> scorpion_error::ScorpionResult<()> {
//! let config = GeneratorConfig::new(vec!["python".to_string(), "tools/generate.py".to_string()]);
//! let generator = CommandGenerator::new(config)?;
//!
//! let request = GenerationRequest::new("001")?.with_targets(vec!["slide_a".to_string()]);
//! let report = generator.generate(&request).await?;
//! println!("{}", report.stdout());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod command;
mod config;
mod generator;
mod request;

pub use command::CommandGenerator;
pub use config::GeneratorConfig;
pub use generator::MediaGenerator;
pub use request::{GenerationReport, GenerationRequest};
