//! HTTP bridge for the Scorpion content editor.
//!
//! Exposes lesson blocks stored on disk to a browser-based editor:
//!
//! | Route | Purpose |
//! |---|---|
//! | `GET /health` | Liveness probe |
//! | `POST /update_prompt` | Overwrite a block's script or prompts document |
//! | `POST /generate` | Run the media generator for a block |
//! | `GET /api/scorpion/manifest` | List every block |
//! | `GET /api/scorpion/{path}` | Fetch a block manifest or one of its media files |
//!
//! # Example
//!
//! ```no_run
//! use scorpion_server::{AppState, BridgeConfig, ConfigOverrides, create_router};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = BridgeConfig::load(None, ConfigOverrides::default())?;
//! config.validate()?;
//!
//! let state = AppState::from_config(&config)?;
//! let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
//! axum::serve(listener, create_router(state)).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod handlers;
mod observability;
mod router;
mod state;

pub use config::{BridgeConfig, ConfigOverrides, DEFAULT_CONFIG_NAME, DEFAULT_HOST, DEFAULT_PORT};
pub use error::ApiError;
pub use observability::init_tracing;
pub use router::create_router;
pub use state::AppState;
