//! Bridge configuration.
//!
//! Sources, later overriding earlier:
//! 1. Built-in defaults (`host`, `port`)
//! 2. `scorpion.toml` in the working directory, or the file given with `--config`
//! 3. `SCORPION_*` environment variables, e.g. `SCORPION_PRIMARY_ROOT`
//! 4. Command-line flags
//!
//! ```toml
//! primary_root = "content/01012026_content_F"
//! secondary_root = "output/OMEGA/HOUR_01"
//! generator_command = ["python", "tools/ce_media_generator_omega.py"]
//! generator_timeout_secs = 900
//! port = 5000
//! ```

use config::{Config, Environment, File};
use derive_getters::Getters;
use scorpion_error::{ConfigError, ScorpionError, ScorpionResult};
use scorpion_generator::GeneratorConfig;
use scorpion_storage::StorageRoots;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Config file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_NAME: &str = "scorpion.toml";

/// Loopback only: the bridge has no authentication.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Port the editor expects.
pub const DEFAULT_PORT: u16 = 5000;

/// Everything the bridge needs at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct BridgeConfig {
    /// Authored content arranged as `{hour}/block_<id>/`
    primary_root: PathBuf,
    /// Generator output arranged as `block_<id>/`
    #[serde(default)]
    secondary_root: Option<PathBuf>,
    /// Generator program and leading arguments
    #[serde(default)]
    generator_command: Vec<String>,
    /// Kill the generator after this many seconds
    #[serde(default)]
    generator_timeout_secs: Option<u64>,
    /// Working directory for the generator
    #[serde(default)]
    generator_working_dir: Option<PathBuf>,
    /// Listen address
    host: String,
    /// Listen port
    port: u16,
}

/// Values supplied on the command line, applied over every other source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// `--primary-root`
    pub primary_root: Option<PathBuf>,
    /// `--secondary-root`
    pub secondary_root: Option<PathBuf>,
    /// `--generator`
    pub generator_command: Option<Vec<String>>,
    /// `--generator-timeout`
    pub generator_timeout_secs: Option<u64>,
    /// `--host`
    pub host: Option<String>,
    /// `--port`
    pub port: Option<u16>,
}

fn config_error(context: &str) -> impl Fn(config::ConfigError) -> ScorpionError + '_ {
    move |e| ConfigError::new(format!("{}: {}", context, e)).into()
}

fn path_value(path: Option<PathBuf>) -> Option<String> {
    path.map(|p| p.display().to_string())
}

impl BridgeConfig {
    /// A configuration with default host and port and no generator timeout.
    pub fn new(primary_root: impl Into<PathBuf>, generator_command: Vec<String>) -> Self {
        Self {
            primary_root: primary_root.into(),
            secondary_root: None,
            generator_command,
            generator_timeout_secs: None,
            generator_working_dir: None,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }

    /// Set the generated-output root.
    pub fn with_secondary_root(mut self, secondary_root: impl Into<PathBuf>) -> Self {
        self.secondary_root = Some(secondary_root.into());
        self
    }

    /// Set the generator timeout.
    pub fn with_generator_timeout_secs(mut self, secs: u64) -> Self {
        self.generator_timeout_secs = Some(secs);
        self
    }

    /// Load from defaults, a config file, the environment and `overrides`.
    ///
    /// With `path` set the file must exist; otherwise `scorpion.toml` is read
    /// if present.
    ///
    /// # Errors
    ///
    /// Returns a config error if a source cannot be read or required fields
    /// (`primary_root`) are missing.
    #[instrument(skip(overrides))]
    pub fn load(path: Option<&Path>, overrides: ConfigOverrides) -> ScorpionResult<Self> {
        debug!("Loading bridge configuration");

        let mut builder = Config::builder()
            .set_default("host", DEFAULT_HOST)
            .map_err(config_error("Invalid default"))?
            .set_default("port", i64::from(DEFAULT_PORT))
            .map_err(config_error("Invalid default"))?;

        builder = match path {
            Some(path) => builder.add_source(File::from(path)),
            None => builder.add_source(File::with_name(DEFAULT_CONFIG_NAME).required(false)),
        };

        builder = builder.add_source(
            Environment::with_prefix("SCORPION")
                .try_parsing(true)
                .list_separator(" ")
                .with_list_parse_key("generator_command"),
        );

        builder = builder
            .set_override_option("primary_root", path_value(overrides.primary_root))
            .and_then(|b| {
                b.set_override_option("secondary_root", path_value(overrides.secondary_root))
            })
            .and_then(|b| b.set_override_option("generator_command", overrides.generator_command))
            .and_then(|b| {
                b.set_override_option(
                    "generator_timeout_secs",
                    overrides.generator_timeout_secs,
                )
            })
            .and_then(|b| b.set_override_option("host", overrides.host))
            .and_then(|b| b.set_override_option("port", overrides.port.map(i64::from)))
            .map_err(config_error("Invalid command-line value"))?;

        builder
            .build()
            .map_err(config_error("Failed to build configuration"))?
            .try_deserialize()
            .map_err(config_error("Failed to parse configuration"))
    }

    /// Check that the primary root exists and a generator is configured.
    pub fn validate(&self) -> ScorpionResult<()> {
        self.storage_roots().validate()?;
        self.generator_config().validate()?;
        if self.host.trim().is_empty() {
            return Err(ConfigError::invalid("host", "must not be empty").into());
        }
        Ok(())
    }

    /// The storage roots described by this configuration.
    pub fn storage_roots(&self) -> StorageRoots {
        let roots = StorageRoots::new(&self.primary_root);
        match &self.secondary_root {
            Some(secondary) => roots.with_secondary_root(secondary),
            None => roots,
        }
    }

    /// The generator launch settings described by this configuration.
    pub fn generator_config(&self) -> GeneratorConfig {
        let mut config = GeneratorConfig::new(self.generator_command.clone());
        if let Some(secs) = self.generator_timeout_secs {
            config = config.with_timeout_secs(secs);
        }
        if let Some(dir) = &self.generator_working_dir {
            config = config.with_working_dir(dir);
        }
        config
    }

    /// `host:port` for binding a listener.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
