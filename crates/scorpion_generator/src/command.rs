//! Subprocess generator.

use crate::{GenerationReport, GenerationRequest, GeneratorConfig, MediaGenerator};
use scorpion_error::{GenerationError, GenerationErrorKind, ScorpionResult};
use std::process::Stdio;
use tokio::process::Command;

/// Runs the configured generator command and waits for it to exit.
///
/// The child's stdin is closed and both output streams are captured. A child
/// still running when its future is dropped (client disconnect, timeout) is killed.
#[derive(Debug, Clone)]
pub struct CommandGenerator {
    config: GeneratorConfig,
}

impl CommandGenerator {
    /// Create a generator from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns a config error if the command line is empty.
    pub fn new(config: GeneratorConfig) -> ScorpionResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration in use.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    fn command(&self, request: &GenerationRequest) -> ScorpionResult<Command> {
        let (program, leading) = self.config.command().split_first().ok_or_else(|| {
            GenerationError::new(GenerationErrorKind::Spawn("empty command line".to_string()))
        })?;

        let mut command = Command::new(program);
        command
            .args(leading)
            .args(request.args())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        if let Some(dir) = self.config.working_dir() {
            command.current_dir(dir);
        }
        Ok(command)
    }
}

#[async_trait::async_trait]
impl MediaGenerator for CommandGenerator {
    #[tracing::instrument(skip(self, request), fields(block_id = %request.block_id(), targets = request.targets().len()))]
    async fn generate(&self, request: &GenerationRequest) -> ScorpionResult<GenerationReport> {
        let mut command = self.command(request)?;
        tracing::info!(command = %self.describe(), "Starting generator");

        let output = command.output();
        let output = match self.config.timeout() {
            Some(limit) => match tokio::time::timeout(limit, output).await {
                Ok(result) => result,
                Err(_) => {
                    tracing::warn!(secs = limit.as_secs(), "Generator timed out");
                    return Err(GenerationError::new(GenerationErrorKind::TimedOut(
                        limit.as_secs(),
                    ))
                    .into());
                }
            },
            None => output.await,
        }
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to start generator");
            GenerationError::new(GenerationErrorKind::Spawn(format!("{}: {}", self.describe(), e)))
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            tracing::warn!(code = ?output.status.code(), "Generator exited unsuccessfully");
            return Err(GenerationError::new(GenerationErrorKind::Failed {
                code: output.status.code(),
                stderr,
                stdout,
            })
            .into());
        }

        tracing::info!(stdout_bytes = stdout.len(), "Generator finished");
        Ok(GenerationReport::new(stdout, stderr))
    }

    fn describe(&self) -> String {
        self.config.command().join(" ")
    }
}
