use super::{Engine, EngineOutput};
use crate::error::EngineError;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout as tokio_timeout;
use tracing::debug;

/// Runs the external engine binary as a subprocess:
/// `<binary> run <solver_name> --desc D --output S --buy BUYDIR`.
pub struct ProcessEngine {
    pub binary: PathBuf,
    pub solver_name: String,
}

impl ProcessEngine {
    pub fn new(binary: PathBuf, solver_name: String) -> Self {
        Self {
            binary,
            solver_name,
        }
    }
}

#[async_trait]
impl Engine for ProcessEngine {
    fn name(&self) -> &'static str {
        "process"
    }

    async fn solve(
        &self,
        description: &Path,
        solution: &Path,
        buy_dir: &Path,
        timeout: Duration,
    ) -> Result<EngineOutput, EngineError> {
        // Build command - use string for PATH lookup if not an absolute/relative path
        let binary_str = self.binary.to_string_lossy();
        let mut cmd = if binary_str.contains('/') || binary_str.contains('\\') {
            Command::new(&self.binary)
        } else {
            // Plain command name - let the OS find it in PATH
            Command::new(binary_str.as_ref())
        };

        cmd.arg("run")
            .arg(&self.solver_name)
            .arg("--desc")
            .arg(description)
            .arg("--output")
            .arg(solution)
            .arg("--buy")
            .arg(buy_dir);

        // On timeout the output future is dropped; make sure the child does
        // not outlive it as an orphan.
        cmd.kill_on_drop(true);

        debug!("Spawning engine: {:?}", cmd.as_std());

        let start = std::time::Instant::now();

        let output = tokio_timeout(timeout, cmd.output())
            .await
            .map_err(|_| EngineError::Timeout(timeout))?
            .map_err(EngineError::Io)?;

        let result = EngineOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            duration: start.elapsed(),
            exit_code: output.status.code().unwrap_or(-1),
        };

        if !output.status.success() {
            return Err(EngineError::NonZeroExit {
                code: result.exit_code,
                stderr: result.stderr.clone(),
            });
        }

        Ok(result)
    }
}
