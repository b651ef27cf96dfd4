mod process;

pub use process::ProcessEngine;

use crate::error::EngineError;
use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;

/// Wall-clock limit for a single engine invocation.
pub const ENGINE_TIMEOUT: Duration = Duration::from_secs(1200);

#[derive(Debug)]
pub struct EngineOutput {
    pub stdout: String,
    pub stderr: String,
    pub duration: Duration,
    pub exit_code: i32,
}

/// One engine invocation: solve the problem described at `description`,
/// writing the solution to `solution` and any buy file into `buy_dir`.
/// Implementations must return an error on timeout or non-zero exit; the
/// caller checks for the solution file itself.
#[async_trait]
pub trait Engine: Send + Sync {
    #[allow(dead_code)]
    fn name(&self) -> &'static str;

    async fn solve(
        &self,
        description: &Path,
        solution: &Path,
        buy_dir: &Path,
        timeout: Duration,
    ) -> Result<EngineOutput, EngineError>;
}
