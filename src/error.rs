use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Engine timed out after {0:?}")]
    Timeout(std::time::Duration),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Engine failed with exit code {code}: {stderr}")]
    NonZeroExit { code: i32, stderr: String },
}

#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("Failed to read solution file {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(
        "Malformed solution file {path:?}: {wrappies} wrappies but {clones} clone actions \
         (expected wrappies = clones + 1)"
    )]
    WrappyCountMismatch {
        path: PathBuf,
        wrappies: usize,
        clones: usize,
    },
}

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write summary: {0}")]
    WriteSummary(std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("Failed to acquire semaphore: {0}")]
    Semaphore(#[from] tokio::sync::AcquireError),
}
