mod orchestrator;
mod task;

pub use orchestrator::{Orchestrator, ProblemResult, ProblemStatus, RunReport};

use std::io;
use std::path::PathBuf;

/// The four directories a run operates on. Best-directory writes are
/// per-problem, so tasks never collide there.
#[derive(Debug, Clone)]
pub struct RunDirs {
    pub descriptions: PathBuf,
    pub solutions: PathBuf,
    pub buys: PathBuf,
    pub best: PathBuf,
}

impl RunDirs {
    pub fn create_all(&self) -> io::Result<()> {
        std::fs::create_dir_all(&self.descriptions)?;
        std::fs::create_dir_all(&self.solutions)?;
        std::fs::create_dir_all(&self.buys)?;
        std::fs::create_dir_all(&self.best)
    }
}
