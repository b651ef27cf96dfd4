use crate::engine::Engine;
use crate::error::RunnerError;
use crate::score::INFINITE;
use futures::stream::{FuturesUnordered, StreamExt};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tracing::{info, warn};

use super::task::execute_problem;
use super::RunDirs;

#[derive(Debug)]
pub struct RunReport {
    pub results: Vec<ProblemResult>,
    pub total_duration: Duration,
    /// True once any task hit a hard failure; the run exits non-zero.
    pub failed: bool,
}

#[derive(Debug)]
pub struct ProblemResult {
    pub name: String,
    pub new_time: u64,
    pub best_time: u64,
    pub status: ProblemStatus,
    pub duration: Duration,
}

impl ProblemResult {
    /// Lower is better; only a strict improvement replaces the best files.
    pub fn updated(&self) -> bool {
        self.new_time < self.best_time
    }

    pub(super) fn sentinel(name: String, status: ProblemStatus, duration: Duration) -> Self {
        Self {
            name,
            new_time: INFINITE,
            best_time: INFINITE,
            status,
            duration,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProblemStatus {
    Solved,
    /// Short-circuited because an earlier task had already failed.
    Skipped,
    Failed { error: String },
}

impl std::fmt::Display for ProblemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProblemStatus::Solved => write!(f, "solved"),
            ProblemStatus::Skipped => write!(f, "skipped"),
            ProblemStatus::Failed { error } => write!(f, "failed: {}", error),
        }
    }
}

pub struct Orchestrator {
    engine: Arc<dyn Engine>,
    dirs: RunDirs,
    jobs: usize,
    semaphore: Arc<Semaphore>,
    timeout: Duration,
}

impl Orchestrator {
    pub fn new(engine: Arc<dyn Engine>, dirs: RunDirs, jobs: usize, timeout: Duration) -> Self {
        let jobs = jobs.max(1);
        Self {
            engine,
            dirs,
            jobs,
            semaphore: Arc::new(Semaphore::new(jobs)),
            timeout,
        }
    }

    /// Run one engine invocation per problem on a bounded worker pool and
    /// collect the per-problem results, sorted by name.
    pub async fn run(&self, problems: Vec<String>) -> Result<RunReport, RunnerError> {
        let start = std::time::Instant::now();
        let failure = Arc::new(AtomicBool::new(false));

        info!(
            "Running {} problems with {} jobs",
            problems.len(),
            self.jobs
        );

        let mut futures = FuturesUnordered::new();

        for name in problems {
            let permit = self.semaphore.clone().acquire_owned().await?;
            let engine = self.engine.clone();
            let dirs = self.dirs.clone();
            let failure = failure.clone();
            let timeout = self.timeout;

            futures.push(tokio::spawn(async move {
                let _permit = permit; // hold until done
                execute_problem(engine, dirs, name, timeout, failure).await
            }));
        }

        let mut results = Vec::new();
        while let Some(joined) = futures.next().await {
            match joined {
                Ok(result) => {
                    info!(
                        "Completed {}: new={} best={} ({})",
                        result.name, result.new_time, result.best_time, result.status
                    );
                    results.push(result);
                }
                Err(e) => {
                    warn!("Task panicked: {}", e);
                    failure.store(true, Ordering::SeqCst);
                }
            }
        }

        // Deterministic report regardless of completion order.
        results.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(RunReport {
            results,
            total_duration: start.elapsed(),
            failed: failure.load(Ordering::SeqCst),
        })
    }
}
