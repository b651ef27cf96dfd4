use crate::engine::Engine;
use crate::runner::{ProblemResult, ProblemStatus, RunDirs};
use crate::score::score_solution;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info};

/// Every path a single problem touches, derived from its name.
pub(super) struct ProblemPaths {
    pub description: PathBuf,
    pub solution: PathBuf,
    pub buy: PathBuf,
    pub best_solution: PathBuf,
    pub best_buy: PathBuf,
}

impl ProblemPaths {
    pub(super) fn new(dirs: &RunDirs, name: &str) -> Self {
        Self {
            description: dirs.descriptions.join(format!("{name}.desc")),
            solution: dirs.solutions.join(format!("{name}.sol")),
            buy: dirs.buys.join(format!("{name}.buy")),
            best_solution: dirs.best.join(format!("{name}.sol")),
            best_buy: dirs.best.join(format!("{name}.buy")),
        }
    }
}

pub(super) async fn execute_problem(
    engine: Arc<dyn Engine>,
    dirs: RunDirs,
    name: String,
    timeout: Duration,
    failure: Arc<AtomicBool>,
) -> ProblemResult {
    let start = std::time::Instant::now();

    // First error wins: once any task has failed, not-yet-started tasks
    // report sentinel scores without touching the filesystem or the engine.
    if failure.load(Ordering::SeqCst) {
        return ProblemResult::sentinel(name, ProblemStatus::Skipped, start.elapsed());
    }

    let paths = ProblemPaths::new(&dirs, &name);

    if !paths.description.is_file() {
        error!(
            "Description file does not exist: {}",
            paths.description.display()
        );
        failure.store(true, Ordering::SeqCst);
        return ProblemResult::sentinel(
            name,
            ProblemStatus::Failed {
                error: format!(
                    "missing description file {}",
                    paths.description.display()
                ),
            },
            start.elapsed(),
        );
    }

    match engine
        .solve(&paths.description, &paths.solution, &dirs.buys, timeout)
        .await
    {
        Ok(output) => {
            info!(
                "Engine solved {} in {:.1}s (exit code {})",
                name,
                output.duration.as_secs_f64(),
                output.exit_code
            );
            if !output.stdout.is_empty() {
                debug!("Engine stdout for {}: {}", name, output.stdout.trim_end());
            }
        }
        Err(e) => {
            error!(
                "Engine failed on {} after {:.1}s: {} (desc={}, solution={})",
                name,
                start.elapsed().as_secs_f64(),
                e,
                paths.description.display(),
                paths.solution.display()
            );
            failure.store(true, Ordering::SeqCst);
            return ProblemResult::sentinel(
                name,
                ProblemStatus::Failed {
                    error: e.to_string(),
                },
                start.elapsed(),
            );
        }
    }

    if !paths.solution.is_file() {
        error!(
            "Engine exited 0 but produced no solution file: {}",
            paths.solution.display()
        );
        failure.store(true, Ordering::SeqCst);
        return ProblemResult::sentinel(
            name,
            ProblemStatus::Failed {
                error: format!("missing solution file {}", paths.solution.display()),
            },
            start.elapsed(),
        );
    }

    // A malformed solution (on either side of the comparison) fails this
    // problem and flags the run instead of aborting the whole process.
    let new_time = match score_solution(&paths.solution) {
        Ok(t) => t,
        Err(e) => return score_failure(name, e, &failure, start),
    };
    let best_time = match score_solution(&paths.best_solution) {
        Ok(t) => t,
        Err(e) => return score_failure(name, e, &failure, start),
    };

    if new_time < best_time {
        if let Err(e) = promote_best(&paths, &dirs.best) {
            error!(
                "Failed to promote best solution for {}: {} (best={})",
                name,
                e,
                paths.best_solution.display()
            );
            failure.store(true, Ordering::SeqCst);
            return ProblemResult::sentinel(
                name,
                ProblemStatus::Failed {
                    error: e.to_string(),
                },
                start.elapsed(),
            );
        }
        info!(
            "New best for {}: {} (was {})",
            name, new_time, best_time
        );
    }

    ProblemResult {
        name,
        new_time,
        best_time,
        status: ProblemStatus::Solved,
        duration: start.elapsed(),
    }
}

fn score_failure(
    name: String,
    error: crate::error::ScoreError,
    failure: &AtomicBool,
    start: std::time::Instant,
) -> ProblemResult {
    error!("Scoring failed for {}: {}", name, error);
    failure.store(true, Ordering::SeqCst);
    ProblemResult::sentinel(
        name,
        ProblemStatus::Failed {
            error: error.to_string(),
        },
        start.elapsed(),
    )
}

/// Replace the best solution with the new one. The solution is staged in a
/// tempfile inside the best directory first so the final rename never leaves
/// a half-written best file. A buy file from a previous best must not
/// survive next to the new solution.
fn promote_best(paths: &ProblemPaths, best_dir: &Path) -> io::Result<()> {
    match fs::remove_file(&paths.best_buy) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e),
    }

    let staged = tempfile::Builder::new()
        .prefix(".promote-")
        .tempfile_in(best_dir)?;
    fs::copy(&paths.solution, staged.path())?;
    staged
        .persist(&paths.best_solution)
        .map_err(|e| e.error)?;

    if paths.buy.is_file() {
        fs::copy(&paths.buy, &paths.best_buy)?;
    }

    Ok(())
}
