pub mod run;

use clap::Parser;
use std::num::NonZeroUsize;
use std::path::PathBuf;

// Flag names keep underscores for drop-in compatibility with the harness
// this tool replaces.
#[derive(Parser)]
#[command(name = "solverbench")]
#[command(
    author,
    version,
    about = "Batch benchmark harness for external puzzle solver engines"
)]
pub struct Cli {
    /// Directory containing input problem descriptions (*.desc)
    #[arg(long = "description_directory_path", default_value = "dataset/problems")]
    pub description_directory_path: PathBuf,

    /// Directory receiving this run's solutions (*.sol)
    #[arg(long = "solution_directory_path")]
    pub solution_directory_path: PathBuf,

    /// Directory receiving this run's buy files (*.buy)
    #[arg(long = "buy_directory_path")]
    pub buy_directory_path: PathBuf,

    /// Directory holding the best known solution per problem across runs
    #[arg(
        long = "best_solution_directory_path",
        default_value = "best_solutions"
    )]
    pub best_solution_directory_path: PathBuf,

    /// Path to the engine executable
    #[arg(long = "engine_file_path", default_value = "src/solver")]
    pub engine_file_path: PathBuf,

    /// Worker pool size
    #[arg(long, default_value_t = default_jobs())]
    pub jobs: usize,

    /// Solver strategy, passed through to the engine
    #[arg(long = "solver_name")]
    pub solver_name: String,

    /// Enable verbose/debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

fn default_jobs() -> usize {
    std::thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}
