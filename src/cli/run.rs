use crate::cli::Cli;
use crate::discovery::discover_problems;
use crate::engine::{ProcessEngine, ENGINE_TIMEOUT};
use crate::output::{render_table, write_summary};
use crate::runner::{Orchestrator, RunDirs};
use std::sync::Arc;
use tracing::{error, info, warn};

pub async fn execute(cli: Cli) -> anyhow::Result<()> {
    let dirs = RunDirs {
        descriptions: cli.description_directory_path,
        solutions: cli.solution_directory_path,
        buys: cli.buy_directory_path,
        best: cli.best_solution_directory_path,
    };
    dirs.create_all()?;

    let problems = discover_problems(&dirs.descriptions)?;
    info!(
        "Discovered {} problems in {:?}",
        problems.len(),
        dirs.descriptions
    );

    let engine = Arc::new(ProcessEngine::new(
        cli.engine_file_path.clone(),
        cli.solver_name.clone(),
    ));

    let orchestrator = Orchestrator::new(engine, dirs.clone(), cli.jobs, ENGINE_TIMEOUT);
    let report = orchestrator.run(problems).await?;

    // The table is the product; every line stays sorted by problem name.
    print!("{}", render_table(&report.results));

    if let Err(e) = write_summary(
        &dirs.solutions,
        &report,
        &cli.solver_name,
        &cli.engine_file_path,
    ) {
        warn!("Failed to write summary: {}", e);
    }

    info!(
        "Completed {} problems in {:.1}s",
        report.results.len(),
        report.total_duration.as_secs_f64()
    );

    if report.failed {
        error!("Some problems failed; see the log above for details");
        std::process::exit(1);
    }

    Ok(())
}
