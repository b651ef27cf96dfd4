use crate::error::OutputError;
use crate::runner::{ProblemStatus, RunReport};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryReport {
    pub timestamp: String,
    pub solver: String,
    pub engine: String,
    pub duration_sec: f64,
    pub problems: Vec<ProblemSummary>,
    pub failed: bool,
    pub exit_code: i32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProblemSummary {
    pub name: String,
    pub new_time: u64,
    pub best_time: u64,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub duration_sec: f64,
    pub updated: bool,
}

/// Write a machine-readable run summary next to the solutions. Best-effort:
/// the caller downgrades a write failure to a warning.
pub fn write_summary(
    solution_dir: &Path,
    run_report: &RunReport,
    solver: &str,
    engine: &Path,
) -> Result<(), OutputError> {
    let summary = build_summary(run_report, solver, engine);
    let json = serde_json::to_string_pretty(&summary)?;
    fs::write(solution_dir.join("summary.json"), json).map_err(OutputError::WriteSummary)
}

fn build_summary(run_report: &RunReport, solver: &str, engine: &Path) -> SummaryReport {
    let problems = run_report
        .results
        .iter()
        .map(|result| {
            let (status, error) = match &result.status {
                ProblemStatus::Solved => ("solved".to_string(), None),
                ProblemStatus::Skipped => ("skipped".to_string(), None),
                ProblemStatus::Failed { error } => ("failed".to_string(), Some(error.clone())),
            };
            ProblemSummary {
                name: result.name.clone(),
                new_time: result.new_time,
                best_time: result.best_time,
                status,
                error,
                duration_sec: result.duration.as_secs_f64(),
                updated: result.updated(),
            }
        })
        .collect();

    SummaryReport {
        timestamp: Utc::now().to_rfc3339(),
        solver: solver.to_string(),
        engine: engine.display().to_string(),
        duration_sec: run_report.total_duration.as_secs_f64(),
        problems,
        failed: run_report.failed,
        exit_code: if run_report.failed { 1 } else { 0 },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::ProblemResult;
    use crate::score::INFINITE;
    use std::time::Duration;

    fn report() -> RunReport {
        RunReport {
            results: vec![
                ProblemResult {
                    name: "p1".to_string(),
                    new_time: 3,
                    best_time: INFINITE,
                    status: ProblemStatus::Solved,
                    duration: Duration::from_secs(2),
                },
                ProblemResult {
                    name: "p2".to_string(),
                    new_time: INFINITE,
                    best_time: INFINITE,
                    status: ProblemStatus::Failed {
                        error: "engine timed out".to_string(),
                    },
                    duration: Duration::from_secs(5),
                },
            ],
            total_duration: Duration::from_secs(7),
            failed: true,
        }
    }

    #[test]
    fn test_build_summary_maps_statuses() {
        let summary = build_summary(&report(), "bfs", Path::new("src/solver"));

        assert!(summary.failed);
        assert_eq!(summary.exit_code, 1);
        assert_eq!(summary.solver, "bfs");
        assert_eq!(summary.problems.len(), 2);

        assert_eq!(summary.problems[0].status, "solved");
        assert!(summary.problems[0].updated);
        assert!(summary.problems[0].error.is_none());

        assert_eq!(summary.problems[1].status, "failed");
        assert_eq!(
            summary.problems[1].error.as_deref(),
            Some("engine timed out")
        );
        assert!(!summary.problems[1].updated);
    }

    #[test]
    fn test_write_summary_produces_json() {
        let dir = tempfile::tempdir().unwrap();
        write_summary(dir.path(), &report(), "bfs", Path::new("src/solver")).unwrap();

        let json = fs::read_to_string(dir.path().join("summary.json")).unwrap();
        let parsed: SummaryReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.problems.len(), 2);
        assert_eq!(parsed.problems[0].name, "p1");
    }
}
