use crate::runner::ProblemResult;

/// Render the final result table: one line per problem with this run's
/// score, the previous best, and an "Updated!" flag on strict improvements.
/// Callers pass results already sorted by name.
pub fn render_table(results: &[ProblemResult]) -> String {
    let mut out = String::new();

    for result in results {
        let updated = if result.updated() { "Updated!" } else { "" };
        out.push_str(&format!(
            "{:>10} {:>10} {:>10} {}\n",
            result.name, result.new_time, result.best_time, updated
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::ProblemStatus;
    use crate::score::INFINITE;
    use std::time::Duration;

    fn result(name: &str, new_time: u64, best_time: u64) -> ProblemResult {
        ProblemResult {
            name: name.to_string(),
            new_time,
            best_time,
            status: ProblemStatus::Solved,
            duration: Duration::ZERO,
        }
    }

    #[test]
    fn test_improvement_is_flagged() {
        let table = render_table(&[result("p1", 3, INFINITE)]);
        assert_eq!(table, format!("{:>10} {:>10} {:>10} Updated!\n", "p1", 3, INFINITE));
    }

    #[test]
    fn test_no_improvement_no_flag() {
        let table = render_table(&[result("p1", 4, 3)]);
        assert!(!table.contains("Updated!"));
        assert!(table.contains("p1"));
    }

    #[test]
    fn test_one_line_per_result() {
        let table = render_table(&[result("p1", 3, 5), result("p2", 7, 2)]);
        assert_eq!(table.lines().count(), 2);
    }
}
