use crate::error::ScoreError;
use std::fs;
use std::path::Path;

/// Sentinel score for "no solution" / failed tasks. Lower scores are better,
/// so this stands in for +infinity in comparisons and in the report.
pub const INFINITE: u64 = 1_000_000_000;

/// Separates one wrappy's action sequence from the next in a solution file.
const WRAPPY_DELIMITER: char = '#';

/// The clone action; every occurrence spawns one additional wrappy.
const CLONE_ACTION: char = 'C';

/// Score a solution file. The score is the maximum lifetime over all
/// wrappies, where a wrappy's lifetime is the number of upper-case action
/// letters in its delimiter-separated segment. A missing file scores
/// [`INFINITE`] so a fresh problem always loses to any real solution.
///
/// Structural invariant: each clone action adds exactly one wrappy, so the
/// clone count plus one must equal the segment count. A violation means the
/// engine emitted a malformed solution and scoring fails hard.
pub fn score_solution(path: &Path) -> Result<u64, ScoreError> {
    if !path.is_file() {
        return Ok(INFINITE);
    }

    let body = fs::read_to_string(path).map_err(|source| ScoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let body = body.trim();

    let life_times: Vec<u64> = body
        .split(WRAPPY_DELIMITER)
        .map(|wrappy| wrappy.chars().filter(|c| c.is_ascii_uppercase()).count() as u64)
        .collect();

    let clones = body.matches(CLONE_ACTION).count();
    if clones + 1 != life_times.len() {
        return Err(ScoreError::WrappyCountMismatch {
            path: path.to_path_buf(),
            wrappies: life_times.len(),
            clones,
        });
    }

    Ok(life_times.into_iter().max().unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn solution_file(body: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(body.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_missing_file_is_infinite() {
        let score = score_solution(Path::new("/nonexistent/p1.sol")).unwrap();
        assert_eq!(score, INFINITE);
    }

    #[test]
    fn test_single_wrappy() {
        let file = solution_file("WSA");
        assert_eq!(score_solution(file.path()).unwrap(), 3);
    }

    #[test]
    fn test_lowercase_does_not_count() {
        // Rotations and other lower-case actions do not extend the lifetime.
        let file = solution_file("WqeSqA");
        assert_eq!(score_solution(file.path()).unwrap(), 3);
    }

    #[test]
    fn test_max_over_wrappies() {
        // Two wrappies: the clone in the first segment counts toward its
        // lifetime and announces the second segment.
        let file = solution_file("WC#SSS");
        assert_eq!(score_solution(file.path()).unwrap(), 3);
    }

    #[test]
    fn test_trailing_newline_trimmed() {
        let file = solution_file("WASD\n");
        assert_eq!(score_solution(file.path()).unwrap(), 4);
    }

    #[test]
    fn test_empty_body_scores_zero() {
        let file = solution_file("");
        assert_eq!(score_solution(file.path()).unwrap(), 0);
    }

    #[test]
    fn test_missing_clone_action_is_malformed() {
        // Two segments but no clone action.
        let file = solution_file("WW#SS");
        let err = score_solution(file.path()).unwrap_err();
        match err {
            ScoreError::WrappyCountMismatch {
                wrappies, clones, ..
            } => {
                assert_eq!(wrappies, 2);
                assert_eq!(clones, 0);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_extra_clone_action_is_malformed() {
        // A clone with no matching segment.
        let file = solution_file("WCC#SS");
        assert!(matches!(
            score_solution(file.path()),
            Err(ScoreError::WrappyCountMismatch { .. })
        ));
    }
}
