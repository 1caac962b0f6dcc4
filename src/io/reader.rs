//! Compatibility table input.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{SolverError, SolverResult};
use crate::model::CompatibilityMatrix;

/// Parses a whitespace-delimited integer table into a matrix.
///
/// One line per student, blank lines ignored. Any non-numeric token or
/// ragged row fails with [`SolverError::Data`] naming the offending line;
/// the search core only ever sees a fully populated square table.
pub fn read_matrix<R: BufRead>(reader: R) -> SolverResult<CompatibilityMatrix> {
    let mut rows = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let row = line
            .split_whitespace()
            .map(|token| {
                token.parse::<i64>().map_err(|_| {
                    SolverError::Data(format!("line {}: invalid score {token:?}", idx + 1))
                })
            })
            .collect::<SolverResult<Vec<i64>>>()?;
        rows.push(row);
    }
    CompatibilityMatrix::from_rows(rows)
}

/// Opens `path` and parses it with [`read_matrix`].
pub fn load_matrix(path: &Path) -> SolverResult<CompatibilityMatrix> {
    let file = File::open(path)?;
    read_matrix(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_square_table() {
        let input = "0 1 2\n1 0 3\n2 3 0\n";
        let matrix = read_matrix(input.as_bytes()).unwrap();
        assert_eq!(matrix.students(), 3);
        assert_eq!(matrix.score(2, 3).unwrap(), 3);
    }

    #[test]
    fn test_blank_lines_ignored() {
        let input = "0 1\n\n1 0\n\n";
        let matrix = read_matrix(input.as_bytes()).unwrap();
        assert_eq!(matrix.students(), 2);
    }

    #[test]
    fn test_negative_scores_parse() {
        let input = "0 -4\n-4 0\n";
        let matrix = read_matrix(input.as_bytes()).unwrap();
        assert_eq!(matrix.score(1, 2).unwrap(), -4);
    }

    #[test]
    fn test_non_numeric_token() {
        let err = read_matrix("0 1\n1 x\n".as_bytes()).unwrap_err();
        match err {
            SolverError::Data(msg) => assert!(msg.contains("line 2"), "got {msg}"),
            other => panic!("expected Data error, got {other:?}"),
        }
    }

    #[test]
    fn test_ragged_table() {
        assert!(matches!(
            read_matrix("0 1 2\n1 0\n2 0 0\n".as_bytes()),
            Err(SolverError::Data(_))
        ));
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(
            read_matrix("".as_bytes()),
            Err(SolverError::Data(_))
        ));
    }
}
