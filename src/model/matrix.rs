//! Pairwise compatibility lookup.

use crate::error::{SolverError, SolverResult};

/// A student identifier in `1..=N`.
pub type StudentId = usize;

/// Immutable N×N lookup of pairwise compatibility scores.
///
/// Built once from tabular input and never mutated. Only off-diagonal
/// entries are meaningful; the diagonal is carried but unused.
///
/// # Examples
///
/// ```
/// use room_anneal::model::CompatibilityMatrix;
///
/// let matrix = CompatibilityMatrix::from_rows(vec![
///     vec![0, 3],
///     vec![3, 0],
/// ]).unwrap();
/// assert_eq!(matrix.students(), 2);
/// assert_eq!(matrix.score(1, 2).unwrap(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct CompatibilityMatrix {
    students: usize,
    scores: Vec<i64>,
}

impl CompatibilityMatrix {
    /// Builds a matrix from row-per-student tabular data.
    ///
    /// Fails with [`SolverError::Data`] unless the input is a non-empty
    /// square table.
    pub fn from_rows(rows: Vec<Vec<i64>>) -> SolverResult<Self> {
        let students = rows.len();
        if students == 0 {
            return Err(SolverError::Data("compatibility table is empty".into()));
        }
        let mut scores = Vec::with_capacity(students * students);
        for (row_idx, row) in rows.into_iter().enumerate() {
            if row.len() != students {
                return Err(SolverError::Data(format!(
                    "row {} has {} entries, expected {}",
                    row_idx + 1,
                    row.len(),
                    students
                )));
            }
            scores.extend(row);
        }
        Ok(Self { students, scores })
    }

    /// Builds an N×N matrix where every pair shares the same score.
    ///
    /// Useful for tests and benchmarks; the diagonal gets the same value
    /// but is never read.
    pub fn uniform(students: usize, score: i64) -> SolverResult<Self> {
        Self::from_rows(vec![vec![score; students]; students])
    }

    /// The population size N.
    pub fn students(&self) -> usize {
        self.students
    }

    /// The compatibility score between two distinct students.
    ///
    /// Fails with [`SolverError::OutOfRange`] if either id is outside
    /// `1..=N`.
    pub fn score(&self, a: StudentId, b: StudentId) -> SolverResult<i64> {
        let max = self.students;
        for id in [a, b] {
            if id < 1 || id > max {
                return Err(SolverError::OutOfRange { id, max });
            }
        }
        Ok(self.scores[(a - 1) * max + (b - 1)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_square() {
        let matrix = CompatibilityMatrix::from_rows(vec![
            vec![0, 1, 2],
            vec![1, 0, 3],
            vec![2, 3, 0],
        ])
        .unwrap();
        assert_eq!(matrix.students(), 3);
        assert_eq!(matrix.score(1, 3).unwrap(), 2);
        assert_eq!(matrix.score(3, 2).unwrap(), 3);
    }

    #[test]
    fn test_from_rows_empty() {
        assert!(matches!(
            CompatibilityMatrix::from_rows(vec![]),
            Err(SolverError::Data(_))
        ));
    }

    #[test]
    fn test_from_rows_ragged() {
        let err = CompatibilityMatrix::from_rows(vec![vec![0, 1], vec![1]]).unwrap_err();
        assert!(matches!(err, SolverError::Data(_)));
    }

    #[test]
    fn test_score_out_of_range() {
        let matrix = CompatibilityMatrix::uniform(4, 1).unwrap();
        assert!(matches!(
            matrix.score(0, 2),
            Err(SolverError::OutOfRange { id: 0, max: 4 })
        ));
        assert!(matches!(
            matrix.score(1, 5),
            Err(SolverError::OutOfRange { id: 5, max: 4 })
        ));
    }

    #[test]
    fn test_negative_scores_allowed() {
        let matrix = CompatibilityMatrix::from_rows(vec![vec![0, -7], vec![-7, 0]]).unwrap();
        assert_eq!(matrix.score(2, 1).unwrap(), -7);
    }
}
