//! N-Queens problem generator.
//!
//! One variable per row, holding the queen's column as an opaque token.
//! Column tokens are parsed back to numbers only inside this module; the
//! solver core never interprets them.

use crate::{
    error::Result,
    solver::{
        constraints::binary::BinaryConstraint,
        problem::{Problem, ProblemBuilder},
        value::{Value, Variable},
    },
};

fn column(value: &Value) -> Option<i64> {
    value.as_str().parse().ok()
}

/// Builds the N-Queens problem for an `n` by `n` board.
///
/// Rows pairwise constrain each other: queens may not share a column, and
/// the column distance may not equal the row distance (diagonals).
pub fn n_queens(n: usize) -> Result<Problem> {
    let columns: Vec<String> = (0..n).map(|c| c.to_string()).collect();

    let mut builder = ProblemBuilder::new();
    for row in 0..n {
        builder = builder.variable(format!("q{}", row), columns.iter().map(String::as_str))?;
    }

    for i in 0..n {
        for j in (i + 1)..n {
            let row_distance = (j - i) as i64;
            builder = builder.constraint(BinaryConstraint::new(
                Variable::from(format!("q{}", i)),
                Variable::from(format!("q{}", j)),
                format!("rows {} and {} do not attack", i, j),
                move |a, b| match (column(a), column(b)) {
                    (Some(ca), Some(cb)) => ca != cb && (ca - cb).abs() != row_distance,
                    _ => false,
                },
            ));
        }
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::solver::engine::SolverEngine;

    fn solve(n: usize) -> Option<Vec<i64>> {
        let problem = n_queens(n).unwrap();
        let result = SolverEngine::default().solve(&problem).unwrap();
        let assignment = result.outcome.assignment()?;
        assert!(problem.is_consistent(assignment));
        Some(
            (0..n)
                .map(|row| {
                    column(assignment.get(&Variable::from(format!("q{}", row))).unwrap())
                        .unwrap()
                })
                .collect(),
        )
    }

    fn assert_no_attacks(placement: &[i64]) {
        for i in 0..placement.len() {
            for j in (i + 1)..placement.len() {
                assert_ne!(placement[i], placement[j], "shared column");
                assert_ne!(
                    (placement[i] - placement[j]).abs(),
                    (j - i) as i64,
                    "shared diagonal"
                );
            }
        }
    }

    #[test]
    fn one_queen_is_trivial() {
        let placement = solve(1).expect("a lone queen always fits");
        assert_eq!(placement, vec![0]);
    }

    #[test]
    fn two_and_three_queens_are_unsolvable() {
        assert!(solve(2).is_none());
        assert!(solve(3).is_none());
    }

    #[test]
    fn finds_valid_placements_for_small_boards() {
        for n in [4, 5, 6, 8] {
            let placement = solve(n).unwrap_or_else(|| panic!("{}-queens is solvable", n));
            assert_no_attacks(&placement);
        }
    }
}
