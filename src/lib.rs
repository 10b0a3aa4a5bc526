//! N-Queen puzzle enumerator
//!
//! This library enumerates every placement of N non-attacking queens on an
//! N×N board using an iterative backtracking search over an explicit stack
//! of column placements, and renders each solution as an ASCII-art board.

pub mod board;
pub mod output;
pub mod solver;

// Re-export the main public API
pub use board::{render_solution, Board};
pub use output::{OutputError, Progress, SolutionWriter};
pub use solver::{PuzzleSolver, SizeBounds, SolutionIter, SolverError};

/// Enumerate all solutions to the N-Queen puzzle for the given board size.
///
/// Solutions are returned in lexicographic order of their row-assignment
/// vector: each entry maps a column (the index) to the row occupied by the
/// queen in that column.
///
/// The search is iterative and total: it terminates for any `size` and
/// cannot fail. Sizes without solutions (0, 2 and 3) yield an empty vector.
///
/// # Examples
///
/// ```
/// let solutions = nqueens::solve_all(4);
/// assert_eq!(solutions, vec![vec![1, 3, 0, 2], vec![2, 0, 3, 1]]);
///
/// assert_eq!(nqueens::solve_all(8).len(), 92);
/// ```
pub fn solve_all(size: usize) -> Vec<Vec<usize>> {
    SolutionIter::new(size).collect()
}
