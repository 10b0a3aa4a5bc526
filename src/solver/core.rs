use log::{debug, info};

use crate::solver::validation::last_queen_is_safe;

/// Iterator over every solution to the N-Queen puzzle for one board size.
///
/// The search is depth-first over column placements but deliberately
/// non-recursive: partial placements live on an explicit stack (`rows`),
/// so deep boards carry no call-stack risk. The stack index is the column,
/// the value is the row currently attempted in that column; a value equal
/// to the board size marks the column as exhausted and triggers
/// backtracking. Solutions are yielded in lexicographic order of the
/// row-assignment vector, with column 0 varying slowest.
#[derive(Debug, Clone)]
pub struct SolutionIter {
    size: usize,
    rows: Vec<usize>,
    exhausted: bool,
}

impl SolutionIter {
    pub fn new(size: usize) -> Self {
        let mut rows = Vec::with_capacity(size.max(1));
        rows.push(0);

        info!("Starting iterative search on a {0}x{0} board", size);

        Self {
            size,
            rows,
            exhausted: size == 0,
        }
    }

    /// Retry the current column one row further down.
    fn advance_top(&mut self) {
        if let Some(top) = self.rows.last_mut() {
            *top += 1;
        }
    }

    /// Abandon the exhausted column and move the previous queen onward.
    /// Ends the search once the first column itself is exhausted.
    fn backtrack(&mut self) {
        if self.rows.len() > 1 {
            self.rows.pop();
            self.advance_top();
        } else {
            debug!("First column exhausted, search complete");
            self.exhausted = true;
        }
    }
}

impl Iterator for SolutionIter {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.exhausted {
            let row = *self.rows.last()?;

            if row >= self.size {
                self.backtrack();
                continue;
            }

            if !last_queen_is_safe(&self.rows) {
                self.advance_top();
                continue;
            }

            if self.rows.len() == self.size {
                // Complete placement: hand out a snapshot, then keep
                // searching this column for further solutions.
                let solution = self.rows.clone();
                self.advance_top();
                return Some(solution);
            }

            // Valid but incomplete: extend into the next column.
            self.rows.push(0);
        }
        None
    }
}

/// Main solver for enumerating queen placements on one board size
pub struct PuzzleSolver {
    size: usize,
}

impl PuzzleSolver {
    /// Create a solver for an N×N board
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    /// Iterate over all solutions in lexicographic order
    pub fn solutions(&self) -> SolutionIter {
        SolutionIter::new(self.size)
    }

    /// Count all solutions without retaining them
    pub fn count_solutions(&self) -> u64 {
        self.solutions().count() as u64
    }
}
