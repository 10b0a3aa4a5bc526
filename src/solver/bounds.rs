use log::{debug, warn};

use crate::solver::constants::{DEFAULT_MAX_SIZE, DEFAULT_MIN_SIZE};
use crate::solver::errors::SolverError;

/// Runtime policy limiting accepted board sizes.
///
/// The search itself handles any size; the bounds exist to keep the rendered
/// output file to a manageable volume and are enforced before a search
/// starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeBounds {
    pub min: usize,
    pub max: usize,
}

impl SizeBounds {
    pub fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// # Errors
    ///
    /// Returns an error if `n` falls outside the accepted range.
    pub fn validate(&self, n: usize) -> Result<(), SolverError> {
        debug!("Validating board size {} against {}..={}", n, self.min, self.max);

        if n < self.min || n > self.max {
            warn!("Rejecting out-of-bounds board size {}", n);
            return Err(SolverError::SizeOutOfBounds {
                n,
                min: self.min,
                max: self.max,
            });
        }

        Ok(())
    }
}

impl Default for SizeBounds {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_SIZE,
            max: DEFAULT_MAX_SIZE,
        }
    }
}
