use thiserror::Error;

/// Errors that can occur before a search starts
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    #[error("Board size must satisfy {min} <= n <= {max}, got {n}")]
    SizeOutOfBounds { n: usize, min: usize, max: usize },
}
