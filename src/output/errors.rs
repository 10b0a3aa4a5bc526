use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors from the solution sink. Any of these aborts the run: solutions
/// must never be dropped silently.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Cannot create solution file {}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Cannot write to solution sink")]
    Write(#[from] io::Error),
}
