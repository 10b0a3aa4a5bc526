use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::board::render_solution;
use crate::output::errors::OutputError;
use crate::output::progress::Progress;
use crate::solver::SolutionIter;

/// Name of the per-run solution file for a board size.
pub fn solution_filename(size: usize) -> String {
    format!("{}-Queen.txt", size)
}

/// Append-only sink receiving rendered solutions in discovery order.
///
/// The writer owns the solution counter: each recorded placement gets the
/// next ordinal, so the ordinals in the sink always match discovery order.
/// Generic over `io::Write` so tests can capture output in memory.
pub struct SolutionWriter<W: Write> {
    sink: W,
    total: u64,
}

impl SolutionWriter<BufWriter<File>> {
    /// Open the buffered file sink `"{size}-Queen.txt"` inside `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created.
    pub fn create_in(dir: &Path, size: usize) -> Result<(Self, PathBuf), OutputError> {
        let path = dir.join(solution_filename(size));
        debug!("Opening solution file {}", path.display());

        let file = File::create(&path).map_err(|source| OutputError::Create {
            path: path.clone(),
            source,
        })?;

        Ok((Self::new(BufWriter::new(file)), path))
    }
}

impl<W: Write> SolutionWriter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink, total: 0 }
    }

    /// Render one placement and append it under the next solution ordinal.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink write fails; the run must then abort
    /// rather than continue with a gap in the solution sequence.
    pub fn record(&mut self, size: usize, rows: &[usize]) -> Result<u64, OutputError> {
        self.total += 1;
        let block = render_solution(size, self.total, rows);
        self.sink.write_all(block.as_bytes())?;
        Ok(self.total)
    }

    /// Number of solutions recorded so far
    pub fn total(&self) -> u64 {
        self.total
    }

    /// # Errors
    ///
    /// Returns an error if buffered output cannot be flushed to the sink.
    pub fn flush(&mut self) -> Result<(), OutputError> {
        self.sink.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}

/// Run the search for `size` and stream every solution into the writer,
/// notifying the progress channel after each one.
///
/// # Errors
///
/// Returns an error as soon as a sink write fails.
pub fn write_solutions<W: Write, P: Progress>(
    size: usize,
    writer: &mut SolutionWriter<W>,
    progress: &mut P,
) -> Result<u64, OutputError> {
    for rows in SolutionIter::new(size) {
        let ordinal = writer.record(size, &rows)?;
        progress.on_solution(ordinal);
    }
    writer.flush()?;

    info!("Recorded {} solutions for size {}", writer.total(), size);
    Ok(writer.total())
}
