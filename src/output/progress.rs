use std::io::{self, Write};

/// Liveness side channel notified once per solution found.
///
/// Implementations must stay observational: they may not influence the
/// search or the solution sink.
pub trait Progress {
    fn on_solution(&mut self, ordinal: u64);
}

/// Prints a flushed tick mark once per `size²` solutions, so the operator
/// can tell a long run is still working.
pub struct ConsoleProgress<W: Write = io::Stdout> {
    interval: u64,
    sink: W,
}

impl ConsoleProgress {
    pub fn for_board(size: usize) -> Self {
        Self::with_sink(size, io::stdout())
    }
}

impl<W: Write> ConsoleProgress<W> {
    pub fn with_sink(size: usize, sink: W) -> Self {
        Self {
            interval: ((size * size) as u64).max(1),
            sink,
        }
    }

    pub fn into_sink(self) -> W {
        self.sink
    }
}

impl<W: Write> Progress for ConsoleProgress<W> {
    fn on_solution(&mut self, ordinal: u64) {
        if ordinal % self.interval == 0 {
            // Tick failures must not disturb the search or the sink.
            let _ = self.sink.write_all(b".");
            let _ = self.sink.flush();
        }
    }
}

/// No-op progress for library callers and tests
pub struct SilentProgress;

impl Progress for SilentProgress {
    fn on_solution(&mut self, _ordinal: u64) {}
}
