use std::fs;

use crate::output::{
    solution_filename, write_solutions, ConsoleProgress, Progress, SilentProgress,
    SolutionWriter,
};

/// Progress double recording every ordinal it is notified of.
struct RecordingProgress {
    seen: Vec<u64>,
}

impl Progress for RecordingProgress {
    fn on_solution(&mut self, ordinal: u64) {
        self.seen.push(ordinal);
    }
}

#[test]
fn test_solution_filename() {
    assert_eq!(solution_filename(8), "8-Queen.txt");
    assert_eq!(solution_filename(14), "14-Queen.txt");
}

#[test]
fn test_writer_records_solutions_in_order() {
    let mut writer = SolutionWriter::new(Vec::new());
    let mut progress = RecordingProgress { seen: Vec::new() };

    let total = write_solutions(4, &mut writer, &mut progress).unwrap();
    assert_eq!(total, 2);
    assert_eq!(progress.seen, vec![1, 2]);

    let text = String::from_utf8(writer.into_inner()).unwrap();
    assert!(text.contains("Solution #1 to the 4-Queen Puzzle:"));
    assert!(text.contains("Solution #2 to the 4-Queen Puzzle:"));

    let first = text.find("Solution #1").unwrap();
    let second = text.find("Solution #2").unwrap();
    assert!(first < second);
}

#[test]
fn test_writer_counter_is_monotonic() {
    let mut writer = SolutionWriter::new(Vec::new());
    assert_eq!(writer.total(), 0);
    assert_eq!(writer.record(4, &[1, 3, 0, 2]).unwrap(), 1);
    assert_eq!(writer.record(4, &[2, 0, 3, 1]).unwrap(), 2);
    assert_eq!(writer.total(), 2);
}

#[test]
fn test_unsolvable_size_leaves_sink_empty() {
    let mut writer = SolutionWriter::new(Vec::new());
    let total = write_solutions(3, &mut writer, &mut SilentProgress).unwrap();
    assert_eq!(total, 0);
    assert!(writer.into_inner().is_empty());
}

#[test]
fn test_console_progress_ticks_every_interval() {
    // Board size 2 gives an interval of 4 solutions per tick.
    let mut progress = ConsoleProgress::with_sink(2, Vec::new());
    for ordinal in 1..=8 {
        progress.on_solution(ordinal);
    }
    assert_eq!(progress.into_sink(), b"..");
}

#[test]
fn test_file_sink_writes_named_file() {
    let dir = tempfile::tempdir().unwrap();

    let (mut writer, path) = SolutionWriter::create_in(dir.path(), 5).unwrap();
    let total = write_solutions(5, &mut writer, &mut SilentProgress).unwrap();
    drop(writer);

    assert_eq!(total, 10);
    assert_eq!(path, dir.path().join("5-Queen.txt"));

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text.matches("to the 5-Queen Puzzle:").count(), 10);
    assert!(text.contains("Solution #10 "));
}

#[test]
fn test_create_in_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("no-such-dir");

    let result = SolutionWriter::create_in(&missing, 4);
    assert!(result.is_err());
}
