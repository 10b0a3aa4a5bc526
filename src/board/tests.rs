use crate::board::{render_solution, Board};
use crate::solver::SolutionIter;

/// Recover the placement stack from a rendered board by locating the
/// queen marker in each 3-character cell.
fn parse_placements(rendered: &str, size: usize) -> Vec<usize> {
    let content_lines: Vec<&str> = rendered
        .lines()
        .filter(|line| line.starts_with('|') && !line.contains("---"))
        .collect();
    assert_eq!(content_lines.len(), size, "expected {} content rows", size);

    let mut rows = vec![usize::MAX; size];
    for (row, line) in content_lines.iter().enumerate() {
        for col in 0..size {
            if &line[col * 4 + 1..col * 4 + 4] == " Q " {
                assert_eq!(rows[col], usize::MAX, "two queens in column {}", col);
                rows[col] = row;
            }
        }
    }
    rows
}

#[test]
fn test_board_from_placements() {
    let board = Board::from_placements(4, &[1, 3, 0, 2]);
    assert_eq!(board.size(), 4);

    assert!(board.has_queen(0, 1));
    assert!(board.has_queen(1, 3));
    assert!(board.has_queen(2, 0));
    assert!(board.has_queen(3, 2));

    assert!(!board.has_queen(0, 0));
    assert!(!board.has_queen(3, 3));
}

#[test]
fn test_render_single_queen_exact() {
    let rendered = render_solution(1, 1, &[0]);
    assert_eq!(
        rendered,
        "\nSolution #1 to the 1-Queen Puzzle:\n|---|\n| Q |\n|---|\n\n"
    );
}

#[test]
fn test_render_block_structure() {
    let rendered = render_solution(4, 7, &[1, 3, 0, 2]);

    assert!(rendered.contains("Solution #7 to the 4-Queen Puzzle:"));

    let border_rows = rendered
        .lines()
        .filter(|line| line.contains("---"))
        .count();
    assert_eq!(border_rows, 5);

    for line in rendered.lines().filter(|line| line.contains("---")) {
        assert_eq!(line, "|---|---|---|---|");
    }

    let queen_cells = rendered.matches(" Q ").count();
    assert_eq!(queen_cells, 4);
}

#[test]
fn test_render_round_trip() {
    let rows = vec![2, 0, 3, 1];
    let rendered = render_solution(4, 2, &rows);
    assert_eq!(parse_placements(&rendered, 4), rows);
}

#[test]
fn test_render_round_trip_all_six_queen_solutions() {
    for (i, rows) in SolutionIter::new(6).enumerate() {
        let rendered = render_solution(6, (i + 1) as u64, &rows);
        assert_eq!(parse_placements(&rendered, 6), rows);
    }
}
