use crate::board::grid::Board;

/// Render one complete placement as an ASCII board block.
///
/// The block is a header naming the solution ordinal and board size,
/// followed by the board itself: `size + 1` border rows interleaved with
/// `size` content rows of 3-character-wide cells, each cell holding a
/// queen marker or blanks. A blank line closes the block so consecutive
/// solutions stay readable when appended to one file.
pub fn render_solution(size: usize, ordinal: u64, rows: &[usize]) -> String {
    let board = Board::from_placements(size, rows);
    let mut out = String::with_capacity((4 * size + 2) * (2 * size + 2));

    out.push_str(&format!(
        "\nSolution #{} to the {}-Queen Puzzle:\n",
        ordinal, size
    ));

    push_border(&mut out, size);
    for row in 0..board.size() {
        for col in 0..board.size() {
            out.push('|');
            out.push_str(if board.has_queen(col, row) { " Q " } else { "   " });
        }
        out.push_str("|\n");
        push_border(&mut out, size);
    }
    out.push('\n');

    out
}

fn push_border(out: &mut String, size: usize) {
    for _ in 0..size {
        out.push_str("|---");
    }
    out.push_str("|\n");
}
