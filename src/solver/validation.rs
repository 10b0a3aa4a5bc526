/// Check the most recently placed queen against every earlier column.
///
/// `rows` is the placement stack: index = column, value = occupied row, with
/// the candidate queen on top. All entries below the top are assumed to be
/// pairwise non-attacking already, so only the top queen is examined. The
/// caller guarantees the top row is in bounds.
///
/// Columns never conflict by construction, since each column index appears
/// at most once in the stack.
pub fn last_queen_is_safe(rows: &[usize]) -> bool {
    let Some((&row, earlier)) = rows.split_last() else {
        return true;
    };
    let col = earlier.len();

    earlier
        .iter()
        .enumerate()
        .all(|(i, &r)| r != row && row.abs_diff(r) != col - i)
}
