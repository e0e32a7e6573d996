//! The conflict test applied to every candidate placement.

/// Returns true iff the queen tentatively placed at row `k` attacks none of
/// the queens already placed in rows `0..k`.
///
/// Two queens attack each other when they share a column or a diagonal; rows
/// cannot clash because the assignment holds one column per row. The check
/// is a linear scan over the earlier rows and reads nothing beyond row `k`,
/// so stale values left behind by backtracking are never consulted.
pub(crate) fn is_safe(assignment: &[u32], k: usize) -> bool {
    let candidate = assignment[k];

    for (row, &column) in assignment.iter().enumerate().take(k) {
        if column == candidate || column.abs_diff(candidate) as usize == k - row {
            return false;
        }
    }

    true
}
