//! Row operations on a sheet snapshot
//!
//! All operations are copy-on-write: they read a slice and return a new
//! `Vec`, so a caller that keeps earlier snapshots for undo never sees them
//! change. Indices are 0-based; out-of-range indices are clamped to the
//! slice the way `Array.prototype.splice` clamps them.

/// Insert `to_insert` before position `index`. `index == rows.len()` appends.
pub fn insert_rows<T: Clone>(rows: &[T], index: usize, to_insert: &[T]) -> Vec<T> {
    let index = index.min(rows.len());
    let mut next = Vec::with_capacity(rows.len() + to_insert.len());
    next.extend_from_slice(&rows[..index]);
    next.extend_from_slice(to_insert);
    next.extend_from_slice(&rows[index..]);
    next
}

/// Take out the half-open slice `[src_start, src_end)` and put it back at
/// `dst_start`, measured in the array left after the removal.
///
/// With `dst_start == None` the removed rows are dropped.
pub fn move_rows<T: Clone>(
    rows: &[T],
    src_start: usize,
    src_end: usize,
    dst_start: Option<usize>,
) -> Vec<T> {
    let src_start = src_start.min(rows.len());
    let src_end = src_end.clamp(src_start, rows.len());

    let mut remaining = Vec::with_capacity(rows.len());
    remaining.extend_from_slice(&rows[..src_start]);
    remaining.extend_from_slice(&rows[src_end..]);

    match dst_start {
        Some(dst) => insert_rows(&remaining, dst, &rows[src_start..src_end]),
        None => remaining,
    }
}

/// Remove the half-open slice `[start, end)`.
pub fn del_rows<T: Clone>(rows: &[T], start: usize, end: usize) -> Vec<T> {
    move_rows(rows, start, end, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<&'static str> {
        vec!["a", "b", "c", "d", "e"]
    }

    #[test]
    fn test_insert_rows() {
        assert_eq!(insert_rows(&rows(), 1, &["x", "y"]), vec!["a", "x", "y", "b", "c", "d", "e"]);
        assert_eq!(insert_rows(&rows(), 0, &["x"]), vec!["x", "a", "b", "c", "d", "e"]);
        assert_eq!(insert_rows(&rows(), 5, &["x"]), vec!["a", "b", "c", "d", "e", "x"]);
        // Past the end behaves like append
        assert_eq!(insert_rows(&rows(), 99, &["x"]), vec!["a", "b", "c", "d", "e", "x"]);
        assert_eq!(insert_rows::<&str>(&[], 0, &[]), Vec::<&str>::new());
    }

    #[test]
    fn test_move_rows_forward_and_back() {
        // b,c taken out -> a,d,e; put back at index 2 -> a,d,b,c,e
        assert_eq!(move_rows(&rows(), 1, 3, Some(2)), vec!["a", "d", "b", "c", "e"]);
        // d,e to the top
        assert_eq!(move_rows(&rows(), 3, 5, Some(0)), vec!["d", "e", "a", "b", "c"]);
        // b to the end of a,c,d,e
        assert_eq!(move_rows(&rows(), 1, 2, Some(4)), vec!["a", "c", "d", "e", "b"]);
    }

    #[test]
    fn test_move_to_own_position_is_noop() {
        for start in 0..5 {
            for end in start..=5 {
                assert_eq!(move_rows(&rows(), start, end, Some(start)), rows());
            }
        }
    }

    #[test]
    fn test_del_rows() {
        assert_eq!(del_rows(&rows(), 1, 3), vec!["a", "d", "e"]);
        assert_eq!(del_rows(&rows(), 0, 5), Vec::<&str>::new());
        assert_eq!(del_rows(&rows(), 2, 2), rows());
        assert_eq!(del_rows(&rows(), 4, 99), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_input_is_untouched() {
        let original = rows();
        let _ = insert_rows(&original, 2, &["x"]);
        let _ = move_rows(&original, 0, 2, Some(3));
        let _ = del_rows(&original, 0, 5);
        assert_eq!(original, rows());
    }
}
