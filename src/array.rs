//! Small helpers over integer sequences.

use std::fmt::Write as _;

use crate::{SortError, SortResult};

/// Number of elements per printed row.
const ROW_LEN: usize = 10;

/// Copies `src` into the front of `dst`.
///
/// Panics if `dst` is shorter than `src`.
pub fn copy_into<T: Copy>(src: &[T], dst: &mut [T]) {
    dst[..src.len()].copy_from_slice(src);
}

/// Rejects the lengths no sort run should be requested for.
pub fn validate_len(len: usize) -> SortResult<()> {
    if len == 0 {
        return Err(SortError::invalid_input(
            "array length must be a positive integer",
        ));
    }

    Ok(())
}

pub fn is_sorted<T: Ord>(v: &[T]) -> bool {
    v.windows(2).all(|w| w[0] <= w[1])
}

/// Checks whether `a` and `b` hold the same multiset of elements.
pub fn is_permutation<T: Ord + Clone>(a: &[T], b: &[T]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort_unstable();
    b.sort_unstable();

    a == b
}

/// Formats `v` as rows of ten `[%3d]` cells, each row preceded by a line break.
pub fn format_array(v: &[i32]) -> String {
    let mut out = String::with_capacity(v.len() * 6 + v.len() / ROW_LEN + 1);

    for (i, val) in v.iter().enumerate() {
        if i % ROW_LEN == 0 {
            out.push('\n');
        }
        // Writing into a String can't fail.
        let _ = write!(out, "[{val:3}] ");
    }
    out.push('\n');

    out
}
