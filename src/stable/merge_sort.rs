use std::cmp::Ordering;

use crate::observer::{StepEvent, StepKind, StepObserver};
use crate::{Algorithm, SortError, SortResult};

sort_impl!("merge_sort_top_down_stable");

const CATEGORY: Algorithm = Algorithm::Merge;
const LABEL: &str = "MERGE SORT";
const DONE_LABEL: &str = "MERGE SORT - COMPLETED";

/// Sorts the slice with a top-down recursive merge sort.
///
/// This sort is stable (i.e., does not reorder equal elements) and *O*(*n* \* log(*n*))
/// worst-case.
///
/// # Current implementation
///
/// Each merge copies its two halves into freshly allocated scratch buffers and merges them back
/// into `arr`. The buffers are dropped before the merge returns, so peak auxiliary memory is
/// bounded by *n*. Allocation is fallible, if a scratch buffer can not be reserved the call fails
/// with [`SortError::AllocationFailure`] and the range being merged is left untouched.
#[inline]
pub fn sort<T, O>(arr: &mut [T], observer: &mut O) -> SortResult<()>
where
    T: Ord + Clone,
    O: StepObserver<T> + ?Sized,
{
    merge_sort(arr, &mut |a, b| a.lt(b), observer)
}

/// Sorts the slice with a comparator function, see [`sort`].
#[inline]
pub fn sort_by<T, F, O>(arr: &mut [T], mut compare: F, observer: &mut O) -> SortResult<()>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
    O: StepObserver<T> + ?Sized,
{
    merge_sort(arr, &mut |a, b| compare(a, b) == Ordering::Less, observer)
}

/// Merges the sorted inclusive ranges `left..=mid` and `mid + 1..=right` of `v`.
///
/// Returns the number of elements written back into `v`, which is always the length of the
/// merged range.
///
/// Panics if `left > mid`, `mid >= right` or `right >= v.len()`.
pub fn merge<T, O>(
    v: &mut [T],
    left: usize,
    mid: usize,
    right: usize,
    observer: &mut O,
) -> SortResult<usize>
where
    T: Ord + Clone,
    O: StepObserver<T> + ?Sized,
{
    merge_ranges(v, left, mid, right, &mut |a, b| a.lt(b), observer)
}

fn merge_sort<T, F, O>(v: &mut [T], is_less: &mut F, observer: &mut O) -> SortResult<()>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
    O: StepObserver<T> + ?Sized,
{
    if v.len() >= 2 {
        merge_sort_range(v, 0, v.len() - 1, is_less, observer)?;
    }

    observer.observe(StepEvent::new(v, CATEGORY, DONE_LABEL, StepKind::Done));
    Ok(())
}

// Recursion depth is log2(len), the halves are always balanced.
fn merge_sort_range<T, F, O>(
    v: &mut [T],
    left: usize,
    right: usize,
    is_less: &mut F,
    observer: &mut O,
) -> SortResult<()>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
    O: StepObserver<T> + ?Sized,
{
    if left >= right {
        return Ok(());
    }

    let mid = left + (right - left) / 2;

    merge_sort_range(v, left, mid, is_less, observer)?;
    merge_sort_range(v, mid + 1, right, is_less, observer)?;

    observer.observe(StepEvent::new(v, CATEGORY, LABEL, StepKind::Range).at(left, right));
    merge_ranges(v, left, mid, right, is_less, observer)?;

    Ok(())
}

fn merge_ranges<T, F, O>(
    v: &mut [T],
    left: usize,
    mid: usize,
    right: usize,
    is_less: &mut F,
    observer: &mut O,
) -> SortResult<usize>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
    O: StepObserver<T> + ?Sized,
{
    assert!(left <= mid && mid < right && right < v.len());

    // Both halves are copied out before anything is written back, a failed allocation leaves
    // `v` as it was.
    let lo = scratch(&v[left..=mid])?;
    let hi = scratch(&v[(mid + 1)..=right])?;

    let mut i = 0;
    let mut j = 0;
    let mut k = left;

    while i < lo.len() && j < hi.len() {
        observer.observe(
            StepEvent::new(v, CATEGORY, LABEL, StepKind::Compare).at(left + i, mid + 1 + j),
        );

        // Take from the right side only if strictly less, ties keep the left element first.
        if is_less(&hi[j], &lo[i]) {
            v[k] = hi[j].clone();
            j += 1;
        } else {
            v[k] = lo[i].clone();
            i += 1;
        }
        k += 1;
    }

    for elem in lo[i..].iter().chain(&hi[j..]) {
        v[k] = elem.clone();
        k += 1;
    }

    Ok(k - left)
}

fn scratch<T: Clone>(src: &[T]) -> SortResult<Vec<T>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(src.len())
        .map_err(|_| SortError::AllocationFailure {
            requested: src.len(),
        })?;
    buf.extend_from_slice(src);

    Ok(buf)
}
