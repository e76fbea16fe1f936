use std::cmp::Ordering;

use crate::observer::{StepEvent, StepKind, StepObserver};
use crate::{Algorithm, SortResult};

sort_impl!("quick_sort_lomuto_unstable");

const CATEGORY: Algorithm = Algorithm::Quick;
const LABEL: &str = "QUICK SORT";
const DONE_LABEL: &str = "QUICK SORT - COMPLETED";

/// Sorts the slice with quicksort using the Lomuto partition scheme.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place, *O*(*n* \* log(*n*)) on
/// average and *O*(*n*^2) worst-case.
///
/// # Current implementation
///
/// The pivot is always the last element of the range, so already sorted and reverse sorted input
/// hit the quadratic case. Only the shorter side of each partition is recursed into, the longer
/// side is handled by the loop, which keeps the stack depth at *O*(log(*n*)) regardless of the
/// pivot quality.
#[inline]
pub fn sort<T, O>(arr: &mut [T], observer: &mut O) -> SortResult<()>
where
    T: Ord,
    O: StepObserver<T> + ?Sized,
{
    quick_sort(arr, &mut |a, b| a.lt(b), observer);
    Ok(())
}

/// Sorts the slice with a comparator function, see [`sort`].
#[inline]
pub fn sort_by<T, F, O>(arr: &mut [T], mut compare: F, observer: &mut O) -> SortResult<()>
where
    F: FnMut(&T, &T) -> Ordering,
    O: StepObserver<T> + ?Sized,
{
    quick_sort(arr, &mut |a, b| compare(a, b) == Ordering::Less, observer);
    Ok(())
}

/// Partitions the inclusive range `low..=high` of `v` around the pivot `v[high]`.
///
/// Returns the final position `p` of the pivot. When the call returns all elements in `low..p`
/// are less than the pivot and all elements in `p + 1..=high` are greater or equal to it.
///
/// Panics if `low > high` or `high >= v.len()`.
pub fn partition<T, O>(v: &mut [T], low: usize, high: usize, observer: &mut O) -> usize
where
    T: Ord,
    O: StepObserver<T> + ?Sized,
{
    partition_lomuto(v, low, high, &mut |a, b| a.lt(b), observer)
}

fn quick_sort<T, F, O>(v: &mut [T], is_less: &mut F, observer: &mut O)
where
    F: FnMut(&T, &T) -> bool,
    O: StepObserver<T> + ?Sized,
{
    if v.len() >= 2 {
        quick_sort_range(v, 0, v.len() - 1, is_less, observer);
    }

    observer.observe(StepEvent::new(v, CATEGORY, DONE_LABEL, StepKind::Done));
}

fn quick_sort_range<T, F, O>(
    v: &mut [T],
    mut low: usize,
    mut high: usize,
    is_less: &mut F,
    observer: &mut O,
) where
    F: FnMut(&T, &T) -> bool,
    O: StepObserver<T> + ?Sized,
{
    while low < high {
        let pivot_pos = partition_lomuto(v, low, high, is_less, observer);

        let left_len = pivot_pos - low;
        let right_len = high - pivot_pos;

        if left_len < right_len {
            if left_len > 1 {
                quick_sort_range(v, low, pivot_pos - 1, is_less, observer);
            }
            low = pivot_pos + 1;
        } else {
            if right_len > 1 {
                quick_sort_range(v, pivot_pos + 1, high, is_less, observer);
            }
            // `low < high` and `left_len >= right_len` imply `left_len >= 1`.
            high = pivot_pos - 1;
        }
    }
}

fn partition_lomuto<T, F, O>(
    v: &mut [T],
    low: usize,
    high: usize,
    is_less: &mut F,
    observer: &mut O,
) -> usize
where
    F: FnMut(&T, &T) -> bool,
    O: StepObserver<T> + ?Sized,
{
    assert!(low <= high && high < v.len());

    // Next slot of the less-than prefix, one past the classic `i` boundary.
    let mut boundary = low;

    for j in low..high {
        observer.observe(StepEvent::new(v, CATEGORY, LABEL, StepKind::Compare).at(j, high));
        if is_less(&v[j], &v[high]) {
            v.swap(boundary, j);
            observer.observe(StepEvent::new(v, CATEGORY, LABEL, StepKind::Swap).at(boundary, j));
            boundary += 1;
        }
    }

    v.swap(boundary, high);

    boundary
}
