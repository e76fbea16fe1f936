use std::cmp::Ordering;

use crate::observer::{StepEvent, StepKind, StepObserver};
use crate::{Algorithm, SortResult};

sort_impl!("selection_sort_unstable");

const CATEGORY: Algorithm = Algorithm::Selection;
const LABEL: &str = "SELECTION SORT";
const DONE_LABEL: &str = "SELECTION SORT - COMPLETED";

/// Sorts the slice by repeatedly selecting the minimum of the unsorted tail.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place and *O*(*n*^2) comparisons
/// in every case. Every comparison, every swap and the completion are reported to `observer`.
#[inline]
pub fn sort<T, O>(arr: &mut [T], observer: &mut O) -> SortResult<()>
where
    T: Ord,
    O: StepObserver<T> + ?Sized,
{
    selection_sort(arr, &mut |a, b| a.lt(b), observer);
    Ok(())
}

/// Sorts the slice with a comparator function, see [`sort`].
#[inline]
pub fn sort_by<T, F, O>(arr: &mut [T], mut compare: F, observer: &mut O) -> SortResult<()>
where
    F: FnMut(&T, &T) -> Ordering,
    O: StepObserver<T> + ?Sized,
{
    selection_sort(arr, &mut |a, b| compare(a, b) == Ordering::Less, observer);
    Ok(())
}

fn selection_sort<T, F, O>(v: &mut [T], is_less: &mut F, observer: &mut O)
where
    F: FnMut(&T, &T) -> bool,
    O: StepObserver<T> + ?Sized,
{
    let len = v.len();

    for i in 0..len.saturating_sub(1) {
        let mut min_idx = i;
        for j in (i + 1)..len {
            observer.observe(StepEvent::new(v, CATEGORY, LABEL, StepKind::Compare).at(j, min_idx));
            if is_less(&v[j], &v[min_idx]) {
                min_idx = j;
            }
        }

        // The swap is reported even when the minimum is already in place.
        v.swap(i, min_idx);
        observer.observe(StepEvent::new(v, CATEGORY, LABEL, StepKind::Swap).at(i, min_idx));
    }

    observer.observe(StepEvent::new(v, CATEGORY, DONE_LABEL, StepKind::Done));
}
