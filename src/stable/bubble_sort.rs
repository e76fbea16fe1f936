use std::cmp::Ordering;

use crate::observer::{StepEvent, StepKind, StepObserver};
use crate::{Algorithm, SortResult};

sort_impl!("bubble_sort_stable");

const CATEGORY: Algorithm = Algorithm::Bubble;
const LABEL: &str = "BUBBLE SORT";
const DONE_LABEL: &str = "BUBBLE SORT - COMPLETED";

/// Sorts the slice by repeatedly swapping adjacent out-of-order pairs.
///
/// This sort is stable (i.e., does not reorder equal elements), in-place and performs exactly
/// *n* \* (*n* - 1) / 2 comparisons for every input. There is no early exit when a pass makes no
/// swap, every pass walks the full unsorted prefix.
#[inline]
pub fn sort<T, O>(arr: &mut [T], observer: &mut O) -> SortResult<()>
where
    T: Ord,
    O: StepObserver<T> + ?Sized,
{
    bubble_sort(arr, &mut |a, b| a.lt(b), observer);
    Ok(())
}

/// Sorts the slice with a comparator function, see [`sort`].
#[inline]
pub fn sort_by<T, F, O>(arr: &mut [T], mut compare: F, observer: &mut O) -> SortResult<()>
where
    F: FnMut(&T, &T) -> Ordering,
    O: StepObserver<T> + ?Sized,
{
    bubble_sort(arr, &mut |a, b| compare(a, b) == Ordering::Less, observer);
    Ok(())
}

fn bubble_sort<T, F, O>(v: &mut [T], is_less: &mut F, observer: &mut O)
where
    F: FnMut(&T, &T) -> bool,
    O: StepObserver<T> + ?Sized,
{
    let len = v.len();

    for i in 0..len.saturating_sub(1) {
        for j in 0..(len - i - 1) {
            observer.observe(StepEvent::new(v, CATEGORY, LABEL, StepKind::Compare).at(j, j + 1));
            // Strictly greater only, equal neighbours never move past each other.
            if is_less(&v[j + 1], &v[j]) {
                v.swap(j, j + 1);
                observer.observe(StepEvent::new(v, CATEGORY, LABEL, StepKind::Swap).at(j, j + 1));
            }
        }
    }

    observer.observe(StepEvent::new(v, CATEGORY, DONE_LABEL, StepKind::Done));
}
