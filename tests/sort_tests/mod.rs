//! Shared correctness suite, stamped onto every sort with `instantiate_sort_tests!`.

use std::cmp::Ordering;
use std::fmt::Debug;

use rand::rngs::StdRng;
use rand::SeedableRng;

use sort_viz_rs::array::{is_permutation, is_sorted};
use sort_viz_rs::patterns;
use sort_viz_rs::{NoopObserver, RecordingObserver, Sort, StepKind};

#[cfg(not(feature = "large_test_sizes"))]
pub const TEST_SIZES: [usize; 17] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 15, 16, 17, 20, 31, 64, 100,
];

#[cfg(feature = "large_test_sizes")]
pub const TEST_SIZES: [usize; 20] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 15, 16, 17, 20, 31, 64, 100, 200, 500, 1_000,
];

fn rng() -> StdRng {
    StdRng::seed_from_u64(patterns::random_init_seed())
}

fn sort_and_check<S: Sort>(input: &[i32]) {
    let mut v = input.to_vec();
    S::sort(&mut v, &mut NoopObserver).unwrap();

    assert!(is_sorted(&v), "{} left {v:?} unsorted", S::name());
    assert!(is_permutation(input, &v), "{} lost elements", S::name());
}

fn test_pattern<S: Sort>(mut pattern_fn: impl FnMut(usize) -> Vec<i32>) {
    for len in TEST_SIZES {
        sort_and_check::<S>(&pattern_fn(len));
    }
}

pub fn basic<S: Sort>() {
    sort_and_check::<S>(&[]);
    sort_and_check::<S>(&[77]);
    sort_and_check::<S>(&[2, 3]);
    sort_and_check::<S>(&[3, 2]);
    sort_and_check::<S>(&[2, 3, 6]);
    sort_and_check::<S>(&[2, 3, 99, 6]);
    sort_and_check::<S>(&[2, 7709, 400, 90932]);
    sort_and_check::<S>(&[15, -1, 3, -1, -3, -1, 7]);
}

pub fn fixed_example<S: Sort>() {
    let mut v = vec![5, 3, 8, 1, 9, 2];
    S::sort(&mut v, &mut NoopObserver).unwrap();
    assert_eq!(v, [1, 2, 3, 5, 8, 9]);
}

pub fn random<S: Sort>() {
    let mut rng = rng();
    test_pattern::<S>(|len| patterns::random_uniform(len, i32::MIN..=i32::MAX, &mut rng));
}

pub fn random_narrow<S: Sort>() {
    let mut rng = rng();
    test_pattern::<S>(|len| patterns::random_uniform(len, 0..=4, &mut rng));
}

pub fn random_zipf<S: Sort>() {
    let mut rng = rng();
    test_pattern::<S>(|len| patterns::random_zipf(len, 1.0, &mut rng));
}

pub fn ascending<S: Sort>() {
    test_pattern::<S>(patterns::ascending);
}

pub fn descending<S: Sort>() {
    test_pattern::<S>(patterns::descending);
}

pub fn all_equal<S: Sort>() {
    test_pattern::<S>(patterns::all_equal);
}

pub fn extremes<S: Sort>() {
    sort_and_check::<S>(&[i32::MAX, i32::MIN, 0, i32::MAX, i32::MIN]);
}

pub fn sorted_input_unchanged<S: Sort>() {
    let mut rng = rng();
    for len in TEST_SIZES {
        let mut expected = patterns::random_uniform(len, -50..=50, &mut rng);
        expected.sort();

        let mut v = expected.clone();
        S::sort(&mut v, &mut NoopObserver).unwrap();
        assert_eq!(v, expected);

        // A second pass over its own output changes nothing either.
        S::sort(&mut v, &mut NoopObserver).unwrap();
        assert_eq!(v, expected);
    }
}

pub fn observer_does_not_change_result<S: Sort>() {
    let mut rng = rng();
    let input = patterns::random_uniform(40, 1..=50, &mut rng);

    let mut quiet = input.clone();
    S::sort(&mut quiet, &mut NoopObserver).unwrap();

    let mut observed = input.clone();
    let mut recorder = RecordingObserver::new();
    S::sort(&mut observed, &mut recorder).unwrap();

    assert_eq!(quiet, observed);
    assert!(recorder.count(StepKind::Compare) > 0);

    // Frames keep the full length. Merge compare frames show a half written range, so only
    // frames taken between steps must hold a permutation of the input.
    for frame in recorder.frames() {
        assert_eq!(frame.snapshot.len(), input.len());
        if frame.kind != StepKind::Compare {
            assert!(is_permutation(&frame.snapshot, &input));
        }
    }
}

pub fn completion_frame<S: Sort>() {
    for input in [vec![], vec![4], vec![9, 1, 5, 1]] {
        let mut v = input.clone();
        let mut recorder = RecordingObserver::new();
        S::sort(&mut v, &mut recorder).unwrap();

        let last = recorder.last().unwrap();
        assert_eq!(last.kind, StepKind::Done);
        assert_eq!((last.primary, last.secondary), (None, None));
        assert!(last.label.ends_with("COMPLETED"));
        assert_eq!(last.snapshot, v);
        assert_eq!(recorder.count(StepKind::Done), 1);
    }
}

pub fn highlighted_indices_in_bounds<S: Sort>() {
    let mut v = patterns::descending(25);
    let mut recorder = RecordingObserver::new();
    S::sort(&mut v, &mut recorder).unwrap();

    for frame in recorder.frames() {
        for idx in [frame.primary, frame.secondary].into_iter().flatten() {
            assert!(idx < frame.snapshot.len());
        }
    }
}

pub fn sort_by_reverse<S: Sort>() {
    let mut rng = rng();
    for len in TEST_SIZES {
        let input = patterns::random_uniform(len, -1_000..=1_000, &mut rng);
        let mut v = input.clone();
        S::sort_by(&mut v, |a, b| b.cmp(a), &mut NoopObserver).unwrap();

        let mut expected = input;
        expected.sort_by(|a, b| b.cmp(a));
        assert_eq!(v, expected);
    }
}

/// A value that only compares by `key`, `id` records the input position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keyed {
    pub key: i32,
    pub id: usize,
}

fn keyed(keys: &[i32]) -> Vec<Keyed> {
    keys.iter()
        .enumerate()
        .map(|(id, &key)| Keyed { key, id })
        .collect()
}

fn by_key(a: &Keyed, b: &Keyed) -> Ordering {
    a.key.cmp(&b.key)
}

fn check_stable<T: Debug>(sorted: &[Keyed], ctx: &T) {
    for w in sorted.windows(2) {
        assert!(w[0].key <= w[1].key, "unsorted {ctx:?}");
        if w[0].key == w[1].key {
            assert!(w[0].id < w[1].id, "equal keys reordered {ctx:?}");
        }
    }
}

pub fn stability<S: Sort>() {
    let mut rng = rng();
    for len in TEST_SIZES {
        let keys = patterns::random_uniform(len, 0..=len as i32 / 4, &mut rng);
        let mut v = keyed(&keys);
        S::sort_by(&mut v, by_key, &mut NoopObserver).unwrap();
        check_stable(&v, &keys);
    }
}

pub fn stability_all_equal<S: Sort>() {
    let mut v = keyed(&[3; 50]);
    S::sort_by(&mut v, by_key, &mut NoopObserver).unwrap();

    let ids = v.iter().map(|k| k.id).collect::<Vec<_>>();
    assert_eq!(ids, (0..50).collect::<Vec<_>>());
}

macro_rules! instantiate_sort_test_inner {
    ($prefix:ident, $sort_impl:ty, $test_fn_name:ident) => {
        paste::paste! {
            #[test]
            fn [<$prefix _ $test_fn_name>]() {
                sort_tests::$test_fn_name::<$sort_impl>();
            }
        }
    };
}

macro_rules! instantiate_sort_tests {
    ($prefix:ident, $sort_impl:ty) => {
        instantiate_sort_test_inner!($prefix, $sort_impl, basic);
        instantiate_sort_test_inner!($prefix, $sort_impl, fixed_example);
        instantiate_sort_test_inner!($prefix, $sort_impl, random);
        instantiate_sort_test_inner!($prefix, $sort_impl, random_narrow);
        instantiate_sort_test_inner!($prefix, $sort_impl, random_zipf);
        instantiate_sort_test_inner!($prefix, $sort_impl, ascending);
        instantiate_sort_test_inner!($prefix, $sort_impl, descending);
        instantiate_sort_test_inner!($prefix, $sort_impl, all_equal);
        instantiate_sort_test_inner!($prefix, $sort_impl, extremes);
        instantiate_sort_test_inner!($prefix, $sort_impl, sorted_input_unchanged);
        instantiate_sort_test_inner!($prefix, $sort_impl, observer_does_not_change_result);
        instantiate_sort_test_inner!($prefix, $sort_impl, completion_frame);
        instantiate_sort_test_inner!($prefix, $sort_impl, highlighted_indices_in_bounds);
        instantiate_sort_test_inner!($prefix, $sort_impl, sort_by_reverse);
    };
}

macro_rules! instantiate_stable_sort_tests {
    ($prefix:ident, $sort_impl:ty) => {
        instantiate_sort_test_inner!($prefix, $sort_impl, stability);
        instantiate_sort_test_inner!($prefix, $sort_impl, stability_all_equal);
    };
}
