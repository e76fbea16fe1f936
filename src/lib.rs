use std::cmp::Ordering;

pub mod algorithm;
pub mod array;
pub mod benchmark;
pub mod config;
pub mod error;
pub mod observer;
pub mod patterns;
pub mod render;
pub mod report;
pub mod timing;

pub use algorithm::Algorithm;
pub use benchmark::{compare_all, run_benchmark, BenchmarkRow, BenchmarkTable, RowSummary};
pub use config::VisualizerConfig;
pub use error::{SortError, SortResult};
pub use observer::{NoopObserver, RecordingObserver, StepEvent, StepKind, StepObserver};
pub use render::TerminalRenderer;
pub use timing::{time_run, time_sort, TimingResult};

/// Common interface of the instrumented sorts.
///
/// Every implementation reports its comparisons and swaps to `observer` as they happen. The
/// observer only ever sees a shared borrow of the slice.
pub trait Sort {
    fn name() -> String;

    fn sort<T, O>(arr: &mut [T], observer: &mut O) -> SortResult<()>
    where
        T: Ord + Clone,
        O: StepObserver<T> + ?Sized;

    fn sort_by<T, F, O>(arr: &mut [T], compare: F, observer: &mut O) -> SortResult<()>
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
        O: StepObserver<T> + ?Sized;
}

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl $crate::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T, O>(arr: &mut [T], observer: &mut O) -> $crate::SortResult<()>
            where
                T: Ord + Clone,
                O: $crate::StepObserver<T> + ?Sized,
            {
                sort(arr, observer)
            }

            #[inline]
            fn sort_by<T, F, O>(arr: &mut [T], compare: F, observer: &mut O) -> $crate::SortResult<()>
            where
                T: Clone,
                F: FnMut(&T, &T) -> std::cmp::Ordering,
                O: $crate::StepObserver<T> + ?Sized,
            {
                sort_by(arr, compare, observer)
            }
        }
    };
}

pub mod stable;
pub mod unstable;

/// Sorts `arr` with `algorithm`, reporting every step to `observer`.
pub fn sort<O>(algorithm: Algorithm, arr: &mut [i32], observer: &mut O) -> SortResult<()>
where
    O: StepObserver<i32> + ?Sized,
{
    algorithm.sort(arr, observer)
}
