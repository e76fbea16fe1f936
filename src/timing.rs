//! Wall-clock timing of single sort runs.

use std::hint::black_box;
use std::time::{Duration, Instant};

use log::debug;

use crate::array::copy_into;
use crate::{Algorithm, NoopObserver, SortError, SortResult};

/// Elapsed time of one sort run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingResult {
    algorithm: Algorithm,
    elapsed: Duration,
}

impl TimingResult {
    pub fn new(algorithm: Algorithm, elapsed: Duration) -> Self {
        Self { algorithm, elapsed }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn label(&self) -> &'static str {
        self.algorithm.label()
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Elapsed time in seconds, never negative.
    pub fn seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Sorts a private copy of `input` with `algorithm` and measures only the sort itself.
///
/// The copy is made before the clock starts and the sort runs with a [`NoopObserver`], so neither
/// allocation nor rendering shows up in the measurement.
pub fn time_run(algorithm: Algorithm, input: &[i32]) -> SortResult<TimingResult> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(input.len())
        .map_err(|_| SortError::AllocationFailure {
            requested: input.len(),
        })?;
    buf.resize(input.len(), 0);
    copy_into(input, &mut buf);

    time_sort(algorithm, &mut buf)
}

/// Sorts `buf` in place with `algorithm` and measures the sort.
///
/// The caller is responsible for handing in unsorted data, re-timing an already sorted buffer
/// measures a different workload.
pub fn time_sort(algorithm: Algorithm, buf: &mut [i32]) -> SortResult<TimingResult> {
    let start = Instant::now();
    algorithm.sort(black_box(&mut *buf), &mut NoopObserver)?;
    let elapsed = start.elapsed();

    debug!(
        "{} sorted {} elements in {:.6}s",
        algorithm.name(),
        buf.len(),
        elapsed.as_secs_f64()
    );

    Ok(TimingResult::new(algorithm, elapsed))
}
