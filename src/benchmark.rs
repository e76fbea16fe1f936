//! Runs every algorithm over a set of array sizes and collects the timings.

use std::ops::Range;

use log::{info, warn};
use rand::Rng;

use crate::array::validate_len;
use crate::config::ANALYSIS_VALUE_RANGE;
use crate::patterns::random_uniform;
use crate::timing::{time_run, TimingResult};
use crate::{Algorithm, SortError, SortResult};

/// Timings of all four algorithms on the same input.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkRow {
    size: usize,
    timings: [TimingResult; 4],
}

/// Fastest and slowest run of a row and how far apart they are.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowSummary {
    pub fastest: TimingResult,
    pub slowest: TimingResult,
    /// `slowest / fastest`.
    pub ratio: f64,
}

impl BenchmarkRow {
    /// Row from timings given in [`Algorithm::ALL`] order.
    pub fn new(size: usize, timings: [TimingResult; 4]) -> SortResult<Self> {
        for (timing, expected) in timings.iter().zip(Algorithm::ALL) {
            if timing.algorithm() != expected {
                return Err(SortError::invalid_input(format!(
                    "expected a {expected} timing, got {}",
                    timing.algorithm()
                )));
            }
        }

        Ok(Self { size, timings })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Timings in [`Algorithm::ALL`] order.
    pub fn timings(&self) -> &[TimingResult; 4] {
        &self.timings
    }

    pub fn timing(&self, algorithm: Algorithm) -> TimingResult {
        self.timings[algorithm as usize]
    }

    /// Fastest run, slowest run and their ratio.
    ///
    /// Ties resolve to the algorithm listed first. A fastest time of exactly zero is below the
    /// clock's resolution, the ratio is then indeterminate and [`SortError::DivideByZero`] is
    /// returned instead.
    pub fn summary(&self) -> SortResult<RowSummary> {
        let mut fastest = self.timings[0];
        let mut slowest = self.timings[0];

        for timing in &self.timings[1..] {
            if timing.elapsed() < fastest.elapsed() {
                fastest = *timing;
            }
            if timing.elapsed() > slowest.elapsed() {
                slowest = *timing;
            }
        }

        if fastest.elapsed().is_zero() {
            warn!(
                "{} finished {} elements below clock resolution, ratio is indeterminate",
                fastest.label(),
                self.size
            );
            return Err(SortError::DivideByZero {
                algorithm: fastest.label(),
            });
        }

        Ok(RowSummary {
            fastest,
            slowest,
            ratio: slowest.seconds() / fastest.seconds(),
        })
    }
}

/// Rows of a benchmark in the order their sizes were requested.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BenchmarkTable {
    rows: Vec<BenchmarkRow>,
}

impl BenchmarkTable {
    pub fn rows(&self) -> &[BenchmarkRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn push(&mut self, row: BenchmarkRow) {
        self.rows.push(row);
    }
}

/// Progress of a [`compare_all_with`] run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CompareEvent<'a> {
    /// `algorithm` is about to be timed.
    Started(Algorithm),
    Finished(&'a TimingResult),
}

/// Times all four algorithms, each on its own copy of `input`.
pub fn compare_all(input: &[i32]) -> SortResult<BenchmarkRow> {
    compare_all_with(input, |_| Ok(()))
}

/// Like [`compare_all`], reporting each run to `on_event` before and after it is timed.
///
/// An error returned from `on_event` stops the comparison.
pub fn compare_all_with<F>(input: &[i32], mut on_event: F) -> SortResult<BenchmarkRow>
where
    F: FnMut(CompareEvent<'_>) -> SortResult<()>,
{
    validate_len(input.len())?;

    let mut run = |algorithm: Algorithm| -> SortResult<TimingResult> {
        on_event(CompareEvent::Started(algorithm))?;
        let timing = time_run(algorithm, input)?;
        on_event(CompareEvent::Finished(&timing))?;
        Ok(timing)
    };

    let timings = [
        run(Algorithm::Selection)?,
        run(Algorithm::Bubble)?,
        run(Algorithm::Merge)?,
        run(Algorithm::Quick)?,
    ];

    Ok(BenchmarkRow {
        size: input.len(),
        timings,
    })
}

/// Benchmarks every size in `sizes` on fresh random data from `rng`.
pub fn run_benchmark<R: Rng>(sizes: &[usize], rng: &mut R) -> SortResult<BenchmarkTable> {
    run_benchmark_with_values(sizes, ANALYSIS_VALUE_RANGE, rng)
}

/// Like [`run_benchmark`], with element values drawn from `values`.
pub fn run_benchmark_with_values<R: Rng>(
    sizes: &[usize],
    values: Range<i32>,
    rng: &mut R,
) -> SortResult<BenchmarkTable> {
    // Reject bad sizes before spending time on the valid ones.
    for &size in sizes {
        validate_len(size)?;
    }

    let mut table = BenchmarkTable::default();

    for &size in sizes {
        let input = random_uniform(size, values.clone(), rng);
        let row = compare_all(&input)?;

        info!(
            "size {size}: {}",
            row.timings()
                .iter()
                .map(|t| format!("{} {:.6}s", t.label(), t.seconds()))
                .collect::<Vec<_>>()
                .join(", ")
        );

        table.push(row);
    }

    Ok(table)
}
