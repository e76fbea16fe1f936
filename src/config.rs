//! Visualizer settings and the fixed parameters of each run mode.

use std::ops::{Range, RangeInclusive};
use std::time::Duration;

use crate::{SortError, SortResult};

/// Longest array that is visualized, longer inputs are truncated.
pub const VISUAL_MAX_LEN: usize = 30;

/// Values drawn for visualized arrays.
pub const VISUAL_VALUE_RANGE: RangeInclusive<i32> = 1..=50;

/// Values drawn for the compare-all mode.
pub const COMPARE_VALUE_RANGE: RangeInclusive<i32> = 1..=100;

/// Values drawn for the performance analysis mode.
pub const ANALYSIS_VALUE_RANGE: Range<i32> = 0..10_000;

/// Array sizes of the performance analysis mode.
pub const ANALYSIS_SIZES: [usize; 5] = [100, 500, 1_000, 5_000, 10_000];

/// How many leading elements compare mode prints as a sample.
pub const PREVIEW_LEN: usize = 20;

/// Accepted frame delay in microseconds.
pub const DELAY_MICROS_RANGE: RangeInclusive<u64> = 1..=100_000;

const DEFAULT_DELAY_MICROS: u64 = 50_000;
const DEFAULT_BAR_WIDTH: usize = 50;

/// Settings of the live terminal renderer.
///
/// Passed to the renderer by value, the sorts themselves never read it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualizerConfig {
    pub enabled: bool,
    pub delay: Duration,
    pub bar_width: usize,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            delay: Duration::from_micros(DEFAULT_DELAY_MICROS),
            bar_width: DEFAULT_BAR_WIDTH,
        }
    }
}

impl VisualizerConfig {
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }

    pub fn set_delay_micros(&mut self, micros: u64) -> SortResult<()> {
        if !DELAY_MICROS_RANGE.contains(&micros) {
            return Err(SortError::InvalidConfig(format!(
                "visualization delay must be within {}..={} microseconds, got {micros}",
                DELAY_MICROS_RANGE.start(),
                DELAY_MICROS_RANGE.end()
            )));
        }

        self.delay = Duration::from_micros(micros);
        Ok(())
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_bar_width(mut self, bar_width: usize) -> SortResult<Self> {
        if bar_width == 0 {
            return Err(SortError::InvalidConfig(
                "bar width must be at least one column".into(),
            ));
        }

        self.bar_width = bar_width;
        Ok(self)
    }

    pub fn delay_micros(&self) -> u128 {
        self.delay.as_micros()
    }
}

/// Sizes of the analysis mode that run for a user chosen `n`.
///
/// The first size always runs, later ones stop at the first size larger than `n`.
pub fn analysis_sizes(n: usize) -> Vec<usize> {
    ANALYSIS_SIZES
        .iter()
        .enumerate()
        .take_while(|&(i, &size)| i == 0 || size <= n)
        .map(|(_, &size)| size)
        .collect()
}
