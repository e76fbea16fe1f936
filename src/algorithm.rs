use std::fmt;
use std::str::FromStr;

use crate::stable::{bubble_sort, merge_sort};
use crate::unstable::{quick_sort, selection_sort};
use crate::{Sort, SortError, SortResult, StepObserver};

/// The four instrumented sorts, in the order they are benchmarked and reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Algorithm {
    Selection,
    Bubble,
    Merge,
    Quick,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Selection,
        Algorithm::Bubble,
        Algorithm::Merge,
        Algorithm::Quick,
    ];

    /// Short name used in tables and charts.
    pub const fn label(self) -> &'static str {
        match self {
            Algorithm::Selection => "Selection",
            Algorithm::Bubble => "Bubble",
            Algorithm::Merge => "Merge",
            Algorithm::Quick => "Quick",
        }
    }

    /// Upper case title shown above the live bar chart.
    pub const fn title(self) -> &'static str {
        match self {
            Algorithm::Selection => "SELECTION SORT",
            Algorithm::Bubble => "BUBBLE SORT",
            Algorithm::Merge => "MERGE SORT",
            Algorithm::Quick => "QUICK SORT",
        }
    }

    pub const fn is_stable(self) -> bool {
        matches!(self, Algorithm::Bubble | Algorithm::Merge)
    }

    pub fn name(self) -> String {
        match self {
            Algorithm::Selection => selection_sort::SortImpl::name(),
            Algorithm::Bubble => bubble_sort::SortImpl::name(),
            Algorithm::Merge => merge_sort::SortImpl::name(),
            Algorithm::Quick => quick_sort::SortImpl::name(),
        }
    }

    pub fn sort<O>(self, arr: &mut [i32], observer: &mut O) -> SortResult<()>
    where
        O: StepObserver<i32> + ?Sized,
    {
        match self {
            Algorithm::Selection => selection_sort::SortImpl::sort(arr, observer),
            Algorithm::Bubble => bubble_sort::SortImpl::sort(arr, observer),
            Algorithm::Merge => merge_sort::SortImpl::sort(arr, observer),
            Algorithm::Quick => quick_sort::SortImpl::sort(arr, observer),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Algorithm {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "selection" | "1" => Ok(Algorithm::Selection),
            "bubble" | "2" => Ok(Algorithm::Bubble),
            "merge" | "3" => Ok(Algorithm::Merge),
            "quick" | "4" => Ok(Algorithm::Quick),
            other => Err(SortError::invalid_input(format!(
                "unknown algorithm '{other}'"
            ))),
        }
    }
}
