//! Step events emitted by the instrumented sorts and the observers that consume them.

use crate::Algorithm;

/// What the highlighted indices of a [`StepEvent`] mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    /// Two elements are about to be compared.
    Compare,
    /// Two elements were just exchanged.
    Swap,
    /// A merge is about to fill the inclusive range `primary..=secondary`.
    Range,
    /// The sort finished, no indices are highlighted.
    Done,
}

/// A borrowed view of the slice at one step of a sort.
///
/// Events are produced many times per sort call and must not be retained, the snapshot borrows
/// the slice being sorted. `None` indices mean nothing is highlighted.
#[derive(Debug, Clone, Copy)]
pub struct StepEvent<'a, T> {
    pub snapshot: &'a [T],
    pub primary: Option<usize>,
    pub secondary: Option<usize>,
    pub label: &'static str,
    pub category: Algorithm,
    pub kind: StepKind,
}

impl<'a, T> StepEvent<'a, T> {
    #[inline(always)]
    pub fn new(snapshot: &'a [T], category: Algorithm, label: &'static str, kind: StepKind) -> Self {
        Self {
            snapshot,
            primary: None,
            secondary: None,
            label,
            category,
            kind,
        }
    }

    #[inline(always)]
    pub fn at(mut self, primary: usize, secondary: usize) -> Self {
        self.primary = Some(primary);
        self.secondary = Some(secondary);
        self
    }

    pub fn is_highlighted(&self, idx: usize) -> bool {
        self.primary == Some(idx) || self.secondary == Some(idx)
    }
}

pub trait StepObserver<T> {
    fn observe(&mut self, event: StepEvent<'_, T>);
}

impl<T, O: StepObserver<T> + ?Sized> StepObserver<T> for &mut O {
    #[inline(always)]
    fn observe(&mut self, event: StepEvent<'_, T>) {
        (**self).observe(event);
    }
}

/// Discards every event. Used for timed runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl<T> StepObserver<T> for NoopObserver {
    #[inline(always)]
    fn observe(&mut self, _event: StepEvent<'_, T>) {}
}

/// An owned copy of a [`StepEvent`].
#[derive(Debug, Clone, PartialEq)]
pub struct Frame<T> {
    pub snapshot: Vec<T>,
    pub primary: Option<usize>,
    pub secondary: Option<usize>,
    pub label: &'static str,
    pub category: Algorithm,
    pub kind: StepKind,
}

/// Keeps a copy of every event it sees.
#[derive(Debug, Clone)]
pub struct RecordingObserver<T> {
    frames: Vec<Frame<T>>,
}

impl<T> Default for RecordingObserver<T> {
    fn default() -> Self {
        Self { frames: Vec::new() }
    }
}

impl<T> RecordingObserver<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[Frame<T>] {
        &self.frames
    }

    pub fn count(&self, kind: StepKind) -> usize {
        self.frames.iter().filter(|f| f.kind == kind).count()
    }

    /// Highlighted index pairs of all frames of `kind`, in emission order.
    pub fn pairs(&self, kind: StepKind) -> Vec<(Option<usize>, Option<usize>)> {
        self.frames
            .iter()
            .filter(|f| f.kind == kind)
            .map(|f| (f.primary, f.secondary))
            .collect()
    }

    pub fn last(&self) -> Option<&Frame<T>> {
        self.frames.last()
    }
}

impl<T: Clone> StepObserver<T> for RecordingObserver<T> {
    fn observe(&mut self, event: StepEvent<'_, T>) {
        self.frames.push(Frame {
            snapshot: event.snapshot.to_vec(),
            primary: event.primary,
            secondary: event.secondary,
            label: event.label,
            category: event.category,
            kind: event.kind,
        });
    }
}
