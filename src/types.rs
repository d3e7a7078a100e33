use core::ops::RangeInclusive;

/// Inclusive index bounds of the materialized window.
///
/// This is a plain value: reading it from a [`crate::WindowState`] copies it, so it stays valid
/// no matter how the window changes afterwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderedRange {
    pub first: usize,
    pub last: usize, // inclusive
}

impl RenderedRange {
    pub fn new(first: usize, last: usize) -> Self {
        debug_assert!(first <= last, "RenderedRange: first > last ({first} > {last})");
        Self { first, last }
    }

    /// Number of materialized items.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        (self.last + 1).saturating_sub(self.first)
    }

    pub fn contains(&self, index: usize) -> bool {
        self.first <= index && index <= self.last
    }

    pub fn indices(&self) -> RangeInclusive<usize> {
        self.first..=self.last
    }
}

/// The scrolling phase the window is in after its most recent transition.
///
/// Each phase decides independently which indices the host should observe:
///
/// | phase | start observed | end observed |
/// |---|---|---|
/// | `Filling` | unchanged | unchanged |
/// | `Complete` | none | none |
/// | `PinnedAtEnd` | yes | none |
/// | `PinnedAtStart` | none | yes |
/// | `SteadyState` | yes | yes |
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Initial batches are still being added to fill the viewport, or the item count changed
    /// and appends restart at index 0.
    #[default]
    Filling,
    /// The head cannot grow any further (a full start buffer could not be prepended).
    PinnedAtStart,
    /// Away from both edges: the window slides in both directions.
    SteadyState,
    /// The last logical item is materialized.
    PinnedAtEnd,
    /// Every logical item is materialized; there is nothing left to virtualize.
    Complete,
}
