use core::ops::RangeInclusive;

use crate::{InvalidItemsCount, Phase, RenderedRange, WindowOptions, WindowSnapshot};

/// A headless windowing engine for incremental virtual scrolling.
///
/// The window tracks which contiguous index range of a (potentially huge) list is materialized by
/// the host. It never touches item data or UI objects:
/// - The host calls [`Self::add_initial_items_batch`] until the viewport is filled.
/// - While scrolling, the host observes [`Self::buffer_start_observed_item_index`] and
///   [`Self::buffer_end_observed_item_index`]; when one becomes visible it calls
///   [`Self::update_start_scroll_buffer`] or [`Self::update_end_scroll_buffer`].
/// - After measuring items the host sets [`Self::set_avg_item_height`] and calls
///   [`Self::calculate_placeholder_size`] so the scroll extent matches the full list.
///
/// Every mutation is a finite, in-place state transition; nothing allocates and nothing panics.
/// The window has exactly one writer: overlapping host notifications must be serialized by the
/// caller (which `&mut self` already enforces).
#[derive(Clone, Debug)]
pub struct WindowState {
    options: WindowOptions,
    items_count: usize,
    avg_item_height: f64,
    last_item_rendered: bool,

    range: Option<RenderedRange>,
    start_placeholder_size: f64,
    end_placeholder_size: f64,
    start_observed: Option<usize>,
    end_observed: Option<usize>,
    phase: Phase,

    initial_batches: usize,
    // Extremes reached by growth. Trims pull them back to the window edges.
    first_rendered: Option<usize>,
    last_rendered: Option<usize>,
    start_buffer_len: usize,
    end_buffer_len: usize,
}

impl Default for WindowState {
    fn default() -> Self {
        Self::new(WindowOptions::default())
    }
}

impl WindowState {
    /// Creates an empty window. Zero sizes in `options` fall back to their defaults.
    pub fn new(options: WindowOptions) -> Self {
        let options = options.normalized();
        vdebug!(
            items_batch_size = options.items_batch_size,
            items_buffer_size = options.items_buffer_size,
            "WindowState::new"
        );
        Self::pristine(options)
    }

    fn pristine(options: WindowOptions) -> Self {
        Self {
            options,
            items_count: 0,
            avg_item_height: 0.0,
            last_item_rendered: false,
            range: None,
            start_placeholder_size: 0.0,
            end_placeholder_size: 0.0,
            start_observed: None,
            end_observed: None,
            phase: Phase::Filling,
            initial_batches: 0,
            first_rendered: None,
            last_rendered: None,
            start_buffer_len: 0,
            end_buffer_len: 0,
        }
    }

    pub fn options(&self) -> WindowOptions {
        self.options
    }

    /// Total number of logical items.
    pub fn items_count(&self) -> usize {
        self.items_count
    }

    /// Sets the total number of logical items.
    ///
    /// A negative count is a caller bug: it is logged and ignored, leaving the window untouched.
    /// Use [`Self::try_set_items_count`] to observe the rejection instead.
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    pub fn set_items_count(&mut self, count: i64) {
        if let Err(err) = self.try_set_items_count(count) {
            vwarn!(%err, "set_items_count: ignoring invalid item count");
        }
    }

    /// Sets the total number of logical items, rejecting negative counts.
    ///
    /// Any accepted count invalidates the last-rendered index, so the next append starts again
    /// at index 0. The current window is clamped into `0..count` right away.
    pub fn try_set_items_count(&mut self, count: i64) -> Result<(), InvalidItemsCount> {
        if count < 0 {
            return Err(InvalidItemsCount { count });
        }
        self.items_count = usize::try_from(count).unwrap_or(usize::MAX);
        self.last_rendered = None;
        self.clamp_to_items_count();
        // Appends restart at index 0, so the window is filling again unless it already covers
        // the whole list.
        if self.items_count <= self.rendered_len() {
            self.phase = Phase::Complete;
            self.start_observed = None;
            self.end_observed = None;
        } else {
            self.phase = Phase::Filling;
        }
        self.update_last_item_rendered();
        vtrace!(
            items_count = self.items_count,
            range = ?self.range,
            phase = ?self.phase,
            "set_items_count"
        );
        Ok(())
    }

    pub fn avg_item_height(&self) -> f64 {
        self.avg_item_height
    }

    /// Sets the measured average item height used by [`Self::calculate_placeholder_size`].
    ///
    /// Negative and non-finite heights are ignored.
    pub fn set_avg_item_height(&mut self, avg_item_height: f64) {
        if !avg_item_height.is_finite() || avg_item_height < 0.0 {
            vwarn!(avg_item_height, "set_avg_item_height: ignoring invalid height");
            return;
        }
        self.avg_item_height = avg_item_height;
    }

    /// Inclusive bounds of the materialized window.
    ///
    /// Returns `{ first: 0, last: 0 }` when nothing is materialized, which is indistinguishable
    /// from "only item 0 is materialized". Prefer [`Self::rendered_range`] when that matters.
    pub fn rendered_items_range(&self) -> RenderedRange {
        self.range.unwrap_or_default()
    }

    /// Inclusive bounds of the materialized window, or `None` if nothing is materialized.
    pub fn rendered_range(&self) -> Option<RenderedRange> {
        self.range
    }

    pub fn has_materialized_items(&self) -> bool {
        self.range.is_some()
    }

    /// Number of materialized items.
    pub fn rendered_len(&self) -> usize {
        self.range.map_or(0, |range| range.len())
    }

    /// Indices of the materialized items, in ascending order.
    #[allow(clippy::reversed_empty_ranges)]
    pub fn rendered_indices(&self) -> RangeInclusive<usize> {
        match self.range {
            Some(range) => range.indices(),
            None => 1..=0,
        }
    }

    pub fn is_rendered(&self, index: usize) -> bool {
        self.range.is_some_and(|range| range.contains(index))
    }

    /// Space to reserve before the materialized window.
    pub fn start_placeholder_size(&self) -> f64 {
        self.start_placeholder_size
    }

    /// Space to reserve after the materialized window.
    pub fn end_placeholder_size(&self) -> f64 {
        self.end_placeholder_size
    }

    /// Index to observe; when it becomes visible, call [`Self::update_start_scroll_buffer`].
    pub fn buffer_start_observed_item_index(&self) -> Option<usize> {
        self.start_observed
    }

    /// Index to observe; when it becomes visible, call [`Self::update_end_scroll_buffer`].
    pub fn buffer_end_observed_item_index(&self) -> Option<usize> {
        self.end_observed
    }

    /// Whether the window's tail has reached the last logical item.
    pub fn last_item_rendered(&self) -> bool {
        self.last_item_rendered
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of [`Self::add_initial_items_batch`] calls since construction or the last reset.
    pub fn initial_batches(&self) -> usize {
        self.initial_batches
    }

    /// Current length of the start buffer, as of the most recent buffer update.
    pub fn start_buffer_len(&self) -> usize {
        self.start_buffer_len
    }

    /// Current length of the end buffer, as of the most recent buffer update.
    pub fn end_buffer_len(&self) -> usize {
        self.end_buffer_len
    }

    pub fn snapshot(&self) -> WindowSnapshot {
        WindowSnapshot {
            items_count: self.items_count,
            rendered_range: self.range,
            start_placeholder_size: self.start_placeholder_size,
            end_placeholder_size: self.end_placeholder_size,
            buffer_start_observed_index: self.start_observed,
            buffer_end_observed_index: self.end_observed,
            last_item_rendered: self.last_item_rendered,
            phase: self.phase,
        }
    }

    /// Appends one batch of `items_batch_size` items after the last rendered index.
    ///
    /// Call repeatedly while the materialized items do not fill the viewport yet. Growth stops at
    /// the last logical item.
    pub fn add_initial_items_batch(&mut self) {
        let start_at = self.last_rendered.map_or(-1, signed);
        self.grow(self.options.items_batch_size, start_at);
        self.initial_batches = self.initial_batches.saturating_add(1);
        self.phase = Phase::Filling;
        self.update_last_item_rendered();
        vtrace!(
            initial_batches = self.initial_batches,
            range = ?self.range,
            "add_initial_items_batch"
        );
    }

    /// Prepends one buffer of items and trims the same number of items from the tail.
    pub fn update_start_scroll_buffer(&mut self) {
        let buffer = self.options.items_buffer_size;
        let prev_len = self.rendered_len();

        let start_at = self
            .first_rendered
            .map_or(-1, signed)
            .saturating_sub(signed(buffer))
            .saturating_sub(1);
        self.grow(buffer, start_at);
        self.start_buffer_len = self.rendered_len().saturating_sub(prev_len);

        if let Some(range) = self.range {
            let last = range
                .last
                .saturating_sub(self.start_buffer_len)
                .max(range.first);
            self.range = Some(RenderedRange::new(range.first, last));
            self.last_rendered = Some(last);
        }

        self.end_buffer_len = self
            .rendered_len()
            .saturating_sub(self.initial_len().saturating_add(self.start_buffer_len));

        self.classify();
        vtrace!(
            range = ?self.range,
            start_buffer_len = self.start_buffer_len,
            end_buffer_len = self.end_buffer_len,
            phase = ?self.phase,
            "update_start_scroll_buffer"
        );
    }

    /// Appends one buffer of items and, once a start buffer exists, trims the same number of
    /// items from the head.
    pub fn update_end_scroll_buffer(&mut self) {
        let buffer = self.options.items_buffer_size;
        let prev_len = self.rendered_len();

        let start_at = self.last_rendered.map_or(-1, signed);
        self.grow(buffer, start_at);
        self.end_buffer_len = self.rendered_len().saturating_sub(prev_len);

        if self.start_buffer_len > 0 {
            if let Some(range) = self.range {
                let first = range
                    .first
                    .saturating_add(self.end_buffer_len)
                    .min(range.last);
                self.range = Some(RenderedRange::new(first, range.last));
                self.first_rendered = Some(first);
            }
        }

        self.start_buffer_len = self
            .rendered_len()
            .saturating_sub(self.initial_len().saturating_add(self.end_buffer_len));

        self.classify();
        vtrace!(
            range = ?self.range,
            start_buffer_len = self.start_buffer_len,
            end_buffer_len = self.end_buffer_len,
            phase = ?self.phase,
            "update_end_scroll_buffer"
        );
    }

    /// Recomputes the placeholder sizes from the current window and average item height.
    ///
    /// Call after any operation that changes the window, before painting. With nothing
    /// materialized the whole list is placeholder.
    pub fn calculate_placeholder_size(&mut self) {
        let (before, after) = match self.range {
            Some(range) => (
                range.first,
                self.items_count.saturating_sub(range.last.saturating_add(1)),
            ),
            None => (0, self.items_count),
        };
        self.start_placeholder_size = before as f64 * self.avg_item_height;
        self.end_placeholder_size = after as f64 * self.avg_item_height;
    }

    /// Returns every piece of state to its construction-time value. Options are kept.
    pub fn reset(&mut self) {
        *self = Self::pristine(self.options);
        vdebug!("WindowState::reset");
    }

    fn initial_len(&self) -> usize {
        self.initial_batches
            .saturating_mul(self.options.items_batch_size)
    }

    /// Walks `count` candidate indices after `start_at` (exclusive) and widens the window.
    ///
    /// The head only moves when `start_at` lies before it; shrinking happens exclusively in the
    /// buffer updates.
    fn grow(&mut self, count: usize, start_at: i64) {
        let from = start_at.saturating_add(1);
        let to = from.saturating_add(signed(count));
        for candidate in from..to {
            // Prepending near the head overshoots below zero; skipping keeps a uniform step size.
            let Ok(index) = usize::try_from(candidate) else {
                continue;
            };
            if index >= self.items_count {
                break;
            }
            if index == 0 || self.first_rendered.is_some_and(|first| index < first) {
                self.first_rendered = Some(index);
            }
            if self.last_rendered.is_none_or(|last| index > last) {
                self.last_rendered = Some(index);
            }
        }

        let Some(last) = self.last_rendered else {
            return;
        };
        let floor = usize::try_from(start_at).unwrap_or(0);
        let first = match self.range {
            Some(range) if start_at >= signed(range.first) => range.first,
            _ => floor,
        };
        self.range = Some(RenderedRange::new(first.min(last), last));
        self.retain_observed_in_window();
    }

    fn classify(&mut self) {
        let buffer = self.options.items_buffer_size;
        self.phase = if self.items_count <= self.rendered_len() {
            Phase::Complete
        } else if self.range.is_none() {
            Phase::Filling
        } else if self
            .last_rendered
            .is_some_and(|last| last.saturating_add(1) == self.items_count)
        {
            Phase::PinnedAtEnd
        } else if self.start_buffer_len < buffer {
            Phase::PinnedAtStart
        } else {
            Phase::SteadyState
        };

        let (start, end) = self.observed_indices(self.phase);
        self.start_observed = start;
        self.end_observed = end;
        self.update_last_item_rendered();
    }

    /// Observed indices for `phase`, as `(start, end)`.
    ///
    /// Both sit inside the buffer rather than on its edge so the host gets a lead distance to
    /// materialize the next chunk before blank space scrolls into view.
    fn observed_indices(&self, phase: Phase) -> (Option<usize>, Option<usize>) {
        let Some(last) = self.last_rendered else {
            return (None, None);
        };
        let last = signed(last);
        let buffer = signed(self.options.items_buffer_size);
        let half_buffer = buffer / 2;
        let initial = signed(self.initial_len());

        match phase {
            Phase::Filling => (self.start_observed, self.end_observed),
            Phase::Complete => (None, None),
            Phase::PinnedAtEnd => (
                self.observable(last.saturating_sub(initial).saturating_sub(half_buffer)),
                None,
            ),
            Phase::PinnedAtStart => (None, self.observable(last.saturating_sub(half_buffer))),
            Phase::SteadyState => {
                let end = last.saturating_sub(half_buffer);
                let start = end.saturating_sub(initial).saturating_sub(buffer);
                (self.observable(start), self.observable(end))
            }
        }
    }

    /// Clamps an observed index into the window so the host can actually observe it.
    fn observable(&self, index: i64) -> Option<usize> {
        let range = self.range?;
        let index = usize::try_from(index).unwrap_or(0);
        Some(index.clamp(range.first, range.last))
    }

    fn clamp_to_items_count(&mut self) {
        let Some(range) = self.range else {
            return;
        };
        if self.items_count == 0 {
            self.range = None;
            self.first_rendered = None;
            self.retain_observed_in_window();
            return;
        }

        let max = self.items_count - 1;
        let clamped = if range.last > max {
            RenderedRange::new(range.first.min(max), max)
        } else {
            range
        };
        self.range = Some(clamped);
        if self.first_rendered.is_some_and(|first| first > max) {
            self.first_rendered = Some(clamped.first);
        }
        self.retain_observed_in_window();
    }

    fn retain_observed_in_window(&mut self) {
        let range = self.range;
        let inside = |index: &usize| range.is_some_and(|range| range.contains(*index));
        self.start_observed = self.start_observed.filter(inside);
        self.end_observed = self.end_observed.filter(inside);
    }

    fn update_last_item_rendered(&mut self) {
        self.last_item_rendered = self
            .range
            .is_some_and(|range| range.last.saturating_add(1) == self.items_count);
    }
}

fn signed(index: usize) -> i64 {
    i64::try_from(index).unwrap_or(i64::MAX)
}
