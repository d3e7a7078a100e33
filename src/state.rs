use crate::{Phase, RenderedRange};

/// Everything a host needs to paint one frame, copied out of the window in a single call.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowSnapshot {
    pub items_count: usize,
    /// `None` when nothing has been materialized yet.
    pub rendered_range: Option<RenderedRange>,
    pub start_placeholder_size: f64,
    pub end_placeholder_size: f64,
    pub buffer_start_observed_index: Option<usize>,
    pub buffer_end_observed_index: Option<usize>,
    pub last_item_rendered: bool,
    pub phase: Phase,
}
