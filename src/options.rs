/// Number of items added per step while the host fills the initial viewport.
pub const DEFAULT_ITEMS_BATCH_SIZE: usize = 5;

/// Number of items added per step while scrolling.
pub const DEFAULT_ITEMS_BUFFER_SIZE: usize = 3;

/// Configuration for [`crate::WindowState`].
///
/// Options are fixed for the lifetime of a window; [`crate::WindowState::reset`] keeps them.
/// A size of zero is treated as "unset" and falls back to the default, since a zero-sized step
/// could never move the window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowOptions {
    pub items_batch_size: usize,
    pub items_buffer_size: usize,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            items_batch_size: DEFAULT_ITEMS_BATCH_SIZE,
            items_buffer_size: DEFAULT_ITEMS_BUFFER_SIZE,
        }
    }
}

impl WindowOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items_batch_size(mut self, items_batch_size: usize) -> Self {
        self.items_batch_size = items_batch_size;
        self
    }

    pub fn with_items_buffer_size(mut self, items_buffer_size: usize) -> Self {
        self.items_buffer_size = items_buffer_size;
        self
    }

    /// Replaces zero sizes with their defaults.
    pub(crate) fn normalized(self) -> Self {
        Self {
            items_batch_size: non_zero_or(self.items_batch_size, DEFAULT_ITEMS_BATCH_SIZE),
            items_buffer_size: non_zero_or(self.items_buffer_size, DEFAULT_ITEMS_BUFFER_SIZE),
        }
    }
}

fn non_zero_or(value: usize, default: usize) -> usize {
    if value == 0 { default } else { value }
}
