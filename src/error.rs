use thiserror::Error;

/// Returned by [`crate::WindowState::try_set_items_count`] for a negative item count.
///
/// This is a caller bug rather than a runtime fault: the window is left untouched.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("invalid item count {count}: item count should not be negative")]
pub struct InvalidItemsCount {
    pub count: i64,
}
