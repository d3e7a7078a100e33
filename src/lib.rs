//! A headless windowing engine for incremental virtual scrolling.
//!
//! Instead of computing the visible range from a scroll offset, the engine grows and slides a
//! window of materialized items in fixed-size steps, driven by visibility notifications from the
//! host:
//!
//! - the viewport is filled batch by batch ([`WindowState::add_initial_items_batch`])
//! - scrolling towards either end prepends/appends one buffer and trims the opposite side
//! - placeholder sizes before/after the window keep the scrollbar geometry of the full list
//!
//! It is UI-agnostic. A TUI/GUI/DOM layer is expected to provide:
//! - the total item count
//! - the measured average item height
//! - visibility notifications for the observed indices
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod options;
mod state;
mod types;
mod window;


pub use error::InvalidItemsCount;
pub use options::{DEFAULT_ITEMS_BATCH_SIZE, DEFAULT_ITEMS_BUFFER_SIZE, WindowOptions};
pub use state::WindowSnapshot;
pub use types::{Phase, RenderedRange};
pub use window::WindowState;
