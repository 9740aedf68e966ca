//! A headless windowing engine for fixed-height rows.
//!
//! Given a collection length, a fixed row height, a viewport height and a scroll
//! offset, this crate computes the contiguous sub-range of rows that falls within
//! the scrolled viewport (plus a configurable overscan buffer), along with the
//! positioning metadata a renderer needs to make the subset line up with where it
//! would appear in a fully-rendered list: each row's absolute top offset and the
//! total spacer height.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - viewport height
//! - scroll offsets (from its scroll events)
//! - the actual row rendering
//!
//! For table/list rendering helpers (columns, row activation), see the
//! `rowwindow-table` crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod options;
mod state;
mod types;
mod window;

#[cfg(test)]
mod tests;

pub use options::{OnChangeCallback, WindowOptions};
pub use state::ScrollState;
pub use types::{Align, RowSlot, ScrollDirection, WindowRange};
pub use window::ListWindow;
