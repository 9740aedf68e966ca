//! Table and list rendering helpers for the `rowwindow` crate.
//!
//! The `rowwindow` crate is UI-agnostic and focuses on the windowing math and
//! scroll state. This crate adds the pieces a data-table or list screen needs
//! on top of it:
//!
//! - Column descriptors with explicit field/custom cell rendering
//! - Windowed table frames (header, positioned rows, spacer/offset geometry)
//! - Row activation by index or by click position inside the viewport
//! - A "15-34 of 1000" scroll position indicator
//!
//! It stays framework-neutral: frames are plain data, and what a "cell" looks
//! like on screen is up to the caller.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod column;
mod list;
mod table;


pub use column::{CellRender, Column};
pub use list::{ListFrame, ListItem, ListView, RenderItemFn};
pub use table::{
    HeaderCell, RowActivateCallback, RowKeyFn, TableFrame, TableRow, TableView,
};
