use alloc::format;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use rowwindow::{ListWindow, WindowOptions, WindowRange};

use crate::Column;

/// Maps a record to a stable identity used as its rendering key.
///
/// Without one, rows are keyed by their absolute index.
pub type RowKeyFn<T> = Arc<dyn Fn(&T) -> u64 + Send + Sync>;

/// Invoked with `(record, absolute_index)` when a row is activated.
pub type RowActivateCallback<T> = Arc<dyn Fn(&T, usize) + Send + Sync>;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeaderCell {
    pub label: String,
    pub width: Option<u32>,
}

/// One rendered row: stable key, absolute index, absolute position inside the
/// spacer, and one cell per column.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableRow {
    pub key: u64,
    pub index: usize,
    pub top: u64,
    pub height: u32,
    pub cells: Vec<String>,
}

/// The output of one table render pass.
///
/// The caller places `rows` at vertical offset `offset_y` inside a spacer of
/// height `total_height`, so native scrollbar proportions match the full
/// (virtual) collection size. The header is always produced, even when the
/// collection is empty.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableFrame {
    pub count: usize,
    pub total_height: u64,
    pub offset_y: u64,
    pub range: WindowRange,
    pub header: Vec<HeaderCell>,
    pub rows: Vec<TableRow>,
}

impl TableFrame {
    /// A "15-34 of 1000" scroll position label, or `None` when the collection
    /// is empty (no indicator is shown for empty tables).
    pub fn indicator(&self) -> Option<String> {
        if self.count == 0 {
            return None;
        }
        let first = self.range.start_index + 1;
        let last = self.range.end_index.min(self.count);
        Some(format!("{first}-{last} of {}", self.count))
    }
}

/// A windowed table: a [`ListWindow`] plus ordered column descriptors, an
/// optional stable row key, and an optional row activation callback.
///
/// The view never owns or reorders the data; the caller supplies the record
/// slice on every render pass and only `data[range]` is read.
pub struct TableView<T> {
    window: ListWindow,
    columns: Vec<Column<T>>,
    row_key: Option<RowKeyFn<T>>,
    on_row_activate: Option<RowActivateCallback<T>>,
}

impl<T> TableView<T> {
    pub fn new(options: WindowOptions, columns: Vec<Column<T>>) -> Self {
        Self {
            window: ListWindow::new(options),
            columns,
            row_key: None,
            on_row_activate: None,
        }
    }

    /// Sets the stable row identity function. Rows without one are keyed by
    /// their absolute index.
    pub fn with_row_key(mut self, f: impl Fn(&T) -> u64 + Send + Sync + 'static) -> Self {
        self.row_key = Some(Arc::new(f));
        self
    }

    pub fn with_on_row_activate(mut self, f: impl Fn(&T, usize) + Send + Sync + 'static) -> Self {
        self.on_row_activate = Some(Arc::new(f));
        self
    }

    pub fn window(&self) -> &ListWindow {
        &self.window
    }

    pub fn window_mut(&mut self) -> &mut ListWindow {
        &mut self.window
    }

    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    pub fn set_columns(&mut self, columns: Vec<Column<T>>) {
        self.columns = columns;
    }

    /// The scroll-event entry point: clamps the offset and marks the window
    /// as scrolling.
    pub fn on_scroll(&mut self, offset: u64, now_ms: u64) {
        self.window.apply_scroll_event_clamped(offset, now_ms);
    }

    /// Renders one frame for `data`.
    ///
    /// Syncs the window's `count` to `data.len()`, then reads only the records
    /// inside the window range. The data is never mutated or reordered.
    pub fn render(&mut self, data: &[T]) -> TableFrame {
        self.window.set_count(data.len());

        let range = self.window.window_range();
        let row_height = self.window.row_height();
        let offset_y = range.start_index as u64 * row_height as u64;

        let mut rows = Vec::with_capacity(range.len());
        for index in range.indexes() {
            let record = &data[index];
            rows.push(TableRow {
                key: self.key_for(record, index),
                index,
                top: index as u64 * row_height as u64,
                height: row_height,
                cells: self
                    .columns
                    .iter()
                    .map(|column| column.cell(record, index))
                    .collect(),
            });
        }

        TableFrame {
            count: data.len(),
            total_height: self.window.total_height(),
            offset_y,
            range,
            header: self
                .columns
                .iter()
                .map(|column| HeaderCell {
                    label: column.header().into(),
                    width: column.width(),
                })
                .collect(),
            rows,
        }
    }

    fn key_for(&self, record: &T, index: usize) -> u64 {
        match &self.row_key {
            Some(f) => f(record),
            None => index as u64,
        }
    }

    /// Activates the row at `index`, invoking the activation callback with the
    /// record and its absolute index.
    ///
    /// Returns `false` when the index is out of bounds or no callback is set.
    pub fn activate(&self, data: &[T], index: usize) -> bool {
        let (Some(cb), Some(record)) = (&self.on_row_activate, data.get(index)) else {
            return false;
        };
        cb(record, index);
        true
    }

    /// Activates the row under a click at `viewport_y` pixels from the top of
    /// the viewport. Clicks below the last row activate nothing.
    ///
    /// Returns the activated index, if any.
    pub fn activate_at(&self, data: &[T], viewport_y: u64) -> Option<usize> {
        let abs = self.window.scroll_offset().saturating_add(viewport_y);
        if abs >= self.window.total_height() {
            return None;
        }
        let index = self.window.index_at_offset(abs)?;
        self.activate(data, index).then_some(index)
    }
}

impl<T> fmt::Debug for TableView<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableView")
            .field("window", &self.window)
            .field("columns", &self.columns.len())
            .finish_non_exhaustive()
    }
}
