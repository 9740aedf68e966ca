use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use rowwindow::{ListWindow, WindowOptions, WindowRange};

use crate::table::RowKeyFn;

/// Maps `(record, absolute_index)` to the displayable content of one item.
pub type RenderItemFn<T> = Arc<dyn Fn(&T, usize) -> String + Send + Sync>;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListItem {
    pub key: u64,
    pub index: usize,
    pub top: u64,
    pub height: u32,
    pub content: String,
}

/// The output of one list render pass. Same spacer/offset geometry as
/// [`crate::TableFrame`], minus the header.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListFrame {
    pub count: usize,
    pub total_height: u64,
    pub offset_y: u64,
    pub range: WindowRange,
    pub items: Vec<ListItem>,
}

/// The simple list variant: one render function instead of columns.
pub struct ListView<T> {
    window: ListWindow,
    render_item: RenderItemFn<T>,
    item_key: Option<RowKeyFn<T>>,
}

impl<T> ListView<T> {
    pub fn new(
        options: WindowOptions,
        render_item: impl Fn(&T, usize) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            window: ListWindow::new(options),
            render_item: Arc::new(render_item),
            item_key: None,
        }
    }

    /// Sets the stable item identity function. Items without one are keyed by
    /// their absolute index.
    pub fn with_item_key(mut self, f: impl Fn(&T) -> u64 + Send + Sync + 'static) -> Self {
        self.item_key = Some(Arc::new(f));
        self
    }

    pub fn window(&self) -> &ListWindow {
        &self.window
    }

    pub fn window_mut(&mut self) -> &mut ListWindow {
        &mut self.window
    }

    pub fn on_scroll(&mut self, offset: u64, now_ms: u64) {
        self.window.apply_scroll_event_clamped(offset, now_ms);
    }

    /// Renders one frame for `items`, reading only the records inside the
    /// window range.
    pub fn render(&mut self, items: &[T]) -> ListFrame {
        self.window.set_count(items.len());

        let range = self.window.window_range();
        let item_height = self.window.row_height();
        let offset_y = range.start_index as u64 * item_height as u64;

        let mut out = Vec::with_capacity(range.len());
        for index in range.indexes() {
            let record = &items[index];
            let key = match &self.item_key {
                Some(f) => f(record),
                None => index as u64,
            };
            out.push(ListItem {
                key,
                index,
                top: index as u64 * item_height as u64,
                height: item_height,
                content: (self.render_item)(record, index),
            });
        }

        ListFrame {
            count: items.len(),
            total_height: self.window.total_height(),
            offset_y,
            range,
            items: out,
        }
    }
}

impl<T> fmt::Debug for ListView<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListView")
            .field("window", &self.window)
            .finish_non_exhaustive()
    }
}
