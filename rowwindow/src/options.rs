use alloc::sync::Arc;

use crate::window::ListWindow;

/// A callback fired when a window state update occurs.
///
/// The second argument is `is_scrolling`.
pub type OnChangeCallback = Arc<dyn Fn(&ListWindow, bool) + Send + Sync>;

/// Configuration for [`crate::ListWindow`].
///
/// This type is cheap to clone: the only heavy field (`on_change`) is stored in
/// an `Arc`, so adapters can tweak a few fields and call
/// `ListWindow::set_options` without reallocating closures.
pub struct WindowOptions {
    /// Number of rows in the collection.
    pub count: usize,
    /// Fixed row height in pixels. Must be greater than zero.
    pub row_height: u32,
    /// Visible viewport height in pixels.
    pub viewport_height: u32,
    /// Extra rows rendered beyond the strict viewport on each side.
    pub overscan: usize,
    /// Scroll offset applied when the window is created.
    pub initial_offset: u64,
    /// Debounced delay for resetting `is_scrolling` after the last scroll event.
    pub scroll_idle_delay_ms: u64,
    /// Optional callback fired when the window's internal state changes.
    ///
    /// The `is_scrolling` argument indicates whether a scroll is in progress.
    pub on_change: Option<OnChangeCallback>,
}

impl WindowOptions {
    /// Creates options for a collection of `count` rows of `row_height` pixels.
    ///
    /// # Panics
    ///
    /// Panics if `row_height == 0`. A zero row height has no meaningful window
    /// geometry; it is rejected up front rather than propagated into the range
    /// math.
    pub fn new(count: usize, row_height: u32) -> Self {
        assert!(row_height > 0, "row_height must be greater than zero");
        Self {
            count,
            row_height,
            viewport_height: 0,
            overscan: 1,
            initial_offset: 0,
            scroll_idle_delay_ms: 150,
            on_change: None,
        }
    }

    pub fn with_viewport_height(mut self, viewport_height: u32) -> Self {
        self.viewport_height = viewport_height;
        self
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_initial_offset(mut self, initial_offset: u64) -> Self {
        self.initial_offset = initial_offset;
        self
    }

    pub fn with_scroll_idle_delay_ms(mut self, delay_ms: u64) -> Self {
        self.scroll_idle_delay_ms = delay_ms;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&ListWindow, bool) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl Clone for WindowOptions {
    fn clone(&self) -> Self {
        Self {
            count: self.count,
            row_height: self.row_height,
            viewport_height: self.viewport_height,
            overscan: self.overscan,
            initial_offset: self.initial_offset,
            scroll_idle_delay_ms: self.scroll_idle_delay_ms,
            on_change: self.on_change.clone(),
        }
    }
}

impl core::fmt::Debug for WindowOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WindowOptions")
            .field("count", &self.count)
            .field("row_height", &self.row_height)
            .field("viewport_height", &self.viewport_height)
            .field("overscan", &self.overscan)
            .field("initial_offset", &self.initial_offset)
            .field("scroll_idle_delay_ms", &self.scroll_idle_delay_ms)
            .finish_non_exhaustive()
    }
}
