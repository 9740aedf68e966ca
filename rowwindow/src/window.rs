use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cell::Cell;
use core::cmp;

use crate::{Align, RowSlot, ScrollDirection, ScrollState, WindowOptions, WindowRange};

/// A headless windowing engine for fixed-height rows.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects or row data.
/// - Your adapter drives it by reporting viewport height and scroll offsets.
/// - Rendering is exposed via zero-allocation iteration (`for_each_row`).
///
/// The scroll offset is the only mutable state. It starts at
/// `options.initial_offset` when the window is created and is updated
/// exclusively through the scroll methods below; recomputing the visible range
/// from it is pure and `O(window length)`, never `O(count)`.
#[derive(Clone, Debug)]
pub struct ListWindow {
    options: WindowOptions,
    scroll_offset: u64,
    is_scrolling: bool,
    scroll_direction: Option<ScrollDirection>,
    last_scroll_event_ms: Option<u64>,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl ListWindow {
    /// Creates a new window from options.
    pub fn new(options: WindowOptions) -> Self {
        wdebug!(
            count = options.count,
            row_height = options.row_height,
            overscan = options.overscan,
            "ListWindow::new"
        );
        Self {
            scroll_offset: options.initial_offset,
            is_scrolling: false,
            scroll_direction: None,
            last_scroll_event_ms: None,
            options,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        }
    }

    pub fn options(&self) -> &WindowOptions {
        &self.options
    }

    /// Replaces the options wholesale.
    ///
    /// The current scroll offset is kept (clamp it yourself if the new
    /// geometry shrinks the scrollable extent).
    ///
    /// # Panics
    ///
    /// Panics if `options.row_height == 0`.
    pub fn set_options(&mut self, options: WindowOptions) {
        assert!(
            options.row_height > 0,
            "row_height must be greater than zero"
        );
        self.options = options;
        wtrace!(
            count = self.options.count,
            row_height = self.options.row_height,
            overscan = self.options.overscan,
            "ListWindow::set_options"
        );
        self.notify();
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut WindowOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&ListWindow, bool) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
        self.notify();
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self, self.is_scrolling);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    ///
    /// On a typical frame an adapter updates the viewport height, the scroll
    /// offset and the scrolling flag together; without batching each setter
    /// would fire `on_change`, which can be expensive when the callback drives
    /// rendering.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    pub fn count(&self) -> usize {
        self.options.count
    }

    pub fn set_count(&mut self, count: usize) {
        if self.options.count == count {
            return;
        }
        self.options.count = count;
        self.notify();
    }

    pub fn row_height(&self) -> u32 {
        self.options.row_height
    }

    /// # Panics
    ///
    /// Panics if `row_height == 0`.
    pub fn set_row_height(&mut self, row_height: u32) {
        assert!(row_height > 0, "row_height must be greater than zero");
        if self.options.row_height == row_height {
            return;
        }
        self.options.row_height = row_height;
        self.notify();
    }

    pub fn overscan(&self) -> usize {
        self.options.overscan
    }

    pub fn set_overscan(&mut self, overscan: usize) {
        self.options.overscan = overscan;
        self.notify();
    }

    pub fn viewport_height(&self) -> u32 {
        self.options.viewport_height
    }

    pub fn set_viewport_height(&mut self, viewport_height: u32) {
        if self.options.viewport_height == viewport_height {
            return;
        }
        self.options.viewport_height = viewport_height;
        self.notify();
    }

    pub fn is_scrolling(&self) -> bool {
        self.is_scrolling
    }

    pub fn scroll_direction(&self) -> Option<ScrollDirection> {
        self.scroll_direction
    }

    pub fn set_is_scrolling(&mut self, is_scrolling: bool) {
        if self.is_scrolling == is_scrolling {
            return;
        }
        self.is_scrolling = is_scrolling;
        if !is_scrolling {
            self.scroll_direction = None;
            self.last_scroll_event_ms = None;
        }
        self.notify();
    }

    pub fn notify_scroll_event(&mut self, now_ms: u64) {
        self.last_scroll_event_ms = Some(now_ms);
        self.set_is_scrolling(true);
    }

    /// Resets `is_scrolling` once no scroll event has arrived for
    /// `scroll_idle_delay_ms`. Call this from your frame/timer tick.
    pub fn update_scrolling(&mut self, now_ms: u64) {
        if !self.is_scrolling {
            return;
        }
        let Some(last) = self.last_scroll_event_ms else {
            return;
        };
        if now_ms.saturating_sub(last) >= self.options.scroll_idle_delay_ms {
            self.set_is_scrolling(false);
        }
    }

    pub fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    pub fn set_scroll_offset(&mut self, offset: u64) {
        if self.scroll_offset == offset {
            return;
        }
        let prev = self.scroll_offset;
        self.scroll_offset = offset;
        self.scroll_direction = match offset.cmp(&prev) {
            cmp::Ordering::Greater => Some(ScrollDirection::Forward),
            cmp::Ordering::Less => Some(ScrollDirection::Backward),
            cmp::Ordering::Equal => self.scroll_direction,
        };
        self.notify();
    }

    pub fn set_scroll_offset_clamped(&mut self, offset: u64) {
        let clamped = self.clamp_scroll_offset(offset);
        self.set_scroll_offset(clamped);
    }

    /// Applies a scroll offset update from your UI layer (e.g. wheel/drag),
    /// and marks the window as scrolling.
    pub fn apply_scroll_event(&mut self, offset: u64, now_ms: u64) {
        wtrace!(offset, now_ms, "apply_scroll_event");
        self.batch_update(|w| {
            w.set_scroll_offset(offset);
            w.notify_scroll_event(now_ms);
        });
    }

    /// Same as `apply_scroll_event`, but clamps the offset.
    pub fn apply_scroll_event_clamped(&mut self, offset: u64, now_ms: u64) {
        wtrace!(offset, now_ms, "apply_scroll_event_clamped");
        self.batch_update(|w| {
            w.set_scroll_offset_clamped(offset);
            w.notify_scroll_event(now_ms);
        });
    }

    pub fn set_viewport_and_scroll(&mut self, viewport_height: u32, scroll_offset: u64) {
        self.batch_update(|w| {
            w.set_viewport_height(viewport_height);
            w.set_scroll_offset(scroll_offset);
        });
    }

    pub fn set_viewport_and_scroll_clamped(&mut self, viewport_height: u32, scroll_offset: u64) {
        self.batch_update(|w| {
            w.set_viewport_height(viewport_height);
            w.set_scroll_offset_clamped(scroll_offset);
        });
    }

    /// Returns a snapshot of the current scroll state.
    pub fn scroll_state(&self) -> ScrollState {
        ScrollState {
            offset: self.scroll_offset,
            is_scrolling: self.is_scrolling,
        }
    }

    /// Restores scroll state from a previously captured snapshot.
    ///
    /// When `state.is_scrolling` is `true`, this updates the internal scrolling
    /// timers as if a scroll event happened at `now_ms`.
    pub fn restore_scroll_state(&mut self, state: ScrollState, now_ms: u64) {
        if state.is_scrolling {
            self.apply_scroll_event_clamped(state.offset, now_ms);
            return;
        }
        self.batch_update(|w| {
            w.set_scroll_offset_clamped(state.offset);
            w.set_is_scrolling(false);
        });
    }

    /// Total spacer height: exactly `count * row_height`.
    pub fn total_height(&self) -> u64 {
        self.options.count as u64 * self.options.row_height as u64
    }

    pub fn max_scroll_offset(&self) -> u64 {
        self.total_height()
            .saturating_sub(self.options.viewport_height as u64)
    }

    pub fn clamp_scroll_offset(&self, offset: u64) -> u64 {
        offset.min(self.max_scroll_offset())
    }

    /// The overscanned range of rows to render for the current scroll state.
    pub fn window_range(&self) -> WindowRange {
        self.window_range_for(self.scroll_offset, self.options.viewport_height)
    }

    /// The overscanned range of rows to render for a given scroll offset and
    /// viewport height.
    ///
    /// `start = max(0, floor(offset / row_height) - overscan)` and the last
    /// index is `min(count - 1, ceil((offset + viewport) / row_height) +
    /// overscan)` (returned as an exclusive `end_index`). Offsets beyond the
    /// maximum scroll extent are clamped first. Empty when the collection or
    /// the viewport is empty.
    pub fn window_range_for(&self, scroll_offset: u64, viewport_height: u32) -> WindowRange {
        let count = self.options.count;
        if count == 0 || viewport_height == 0 {
            return WindowRange::EMPTY;
        }

        let h = self.options.row_height as u64;
        let view = viewport_height as u64;
        let max_scroll = self.total_height().saturating_sub(view);
        let offset = scroll_offset.min(max_scroll);

        let overscan = self.options.overscan;
        let start = ((offset / h) as usize).saturating_sub(overscan);
        let end_inclusive = cmp::min(
            count - 1,
            (ceil_div(offset.saturating_add(view), h) as usize).saturating_add(overscan),
        );

        WindowRange {
            start_index: start,
            end_index: end_inclusive + 1,
        }
    }

    /// The strict visibility range (no overscan): every row at least partially
    /// inside the viewport.
    pub fn visible_range(&self) -> WindowRange {
        self.visible_range_for(self.scroll_offset, self.options.viewport_height)
    }

    pub fn visible_range_for(&self, scroll_offset: u64, viewport_height: u32) -> WindowRange {
        let count = self.options.count;
        if count == 0 || viewport_height == 0 {
            return WindowRange::EMPTY;
        }

        let h = self.options.row_height as u64;
        let view = viewport_height as u64;
        let max_scroll = self.total_height().saturating_sub(view);
        let offset = scroll_offset.min(max_scroll);

        let start = ((offset / h) as usize).min(count - 1);
        let end = (ceil_div(offset.saturating_add(view), h) as usize).min(count);

        WindowRange {
            start_index: start,
            end_index: end,
        }
    }

    /// Maps an absolute offset to the row index it falls in, clamped to the
    /// last row. `None` when the collection is empty.
    pub fn index_at_offset(&self, offset: u64) -> Option<usize> {
        let count = self.options.count;
        if count == 0 {
            return None;
        }
        let h = self.options.row_height as u64;
        Some(((offset / h) as usize).min(count - 1))
    }

    /// Absolute top offset of a row: `index * row_height`.
    pub fn row_top(&self, index: usize) -> Option<u64> {
        (index < self.options.count).then(|| index as u64 * self.options.row_height as u64)
    }

    pub fn row_slot(&self, index: usize) -> Option<RowSlot> {
        let top = self.row_top(index)?;
        Some(RowSlot {
            index,
            top,
            height: self.options.row_height,
        })
    }

    /// Iterates the rows of the current window range, in order.
    ///
    /// Cost is `O(window length)`, independent of `count`.
    pub fn for_each_row(&self, f: impl FnMut(RowSlot)) {
        self.for_each_row_for(self.scroll_offset, self.options.viewport_height, f);
    }

    pub fn for_each_row_for(
        &self,
        scroll_offset: u64,
        viewport_height: u32,
        mut f: impl FnMut(RowSlot),
    ) {
        let range = self.window_range_for(scroll_offset, viewport_height);
        let h = self.options.row_height;
        let mut top = range.start_index as u64 * h as u64;
        for index in range.indexes() {
            f(RowSlot {
                index,
                top,
                height: h,
            });
            top += h as u64;
        }
    }

    /// Collects row slots into `out` (clears `out` first).
    ///
    /// This is a convenience wrapper around [`Self::for_each_row`]; adapters
    /// that render every frame should reuse the scratch buffer.
    pub fn collect_rows(&self, out: &mut Vec<RowSlot>) {
        self.collect_rows_for(self.scroll_offset, self.options.viewport_height, out);
    }

    pub fn collect_rows_for(&self, scroll_offset: u64, viewport_height: u32, out: &mut Vec<RowSlot>) {
        out.clear();
        self.for_each_row_for(scroll_offset, viewport_height, |slot| out.push(slot));
    }

    /// Programmatically scrolls to a row (no animation).
    ///
    /// This sets the scroll offset to the computed (clamped) target and
    /// triggers `on_change`. It does **not** mark the window as "scrolling";
    /// use `apply_scroll_event_clamped(scroll_to_index_offset(...), now_ms)`
    /// for user-scrolling semantics.
    ///
    /// Returns the applied (clamped) offset.
    pub fn scroll_to_index(&mut self, index: usize, align: Align) -> u64 {
        let offset = self.scroll_to_index_offset(index, align);
        self.set_scroll_offset(offset);
        offset
    }

    pub fn scroll_to_index_offset(&self, index: usize, align: Align) -> u64 {
        if self.options.count == 0 {
            return 0;
        }
        let index = index.min(self.options.count - 1);
        let h = self.options.row_height as u64;
        let start = index as u64 * h;
        let end = start + h;
        let view = self.options.viewport_height as u64;

        let target = match align {
            Align::Start => start,
            Align::End => end.saturating_sub(view),
            Align::Center => {
                let center = start + h / 2;
                center.saturating_sub(view / 2)
            }
            Align::Auto => {
                let cur = self.scroll_offset;
                let cur_end = cur.saturating_add(view);
                if start >= cur && end <= cur_end {
                    cur
                } else if start < cur {
                    start
                } else {
                    end.saturating_sub(view)
                }
            }
        };

        self.clamp_scroll_offset(target)
    }
}

fn ceil_div(a: u64, b: u64) -> u64 {
    debug_assert!(b > 0);
    a.div_ceil(b)
}
