use crate::*;

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_u64(&mut self, start: u64, end_exclusive: u64) -> u64 {
        debug_assert!(start < end_exclusive);
        let span = end_exclusive - start;
        start + (self.next_u64() % span)
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        self.gen_range_u64(start as u64, end_exclusive as u64) as usize
    }

    fn gen_range_u32(&mut self, start: u32, end_exclusive: u32) -> u32 {
        self.gen_range_u64(start as u64, end_exclusive as u64) as u32
    }
}

fn window(count: usize, row_height: u32, viewport: u32, overscan: usize) -> ListWindow {
    ListWindow::new(
        WindowOptions::new(count, row_height)
            .with_viewport_height(viewport)
            .with_overscan(overscan),
    )
}

#[test]
fn range_at_top_of_large_collection() {
    let w = window(1000, 50, 400, 5);
    let r = w.window_range_for(0, 400);
    assert_eq!(r.start_index, 0);
    // ceil(400/50) + overscan(5) = 13 inclusive
    assert_eq!(r.last_index(), Some(13));
    assert_eq!(r.end_index, 14);
}

#[test]
fn range_after_scrolling() {
    let w = window(1000, 50, 400, 5);
    let r = w.window_range_for(1000, 400);
    // floor(1000/50) - 5 = 15, ceil(1400/50) + 5 = 33 inclusive
    assert_eq!(r.start_index, 15);
    assert_eq!(r.last_index(), Some(33));
}

#[test]
fn empty_collection_has_empty_range_and_zero_height() {
    let w = window(0, 50, 400, 5);
    assert!(w.window_range().is_empty());
    assert!(w.visible_range().is_empty());
    assert_eq!(w.total_height(), 0);
    assert_eq!(w.index_at_offset(0), None);

    let mut slots = Vec::new();
    w.collect_rows(&mut slots);
    assert!(slots.is_empty());
}

#[test]
fn zero_viewport_renders_nothing() {
    let w = window(100, 10, 0, 3);
    assert!(w.window_range().is_empty());
}

#[test]
fn total_height_is_exact() {
    let w = window(1000, 50, 400, 5);
    assert_eq!(w.total_height(), 50_000);
    assert_eq!(w.max_scroll_offset(), 49_600);
}

#[test]
fn zero_offset_starts_at_zero_regardless_of_overscan() {
    for overscan in [0usize, 1, 5, 100] {
        let w = window(50, 20, 200, overscan);
        assert_eq!(w.window_range_for(0, 200).start_index, 0);
    }
}

#[test]
fn range_is_clamped_to_collection_bounds() {
    let w = window(10, 10, 50, 4);
    let r = w.window_range_for(u64::MAX, 50);
    assert!(r.end_index <= 10);
    assert!(r.start_index < r.end_index);
    assert_eq!(r.last_index(), Some(9));
}

#[test]
fn range_is_pure_and_idempotent() {
    let w = window(1000, 50, 400, 5);
    for offset in [0u64, 1, 49, 50, 999, 1000, 49_600] {
        assert_eq!(w.window_range_for(offset, 400), w.window_range_for(offset, 400));
    }
}

#[test]
fn start_is_monotone_in_scroll_offset() {
    let w = window(500, 17, 230, 3);
    let mut prev_start = 0usize;
    for offset in (0..w.max_scroll_offset() + 100).step_by(13) {
        let r = w.window_range_for(offset, 230);
        assert!(r.start_index >= prev_start, "offset={offset}");
        prev_start = r.start_index;
    }
}

#[test]
fn window_contains_every_visible_row() {
    let w = window(300, 24, 144, 2);
    for offset in 0..w.max_scroll_offset() {
        let visible = w.visible_range_for(offset, 144);
        let windowed = w.window_range_for(offset, 144);
        assert!(windowed.start_index <= visible.start_index, "offset={offset}");
        assert!(windowed.end_index >= visible.end_index, "offset={offset}");
    }
}

#[test]
fn visible_range_matches_pixel_coverage() {
    let w = window(100, 10, 35, 0);
    // Rows 0..4 cover pixels 0..40; row 3 (30..40) is partially visible.
    let r = w.visible_range_for(0, 35);
    assert_eq!(r.start_index, 0);
    assert_eq!(r.end_index, 4);

    // Offset 5: pixels 5..40, still rows 0..4.
    let r = w.visible_range_for(5, 35);
    assert_eq!(r.start_index, 0);
    assert_eq!(r.end_index, 4);

    // Offset 10: pixels 10..45, rows 1..5.
    let r = w.visible_range_for(10, 35);
    assert_eq!(r.start_index, 1);
    assert_eq!(r.end_index, 5);
}

#[test]
fn random_sweep_holds_bounds_invariants() {
    let mut rng = Lcg::new(0x5eed);
    for _ in 0..2000 {
        let count = rng.gen_range_usize(0, 5000);
        let h = rng.gen_range_u32(1, 200);
        let view = rng.gen_range_u32(0, 2000);
        let overscan = rng.gen_range_usize(0, 20);
        let offset = rng.gen_range_u64(0, 1 << 40);

        let w = window(count, h, view, overscan);
        let r = w.window_range_for(offset, view);

        if count == 0 || view == 0 {
            assert!(r.is_empty());
            continue;
        }
        assert!(r.start_index < r.end_index);
        assert!(r.end_index <= count);
        assert!(r.len() <= count);
        // O(window) bound: visible rows + overscan on both sides + boundary row.
        let visible_rows = (view as usize).div_ceil(h as usize);
        assert!(r.len() <= visible_rows + 2 * overscan + 2);
    }
}

#[test]
fn row_slots_are_positioned_at_index_times_height() {
    let w = window(1000, 50, 400, 2);
    let mut slots = Vec::new();
    w.collect_rows_for(1000, 400, &mut slots);

    let range = w.window_range_for(1000, 400);
    assert_eq!(slots.len(), range.len());
    for slot in &slots {
        assert_eq!(slot.top, slot.index as u64 * 50);
        assert_eq!(slot.height, 50);
        assert_eq!(slot.bottom(), slot.top + 50);
    }
    assert_eq!(slots.first().unwrap().index, range.start_index);
    assert_eq!(slots.last().unwrap().index, range.last_index().unwrap());
}

#[test]
fn index_at_offset_clamps_to_last_row() {
    let w = window(100, 10, 50, 0);
    assert_eq!(w.index_at_offset(0), Some(0));
    assert_eq!(w.index_at_offset(9), Some(0));
    assert_eq!(w.index_at_offset(10), Some(1));
    assert_eq!(w.index_at_offset(10_000), Some(99));
}

#[test]
fn row_top_is_none_out_of_bounds() {
    let w = window(10, 10, 50, 0);
    assert_eq!(w.row_top(0), Some(0));
    assert_eq!(w.row_top(9), Some(90));
    assert_eq!(w.row_top(10), None);
    assert_eq!(w.row_slot(3).unwrap().height, 10);
}

#[test]
fn scroll_event_updates_offset_and_direction() {
    let mut w = window(100, 10, 50, 1);
    w.apply_scroll_event_clamped(200, 0);
    assert_eq!(w.scroll_offset(), 200);
    assert!(w.is_scrolling());
    assert_eq!(w.scroll_direction(), Some(ScrollDirection::Forward));

    w.apply_scroll_event_clamped(100, 10);
    assert_eq!(w.scroll_direction(), Some(ScrollDirection::Backward));

    // Clamped at the maximum scroll extent.
    w.apply_scroll_event_clamped(u64::MAX, 20);
    assert_eq!(w.scroll_offset(), w.max_scroll_offset());
}

#[test]
fn is_scrolling_resets_after_idle_delay() {
    let mut w = ListWindow::new(
        WindowOptions::new(100, 10)
            .with_viewport_height(50)
            .with_scroll_idle_delay_ms(150),
    );
    w.apply_scroll_event(30, 1000);
    assert!(w.is_scrolling());

    w.update_scrolling(1100);
    assert!(w.is_scrolling());

    w.update_scrolling(1150);
    assert!(!w.is_scrolling());
    assert_eq!(w.scroll_direction(), None);
}

#[test]
fn batch_update_coalesces_notifications() {
    let calls = Arc::new(AtomicUsize::new(0));
    let calls2 = Arc::clone(&calls);
    let mut w = ListWindow::new(
        WindowOptions::new(100, 10)
            .with_on_change(Some(move |_: &ListWindow, _| {
                calls2.fetch_add(1, Ordering::SeqCst);
            })),
    );

    w.set_viewport_and_scroll(50, 30);
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    // No-op updates do not notify.
    w.set_scroll_offset(30);
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    w.set_scroll_offset(40);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn on_change_reports_scrolling_flag() {
    let last = Arc::new(AtomicUsize::new(usize::MAX));
    let last2 = Arc::clone(&last);
    let mut w = ListWindow::new(
        WindowOptions::new(100, 10)
            .with_viewport_height(50)
            .with_on_change(Some(move |_: &ListWindow, is_scrolling| {
                last2.store(is_scrolling as usize, Ordering::SeqCst);
            })),
    );

    w.apply_scroll_event(10, 0);
    assert_eq!(last.load(Ordering::SeqCst), 1);

    w.set_is_scrolling(false);
    assert_eq!(last.load(Ordering::SeqCst), 0);
}

#[test]
fn scroll_to_index_alignments() {
    let mut w = window(100, 10, 30, 0);

    assert_eq!(w.scroll_to_index_offset(50, Align::Start), 500);
    assert_eq!(w.scroll_to_index_offset(50, Align::End), 480);
    assert_eq!(w.scroll_to_index_offset(50, Align::Center), 490);

    // Auto keeps the offset when the row is already fully visible.
    w.set_scroll_offset(500);
    assert_eq!(w.scroll_to_index_offset(51, Align::Auto), 500);
    assert_eq!(w.scroll_to_index_offset(10, Align::Auto), 100);
    assert_eq!(w.scroll_to_index_offset(90, Align::Auto), 880);

    // Targets are clamped to the scrollable extent; out-of-range indexes clamp
    // to the last row.
    assert_eq!(w.scroll_to_index_offset(99, Align::Start), 970);
    assert_eq!(w.scroll_to_index_offset(1000, Align::End), 970);

    let applied = w.scroll_to_index(0, Align::Start);
    assert_eq!(applied, 0);
    assert_eq!(w.scroll_offset(), 0);
}

#[test]
fn scroll_state_roundtrip() {
    let mut w = window(100, 10, 50, 1);
    w.apply_scroll_event_clamped(300, 0);
    let state = w.scroll_state();
    assert_eq!(state.offset, 300);
    assert!(state.is_scrolling);

    let mut w2 = window(100, 10, 50, 1);
    w2.restore_scroll_state(state, 50);
    assert_eq!(w2.scroll_offset(), 300);
    assert!(w2.is_scrolling());

    let mut w3 = window(100, 10, 50, 1);
    w3.restore_scroll_state(
        ScrollState {
            offset: 300,
            is_scrolling: false,
        },
        50,
    );
    assert_eq!(w3.scroll_offset(), 300);
    assert!(!w3.is_scrolling());
}

#[test]
fn set_count_shrinks_the_range() {
    let mut w = window(1000, 50, 400, 5);
    w.set_scroll_offset_clamped(1000);
    assert_eq!(w.window_range().start_index, 15);

    w.set_count(5);
    let r = w.window_range();
    assert!(r.end_index <= 5);
    assert!(!r.is_empty());
}

#[test]
fn update_options_applies_multiple_fields() {
    let mut w = window(100, 10, 50, 1);
    w.update_options(|o| {
        o.overscan = 7;
        o.viewport_height = 80;
    });
    assert_eq!(w.overscan(), 7);
    assert_eq!(w.viewport_height(), 80);
}

#[test]
#[should_panic(expected = "row_height must be greater than zero")]
fn zero_row_height_is_rejected() {
    let _ = WindowOptions::new(10, 0);
}
