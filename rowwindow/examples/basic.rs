// Example: minimal usage and scroll-to helper.
use rowwindow::{Align, ListWindow, WindowOptions};

fn main() {
    let mut w = ListWindow::new(
        WindowOptions::new(1_000_000, 50)
            .with_viewport_height(400)
            .with_overscan(5),
    );
    w.apply_scroll_event_clamped(123_456, 0);

    let mut rows = Vec::new();
    w.collect_rows(&mut rows);
    println!("total_height={}", w.total_height());
    println!("window_range={:?}", w.window_range());
    println!("first_row={:?}", rows.first());

    let off = w.scroll_to_index_offset(999_999, Align::End);
    w.set_scroll_offset_clamped(off);
    println!("after scroll_to_index: offset={}", w.scroll_offset());
}
