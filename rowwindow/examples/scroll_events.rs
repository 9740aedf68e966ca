// Example: driving the window from a stream of scroll events and the
// is_scrolling debounce from a frame tick.
use rowwindow::{ListWindow, WindowOptions};

fn main() {
    let mut w = ListWindow::new(
        WindowOptions::new(10_000, 24)
            .with_viewport_height(600)
            .with_overscan(3)
            .with_scroll_idle_delay_ms(150),
    );

    for (offset, now_ms) in [(0u64, 0u64), (240, 16), (960, 33), (2400, 50)] {
        w.apply_scroll_event_clamped(offset, now_ms);
        println!(
            "t={now_ms}ms offset={} range={:?} scrolling={}",
            w.scroll_offset(),
            w.window_range(),
            w.is_scrolling()
        );
    }

    w.update_scrolling(250);
    println!("t=250ms scrolling={}", w.is_scrolling());
}
