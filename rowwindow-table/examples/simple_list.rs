// Example: the simple list variant with a single render function.
use rowwindow::WindowOptions;
use rowwindow_table::ListView;

fn main() {
    let services: Vec<&str> = ["Haircut", "Coloring", "Manicure", "Pedicure", "Massage"]
        .into_iter()
        .cycle()
        .take(5_000)
        .collect();

    let mut list = ListView::new(
        WindowOptions::new(0, 40)
            .with_viewport_height(300)
            .with_overscan(3),
        |name: &&str, index| format!("{}. {name}", index + 1),
    );

    list.render(&services);
    list.on_scroll(10_000, 0);
    let frame = list.render(&services);

    println!(
        "spacer={}px offset_y={}px items={}",
        frame.total_height,
        frame.offset_y,
        frame.items.len()
    );
    for item in frame.items.iter().take(5) {
        println!("{:>6}px {}", item.top, item.content);
    }
}
