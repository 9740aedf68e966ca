// Example: a windowed customers table, driven by simulated scroll events.
use rowwindow::WindowOptions;
use rowwindow_table::{Column, TableView};

#[derive(Clone, Debug)]
struct Customer {
    id: u64,
    name: String,
    phone: Option<String>,
}

fn main() {
    let customers: Vec<Customer> = (0..10_000)
        .map(|i| Customer {
            id: i,
            name: format!("Customer {i}"),
            phone: (i % 3 != 0).then(|| format!("+1-555-{i:04}")),
        })
        .collect();

    let mut view = TableView::new(
        WindowOptions::new(0, 50)
            .with_viewport_height(400)
            .with_overscan(5),
        vec![
            Column::field("Name", |c: &Customer| Some(c.name.clone())).with_width(200),
            Column::field("Phone", |c: &Customer| c.phone.clone()),
            Column::custom("Row", |_c, index| format!("{}", index + 1)),
        ],
    )
    .with_row_key(|c: &Customer| c.id)
    .with_on_row_activate(|c, index| println!("activated {} at index {index}", c.name));

    view.render(&customers);
    view.on_scroll(123_450, 0);
    let frame = view.render(&customers);

    println!(
        "spacer={}px offset_y={}px rows={} {}",
        frame.total_height,
        frame.offset_y,
        frame.rows.len(),
        frame.indicator().unwrap_or_default()
    );
    for row in frame.rows.iter().take(3) {
        println!("{:>6}px #{:<5} {:?}", row.top, row.index, row.cells);
    }

    // A click 75px into the viewport activates the row under it.
    view.activate_at(&customers, 75);
}
