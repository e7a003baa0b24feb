// Example: window a large deal list and debounce a filter input.
use pulse_window::{Debounced, WindowOptions, compute_window};

fn main() {
    let deals: Vec<String> = (0..10_000).map(|i| format!("Deal #{i}")).collect();
    let options = WindowOptions::new(48, 600).with_overscan(4);

    let window = compute_window(&deals, 24_000, &options).expect("valid options");
    println!("total_height={}", window.total_height);
    println!("visible={:?} rendered={:?}", window.visible, window.range);
    for it in window.virtual_items.iter().take(3) {
        println!("  #{:>5} top={:>6} {}", it.index, it.style.top, it.item);
    }

    let mut filter = Debounced::new(String::new(), 300);
    filter.set("acme".into(), 0);
    filter.set("acme corp".into(), 120);
    assert!(filter.poll(300).is_none());
    if let Some(query) = filter.poll(420) {
        println!("filter settled on {query:?}");
    }
}
