// Example: drive a controller from a simulated scroll session.
use pulse_window::WindowOptions;
use pulse_window_adapter::{Clock, Controller, ManualClock, MemorySurface};

fn main() {
    let rows: Vec<u32> = (0..5_000).collect();
    let clock = ManualClock::new(0);
    let mut c = Controller::new(WindowOptions::new(32, 480).with_overscan(2))
        .expect("valid options");
    c.attach(MemorySurface::new(480));

    for step in 1..=5u64 {
        clock.advance(16);
        if let Some(surface) = c.surface_mut() {
            surface.offset = step * 400;
        }
        c.on_scroll(clock.now_ms()).expect("surface attached");
        let w = c.window(&rows);
        println!(
            "t={:>3}ms range={:?} scrolling={}",
            clock.now_ms(),
            w.range,
            w.is_scrolling
        );
    }

    clock.advance(200);
    c.tick_with(&clock);
    println!("after quiet period: scrolling={}", c.is_scrolling());

    c.detach();
}
