// Example: throttle a streaming sync-progress feed to one update per 250ms.
use pulse_window::{ThrottleUpdate, Throttled};

fn main() {
    let mut progress = Throttled::new(0u8, 250);
    for (now_ms, pct) in [(0u64, 5u8), (40, 12), (90, 20), (180, 31), (300, 44), (320, 47)] {
        if let Some(shown) = progress.poll(now_ms) {
            println!("{now_ms:>4}ms  show {shown}% (window closed)");
        }
        match progress.set(pct, now_ms) {
            ThrottleUpdate::Emitted => println!("{now_ms:>4}ms  show {pct}%"),
            ThrottleUpdate::Deferred(_) => println!("{now_ms:>4}ms  hold {pct}%"),
            ThrottleUpdate::Unchanged => {}
        }
    }
    let Some(deadline) = progress.deadline_ms() else {
        return;
    };
    if let Some(shown) = progress.poll(deadline) {
        println!("{deadline:>4}ms  show {shown}% (final)");
    }
}
