use crate::{Timer, TimerHandle};

/// A value that only follows its input once the input has been quiet for `delay_ms`.
///
/// Each distinct input restarts the timer; a burst of inputs collapses into a single
/// transition to the last one. Hosts advance it with [`Debounced::poll`] or
/// [`Debounced::fire`].
///
/// ```rust
/// use pulse_window::Debounced;
///
/// let mut query = Debounced::new("", 300);
/// query.set("d", 0);
/// query.set("de", 100);
/// query.set("dea", 200);
/// assert_eq!(query.poll(400), None);
/// assert_eq!(query.poll(500), Some(&"dea"));
/// ```
#[derive(Clone, Debug)]
pub struct Debounced<V> {
    value: V,
    pending: Option<V>,
    delay_ms: u64,
    timer: Timer,
}

impl<V: PartialEq> Debounced<V> {
    pub fn new(value: V, delay_ms: u64) -> Self {
        Self {
            value,
            pending: None,
            delay_ms,
            timer: Timer::new(),
        }
    }

    /// The currently observed (debounced) value.
    pub fn get(&self) -> &V {
        &self.value
    }

    /// The latest input still waiting for the quiet period to elapse.
    pub fn pending(&self) -> Option<&V> {
        self.pending.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.timer.is_pending()
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Changes the delay used by the next scheduled timer.
    ///
    /// An in-flight wait keeps its original deadline; the last input still wins.
    pub fn set_delay_ms(&mut self, delay_ms: u64) {
        self.delay_ms = delay_ms;
    }

    pub fn deadline_ms(&self) -> Option<u64> {
        self.timer.deadline_ms()
    }

    /// Feeds a new input observed at `now_ms`.
    ///
    /// Returns the handle of the (re)started timer, or `None` when the input equals the latest
    /// one and nothing was rescheduled.
    pub fn set(&mut self, value: V, now_ms: u64) -> Option<TimerHandle> {
        // An input that stayed quiet past its deadline settles before the next one is seen.
        if self.timer.poll(now_ms) {
            let _ = self.apply_pending();
        }
        let latest = self.pending.as_ref().unwrap_or(&self.value);
        if *latest == value {
            return None;
        }
        self.pending = Some(value);
        Some(self.timer.schedule(now_ms, self.delay_ms))
    }

    /// Applies the pending input once its deadline has passed.
    ///
    /// Returns the new observed value when a transition happened.
    pub fn poll(&mut self, now_ms: u64) -> Option<&V> {
        if !self.timer.poll(now_ms) {
            return None;
        }
        self.apply_pending()
    }

    /// Applies the pending input on behalf of a host timer callback.
    ///
    /// Stale handles are ignored.
    pub fn fire(&mut self, handle: TimerHandle) -> Option<&V> {
        if !self.timer.fire(handle) {
            return None;
        }
        self.apply_pending()
    }

    /// Applies the pending input immediately, skipping the rest of the quiet period.
    pub fn flush(&mut self) -> Option<&V> {
        self.timer.cancel();
        self.apply_pending()
    }

    /// Drops the pending input and its timer. Returns the discarded input.
    pub fn cancel(&mut self) -> Option<V> {
        self.timer.cancel();
        self.pending.take()
    }

    pub fn into_inner(self) -> V {
        self.value
    }

    fn apply_pending(&mut self) -> Option<&V> {
        let next = self.pending.take()?;
        // A burst that ends where it started is not a transition.
        if next == self.value {
            return None;
        }
        self.value = next;
        Some(&self.value)
    }
}
