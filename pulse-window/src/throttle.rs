use crate::{Timer, TimerHandle};

/// Outcome of feeding an input to a [`Throttled`] value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThrottleUpdate {
    /// The input was reflected immediately and opened a new window.
    Emitted,
    /// The input is held until the current window closes.
    Deferred(TimerHandle),
    /// The input equals the latest one; nothing changed.
    Unchanged,
}

/// A value that follows its input at most once per `limit_ms`.
///
/// The first input is reflected immediately. Inputs arriving inside the window that follows an
/// emission are held; when the window closes, only the most recent held input is emitted, and a
/// new window starts from that emission.
///
/// ```rust
/// use pulse_window::{ThrottleUpdate, Throttled};
///
/// let mut progress = Throttled::new(0u32, 100);
/// assert_eq!(progress.set(10, 0), ThrottleUpdate::Emitted);
/// assert!(matches!(progress.set(20, 30), ThrottleUpdate::Deferred(_)));
/// assert!(matches!(progress.set(30, 60), ThrottleUpdate::Deferred(_)));
/// assert_eq!(*progress.get(), 10);
/// assert_eq!(progress.poll(100), Some(&30));
/// ```
#[derive(Clone, Debug)]
pub struct Throttled<V> {
    value: V,
    pending: Option<V>,
    limit_ms: u64,
    last_emit_ms: Option<u64>,
    timer: Timer,
}

impl<V: PartialEq> Throttled<V> {
    pub fn new(value: V, limit_ms: u64) -> Self {
        Self {
            value,
            pending: None,
            limit_ms,
            last_emit_ms: None,
            timer: Timer::new(),
        }
    }

    pub fn get(&self) -> &V {
        &self.value
    }

    pub fn pending(&self) -> Option<&V> {
        self.pending.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.timer.is_pending()
    }

    pub fn limit_ms(&self) -> u64 {
        self.limit_ms
    }

    /// Changes the limit used from the next window on.
    pub fn set_limit_ms(&mut self, limit_ms: u64) {
        self.limit_ms = limit_ms;
    }

    pub fn deadline_ms(&self) -> Option<u64> {
        self.timer.deadline_ms()
    }

    pub fn last_emit_ms(&self) -> Option<u64> {
        self.last_emit_ms
    }

    /// Feeds a new input observed at `now_ms`.
    pub fn set(&mut self, value: V, now_ms: u64) -> ThrottleUpdate {
        // A boundary nobody polled still emits the held input, at the boundary itself.
        if let Some(deadline) = self.timer.deadline_ms().filter(|&d| d <= now_ms) {
            self.timer.cancel();
            let _ = self.emit_pending(deadline);
        }
        let latest = self.pending.as_ref().unwrap_or(&self.value);
        if *latest == value {
            return ThrottleUpdate::Unchanged;
        }

        let window_end = self
            .last_emit_ms
            .map(|last| last.saturating_add(self.limit_ms));
        match window_end {
            Some(end) if now_ms < end => {
                self.pending = Some(value);
                let handle = match self.timer.handle() {
                    Some(handle) => handle,
                    None => self.timer.schedule_at(end),
                };
                ThrottleUpdate::Deferred(handle)
            }
            _ => {
                self.timer.cancel();
                self.pending = None;
                self.emit(value, now_ms);
                ThrottleUpdate::Emitted
            }
        }
    }

    /// Emits the held input once the window has closed.
    pub fn poll(&mut self, now_ms: u64) -> Option<&V> {
        if !self.timer.poll(now_ms) {
            return None;
        }
        self.emit_pending(now_ms)
    }

    /// Emits the held input on behalf of a host timer callback firing at `now_ms`.
    ///
    /// Stale handles are ignored.
    pub fn fire(&mut self, handle: TimerHandle, now_ms: u64) -> Option<&V> {
        if !self.timer.fire(handle) {
            return None;
        }
        self.emit_pending(now_ms)
    }

    /// Drops the held input and its timer. Returns the discarded input.
    pub fn cancel(&mut self) -> Option<V> {
        self.timer.cancel();
        self.pending.take()
    }

    pub fn into_inner(self) -> V {
        self.value
    }

    fn emit(&mut self, value: V, now_ms: u64) {
        wtrace!(now_ms, "Throttled::emit");
        self.value = value;
        self.last_emit_ms = Some(now_ms);
    }

    fn emit_pending(&mut self, now_ms: u64) -> Option<&V> {
        let next = self.pending.take()?;
        if next == self.value {
            return None;
        }
        self.emit(next, now_ms);
        Some(&self.value)
    }
}
