/// Identifies one scheduling of a [`Timer`].
///
/// Every call to [`Timer::schedule`] bumps the generation, so a handle captured before a
/// reschedule or a cancel can never fire the newer deadline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimerHandle(u64);

impl TimerHandle {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// A single-slot cancellable deadline.
///
/// The timer holds at most one pending deadline. Scheduling replaces (and thereby cancels)
/// whatever was pending. Hosts drive it in one of two ways:
/// - call [`Timer::poll`] from a frame tick with the current time, or
/// - arm a real platform timer for [`Timer::deadline_ms`] and call [`Timer::fire`] with the
///   captured handle when it goes off.
///
/// The timer never runs callbacks itself; dropping it releases everything.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Timer {
    deadline_ms: Option<u64>,
    generation: u64,
}

impl Timer {
    pub const fn new() -> Self {
        Self {
            deadline_ms: None,
            generation: 0,
        }
    }

    /// Schedules the deadline `delay_ms` after `now_ms`, cancelling any pending one.
    pub fn schedule(&mut self, now_ms: u64, delay_ms: u64) -> TimerHandle {
        self.schedule_at(now_ms.saturating_add(delay_ms))
    }

    /// Schedules an absolute deadline, cancelling any pending one.
    pub fn schedule_at(&mut self, deadline_ms: u64) -> TimerHandle {
        self.generation = self.generation.wrapping_add(1);
        self.deadline_ms = Some(deadline_ms);
        wtrace!(
            generation = self.generation,
            deadline_ms,
            "Timer::schedule"
        );
        TimerHandle(self.generation)
    }

    /// Cancels the pending deadline. Returns `true` if one was pending.
    pub fn cancel(&mut self) -> bool {
        let was_pending = self.deadline_ms.take().is_some();
        if was_pending {
            // Invalidate the outstanding handle too.
            self.generation = self.generation.wrapping_add(1);
        }
        was_pending
    }

    pub fn is_pending(&self) -> bool {
        self.deadline_ms.is_some()
    }

    pub fn deadline_ms(&self) -> Option<u64> {
        self.deadline_ms
    }

    /// Returns the handle of the pending deadline, if any.
    pub fn handle(&self) -> Option<TimerHandle> {
        self.deadline_ms.map(|_| TimerHandle(self.generation))
    }

    pub fn is_current(&self, handle: TimerHandle) -> bool {
        self.deadline_ms.is_some() && handle.0 == self.generation
    }

    /// Milliseconds left until the deadline (zero once it has passed).
    pub fn remaining_ms(&self, now_ms: u64) -> Option<u64> {
        self.deadline_ms.map(|d| d.saturating_sub(now_ms))
    }

    /// Fires the timer if its deadline has been reached. Fires at most once per schedule.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = None;
                wtrace!(generation = self.generation, now_ms, "Timer::poll fired");
                true
            }
            _ => false,
        }
    }

    /// Fires the timer on behalf of a host timer callback.
    ///
    /// Returns `false` for stale handles (superseded or cancelled schedules).
    pub fn fire(&mut self, handle: TimerHandle) -> bool {
        if !self.is_current(handle) {
            wwarn!(
                handle = handle.0,
                current = self.generation,
                "Timer::fire: stale handle ignored"
            );
            return false;
        }
        self.deadline_ms = None;
        true
    }
}
