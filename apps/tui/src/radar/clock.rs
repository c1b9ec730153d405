use std::time::{Duration, Instant};

/// A fixed-period schedule checked by the owner's event loop.
///
/// The first tick is due one full period after `start`. Nothing runs on its
/// own: the owner asks how many ticks are due and applies them.
#[derive(Debug, Clone)]
pub struct RecurringClock {
    period: Duration,
    next_due: Instant,
    fired: u64,
}

impl RecurringClock {
    /// A zero `period` gives a clock that never fires.
    pub fn start(period: Duration, now: Instant) -> Self {
        Self {
            period,
            next_due: now + period,
            fired: 0,
        }
    }

    /// Total ticks handed out since `start`.
    pub const fn fired(&self) -> u64 {
        self.fired
    }

    pub const fn next_due(&self) -> Instant {
        self.next_due
    }

    /// Number of ticks whose deadline is at or before `now`.
    ///
    /// Every elapsed deadline is counted exactly once, so a stalled loop
    /// catches up instead of dropping ticks. An instant earlier than the last
    /// call yields zero.
    pub fn due_ticks(&mut self, now: Instant) -> u64 {
        if self.period.is_zero() || now < self.next_due {
            return 0;
        }

        let period_nanos = self.period.as_nanos();
        let overdue_nanos = now.duration_since(self.next_due).as_nanos();
        let due = u64::try_from(overdue_nanos / period_nanos)
            .unwrap_or(u64::MAX - 1)
            .saturating_add(1);

        self.next_due = u32::try_from(due)
            .ok()
            .and_then(|count| self.period.checked_mul(count))
            .and_then(|offset| self.next_due.checked_add(offset))
            .unwrap_or(now + self.period);
        self.fired = self.fired.saturating_add(due);
        due
    }
}
