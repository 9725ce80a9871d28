//! Repeating timers on a virtual millisecond clock
//!
//! A [`Timer`] only records *when* it is next due. Whoever owns the timer
//! decides what runs when it fires, so the callback never needs a handle back
//! to its owner.

/// A repeating timer with at most one active schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    interval: u64,
    next_due: Option<u64>,
}

impl Timer {
    pub fn new(interval: u64) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    pub fn interval(&self) -> u64 {
        self.interval
    }

    /// Schedule the first firing one interval from `now`. No-op while running.
    pub fn start(&mut self, now: u64) {
        if self.next_due.is_none() {
            self.next_due = Some(now + self.interval);
        }
    }

    /// Cancel the schedule. No-op while stopped.
    pub fn stop(&mut self) {
        self.next_due = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Time of the next firing, if scheduled
    pub fn next_due(&self) -> Option<u64> {
        self.next_due
    }

    /// Consume one firing due at or before `now` and schedule the next one.
    ///
    /// Returns false when stopped or not yet due.
    pub fn fire(&mut self, now: u64) -> bool {
        match self.next_due {
            Some(due) if due <= now => {
                self.next_due = Some(due + self.interval);
                true
            }
            _ => false,
        }
    }
}

/// Pick the earliest due entry at or before `until`.
///
/// Ties go to the entry listed first, which keeps firing order stable for
/// timers started together.
pub fn earliest_due<K: Copy>(timers: &[(K, Option<u64>)], until: u64) -> Option<(K, u64)> {
    let mut best: Option<(K, u64)> = None;
    for &(key, due) in timers {
        if let Some(due) = due {
            if due > until {
                continue;
            }
            match best {
                Some((_, best_due)) if best_due <= due => {}
                _ => best = Some((key, due)),
            }
        }
    }
    best
}

/// Turns wall-clock frame timestamps into whole virtual milliseconds.
///
/// Gaps longer than `max_step` (a backgrounded tab, a debugger pause) are
/// cut down so the game never replays a burst of stale ticks. Fractions of a
/// millisecond carry over to the next frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameClock {
    last: Option<f64>,
    carry: f64,
    max_step: u64,
}

impl FrameClock {
    pub fn new(max_step: u64) -> Self {
        Self {
            last: None,
            carry: 0.0,
            max_step,
        }
    }

    /// Milliseconds to advance for a frame stamped `now_ms`. The first frame yields 0.
    pub fn delta(&mut self, now_ms: f64) -> u64 {
        let Some(last) = self.last.replace(now_ms) else {
            return 0;
        };
        let elapsed = (now_ms - last).clamp(0.0, self.max_step as f64) + self.carry;
        let whole = elapsed.floor();
        self.carry = elapsed - whole;
        whole as u64
    }

    /// Forget the previous timestamp, e.g. after the page was hidden
    pub fn reset(&mut self) {
        self.last = None;
        self.carry = 0.0;
    }
}
