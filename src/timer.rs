//! Cancelable timers for widgets that never block.
//!
//! A widget owns one [`TimerSlot`] per logical operation. Starting an operation
//! arms the slot and hands a [`Schedule`] to whoever drives time: the browser
//! (see `app::timers`) or a [`VirtualClock`] in tests. When the timer fires the
//! driver hands the token back through [`TimerDriven::on_timer`]; tokens from
//! superseded or cancelled operations no longer match the slot and are ignored.

use std::collections::BTreeMap;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

/// A request to call back into the widget after `delay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    pub token: TimerToken,
    pub delay: Duration,
}

#[derive(Debug, Default)]
pub struct TimerSlot {
    next: u64,
    armed: Option<TimerToken>,
}

impl TimerSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the slot, invalidating any previously issued token.
    pub fn arm(&mut self, delay: Duration) -> Schedule {
        self.next += 1;
        let token = TimerToken(self.next);
        self.armed = Some(token);
        Schedule { token, delay }
    }

    pub fn cancel(&mut self) {
        self.armed = None;
    }

    /// Returns true exactly once for the currently armed token.
    pub fn fire(&mut self, token: TimerToken) -> bool {
        if self.armed == Some(token) {
            self.armed = None;
            true
        } else {
            false
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }
}

pub trait TimerDriven {
    /// Called when a previously scheduled timer fires. Returns the follow-up
    /// timer, if the operation needs one.
    fn on_timer(&mut self, token: TimerToken) -> Option<Schedule>;

    /// Drops every pending timer; used on teardown.
    fn cancel_timers(&mut self);
}

/// Deterministic clock for driving widgets in tests.
///
/// Timers due at the same instant fire in the order they were scheduled.
#[derive(Debug, Default)]
pub struct VirtualClock {
    now: Duration,
    seq: u64,
    queue: BTreeMap<(Duration, u64), TimerToken>,
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn schedule(&mut self, schedule: Option<Schedule>) {
        if let Some(Schedule { token, delay }) = schedule {
            self.seq += 1;
            self.queue.insert((self.now + delay, self.seq), token);
        }
    }

    /// Moves time forward by `by`, firing every timer that comes due on the
    /// way. Returns how many timers fired (stale ones included).
    pub fn advance<W: TimerDriven>(&mut self, widget: &mut W, by: Duration) -> usize {
        let deadline = self.now + by;
        let mut fired = 0;
        while let Some(entry) = self.queue.first_entry() {
            let (due, _) = *entry.key();
            if due > deadline {
                break;
            }
            let token = entry.remove();
            self.now = due;
            fired += 1;
            let next = widget.on_timer(token);
            self.schedule(next);
        }
        self.now = deadline;
        fired
    }

    /// Fires timers until the queue is empty.
    pub fn run_until_idle<W: TimerDriven>(&mut self, widget: &mut W) -> usize {
        let mut fired = 0;
        while let Some(((due, _), _)) = self.queue.first_key_value() {
            let by = due.saturating_sub(self.now);
            fired += self.advance(widget, by);
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter {
        slot: TimerSlot,
        hits: usize,
        repeats: usize,
    }

    impl TimerDriven for Counter {
        fn on_timer(&mut self, token: TimerToken) -> Option<Schedule> {
            if !self.slot.fire(token) {
                return None;
            }
            self.hits += 1;
            if self.hits < self.repeats {
                Some(self.slot.arm(Duration::from_millis(10)))
            } else {
                None
            }
        }

        fn cancel_timers(&mut self) {
            self.slot.cancel();
        }
    }

    fn counter(repeats: usize) -> Counter {
        Counter {
            slot: TimerSlot::new(),
            hits: 0,
            repeats,
        }
    }

    #[test]
    fn test_rearm_invalidates_previous_token() {
        let mut slot = TimerSlot::new();
        let first = slot.arm(Duration::from_millis(5));
        let second = slot.arm(Duration::from_millis(5));
        assert!(!slot.fire(first.token));
        assert!(slot.is_armed());
        assert!(slot.fire(second.token));
        assert!(!slot.fire(second.token));
    }

    #[test]
    fn test_cancelled_token_never_fires() {
        let mut slot = TimerSlot::new();
        let s = slot.arm(Duration::from_millis(5));
        slot.cancel();
        assert!(!slot.fire(s.token));
    }

    #[test]
    fn test_clock_fires_follow_ups_in_order() {
        let mut c = counter(3);
        let mut clock = VirtualClock::new();
        clock.schedule(Some(c.slot.arm(Duration::from_millis(10))));

        assert_eq!(clock.advance(&mut c, Duration::from_millis(9)), 0);
        assert_eq!(clock.advance(&mut c, Duration::from_millis(1)), 1);
        assert_eq!(clock.advance(&mut c, Duration::from_millis(100)), 2);
        assert_eq!(c.hits, 3);
        assert_eq!(clock.pending(), 0);
        assert_eq!(clock.now(), Duration::from_millis(110));
    }

    #[test]
    fn test_stale_entries_are_drained_but_ignored() {
        let mut c = counter(1);
        let mut clock = VirtualClock::new();
        clock.schedule(Some(c.slot.arm(Duration::from_millis(10))));
        c.cancel_timers();
        assert_eq!(clock.run_until_idle(&mut c), 1);
        assert_eq!(c.hits, 0);
    }
}
