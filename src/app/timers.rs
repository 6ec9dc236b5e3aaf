//! Runs [`TimerDriven`] widgets on browser timeouts.

use leptos::prelude::*;

use crate::timer::{Schedule, TimerDriven};

/// Owns a widget in a signal and keeps at most one browser timeout armed for
/// it. Dropping the owning component clears the timeout and cancels the
/// widget's timers.
pub struct TimerDriver<W: 'static> {
    state: RwSignal<W>,
    handle: StoredValue<Option<TimeoutHandle>>,
}

impl<W> Clone for TimerDriver<W> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<W> Copy for TimerDriver<W> {}

impl<W> TimerDriver<W>
where
    W: TimerDriven + Send + Sync + 'static,
{
    pub fn new(widget: W) -> Self {
        let driver = Self {
            state: RwSignal::new(widget),
            handle: StoredValue::new(None),
        };
        on_cleanup(move || driver.teardown());
        driver
    }

    pub fn with<R>(&self, f: impl FnOnce(&W) -> R) -> R {
        self.state.with(f)
    }

    /// Mutates the widget and arms whatever timer the mutation asked for.
    /// Must not be called while rendering on the server.
    pub fn run(&self, f: impl FnOnce(&mut W) -> Option<Schedule>) {
        let next = self.state.try_update(f).flatten();
        if let Some(schedule) = next {
            self.arm(schedule);
        }
    }

    /// Mutates the widget without touching timers.
    pub fn update(&self, f: impl FnOnce(&mut W)) {
        self.state.update(f);
    }

    fn arm(self, Schedule { token, delay }: Schedule) {
        self.clear();
        let res = set_timeout_with_handle(
            move || {
                self.handle.try_update_value(|h| *h = None);
                self.run(|w| w.on_timer(token));
            },
            delay,
        );
        match res {
            Ok(handle) => {
                self.handle.try_update_value(|h| *h = Some(handle));
            }
            Err(e) => log::warn!("could not set timeout: {e:?}"),
        }
    }

    fn clear(&self) {
        if let Some(Some(handle)) = self.handle.try_update_value(Option::take) {
            handle.clear();
        }
    }

    fn teardown(self) {
        self.clear();
        self.state.try_update_untracked(|w| w.cancel_timers());
    }
}
