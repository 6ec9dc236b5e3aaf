use std::time::Duration;

use crate::timer::{Schedule, TimerDriven, TimerSlot, TimerToken};

/// What to draw after the revealed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    Blinking,
    Caret,
    Hidden,
}

/// Reveals `text` one character at a time, `delay` apart.
#[derive(Debug)]
pub struct TextReveal {
    text: String,
    delay: Duration,
    /// Byte offsets of each char end, so prefixes stay on char boundaries.
    ends: Vec<usize>,
    shown: usize,
    keep_caret: bool,
    slot: TimerSlot,
}

impl TextReveal {
    pub fn new(text: impl Into<String>, delay: Duration) -> Self {
        let text = text.into();
        let ends = char_ends(&text);
        Self {
            text,
            delay,
            ends,
            shown: 0,
            keep_caret: false,
            slot: TimerSlot::new(),
        }
    }

    /// Leave a static caret behind once the text is fully shown.
    pub fn with_caret(mut self) -> Self {
        self.keep_caret = true;
        self
    }

    /// Starts (or restarts) revealing from the empty prefix.
    pub fn start(&mut self) -> Option<Schedule> {
        self.shown = 0;
        self.slot.cancel();
        if self.ends.is_empty() {
            return None;
        }
        Some(self.slot.arm(self.delay))
    }

    /// Points the effect at a new target. Identical text and delay keep the
    /// running sequence; anything else abandons it and starts over.
    pub fn retarget(&mut self, text: &str, delay: Duration) -> Option<Schedule> {
        if self.text == text && self.delay == delay {
            return None;
        }
        log::debug!("typewriter retarget: {text:?}");
        self.text = text.to_string();
        self.ends = char_ends(text);
        self.delay = delay;
        self.start()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The currently visible prefix.
    pub fn prefix(&self) -> &str {
        match self.shown {
            0 => "",
            n => &self.text[..self.ends[n - 1]],
        }
    }

    pub fn is_complete(&self) -> bool {
        self.shown == self.ends.len()
    }

    pub fn cursor(&self) -> Cursor {
        if !self.is_complete() {
            Cursor::Blinking
        } else if self.keep_caret {
            Cursor::Caret
        } else {
            Cursor::Hidden
        }
    }
}

impl TimerDriven for TextReveal {
    fn on_timer(&mut self, token: TimerToken) -> Option<Schedule> {
        if !self.slot.fire(token) || self.is_complete() {
            return None;
        }
        self.shown += 1;
        if self.is_complete() {
            None
        } else {
            Some(self.slot.arm(self.delay))
        }
    }

    fn cancel_timers(&mut self) {
        self.slot.cancel();
    }
}

fn char_ends(text: &str) -> Vec<usize> {
    text.char_indices().map(|(i, c)| i + c.len_utf8()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::VirtualClock;

    const D: Duration = Duration::from_millis(50);

    // Drive the effect one tick at a time, collecting every visible prefix.
    fn collect_prefixes(reveal: &mut TextReveal, clock: &mut VirtualClock) -> Vec<String> {
        let mut seen = Vec::new();
        while clock.pending() > 0 {
            clock.advance(reveal, D);
            if seen.last().map(String::as_str) != Some(reveal.prefix()) {
                seen.push(reveal.prefix().to_string());
            }
        }
        seen
    }

    #[test]
    fn test_reveals_every_prefix_once() {
        let mut reveal = TextReveal::new("whoami", D);
        let mut clock = VirtualClock::new();
        clock.schedule(reveal.start());

        let seen = collect_prefixes(&mut reveal, &mut clock);
        assert_eq!(seen, vec!["w", "wh", "who", "whoa", "whoam", "whoami"]);
        for pair in seen.windows(2) {
            assert_eq!(pair[1].chars().count(), pair[0].chars().count() + 1);
            assert!(pair[1].starts_with(&pair[0]));
        }
        assert!(reveal.is_complete());
        assert_eq!(clock.now(), D * 6);
    }

    #[test]
    fn test_nothing_shown_before_first_delay() {
        let mut reveal = TextReveal::new("ls", D);
        let mut clock = VirtualClock::new();
        clock.schedule(reveal.start());
        clock.advance(&mut reveal, D - Duration::from_millis(1));
        assert_eq!(reveal.prefix(), "");
        assert_eq!(reveal.cursor(), Cursor::Blinking);
    }

    #[test]
    fn test_empty_text_completes_without_emissions() {
        let mut reveal = TextReveal::new("", D);
        assert_eq!(reveal.start(), None);
        assert!(reveal.is_complete());
        assert_eq!(reveal.cursor(), Cursor::Hidden);
    }

    #[test]
    fn test_multibyte_prefixes_stay_on_char_boundaries() {
        let mut reveal = TextReveal::new("→✓", D);
        let mut clock = VirtualClock::new();
        clock.schedule(reveal.start());
        clock.advance(&mut reveal, D);
        assert_eq!(reveal.prefix(), "→");
        clock.run_until_idle(&mut reveal);
        assert_eq!(reveal.prefix(), "→✓");
    }

    #[test]
    fn test_retarget_cancels_stale_tick() {
        let mut reveal = TextReveal::new("docker ps -a", D);
        let mut clock = VirtualClock::new();
        clock.schedule(reveal.start());
        clock.advance(&mut reveal, D * 3);
        assert_eq!(reveal.prefix(), "doc");

        // the old pending tick is still queued; it must not touch the new text
        clock.schedule(reveal.retarget("ping", D * 2));
        assert_eq!(reveal.prefix(), "");
        clock.advance(&mut reveal, D);
        assert_eq!(reveal.prefix(), "");
        clock.advance(&mut reveal, D);
        assert_eq!(reveal.prefix(), "p");
        clock.run_until_idle(&mut reveal);
        assert_eq!(reveal.prefix(), "ping");
    }

    #[test]
    fn test_retarget_same_input_keeps_progress() {
        let mut reveal = TextReveal::new("cat", D);
        let mut clock = VirtualClock::new();
        clock.schedule(reveal.start());
        clock.advance(&mut reveal, D);
        assert_eq!(reveal.retarget("cat", D), None);
        clock.run_until_idle(&mut reveal);
        assert_eq!(reveal.prefix(), "cat");
    }

    #[test]
    fn test_teardown_freezes_progress() {
        let mut reveal = TextReveal::new("abc", D);
        let mut clock = VirtualClock::new();
        clock.schedule(reveal.start());
        clock.advance(&mut reveal, D);
        reveal.cancel_timers();
        clock.run_until_idle(&mut reveal);
        assert_eq!(reveal.prefix(), "a");
    }

    #[test]
    fn test_caret_remains_after_completion() {
        let mut reveal = TextReveal::new("ok", D).with_caret();
        let mut clock = VirtualClock::new();
        clock.schedule(reveal.start());
        clock.run_until_idle(&mut reveal);
        assert_eq!(reveal.cursor(), Cursor::Caret);
    }
}
