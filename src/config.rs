use std::time::Duration;

use serde::Deserialize;

pub const SITE_NAME: &str = "neeraj.dev";
pub const SITE_URL: &str = "https://neerajnakka.onrender.com";
pub const BUILD_TIME: &str = env!("BUILD_TIME");

/// Delays used by the simulated, timer-driven widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Timings {
    /// Per-character delay of the typewriter effect.
    #[serde(with = "millis")]
    pub reveal_delay: Duration,
    /// Fake latency between submitting a terminal command and its output.
    #[serde(with = "millis")]
    pub command_latency: Duration,
    /// How long the contact form stays in the submitting state.
    #[serde(with = "millis")]
    pub submit_delay: Duration,
    /// How long the success message is shown before the form resets.
    #[serde(with = "millis")]
    pub success_display: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            reveal_delay: Duration::from_millis(50),
            command_latency: Duration::from_millis(500),
            submit_delay: Duration::from_millis(2000),
            success_display: Duration::from_millis(3000),
        }
    }
}

mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_timings_fill_defaults() {
        let t: Timings = serde_json::from_str(r#"{"command_latency": 10}"#).unwrap();
        assert_eq!(t.command_latency, Duration::from_millis(10));
        assert_eq!(t.reveal_delay, Timings::default().reveal_delay);
        assert_eq!(t.success_display, Duration::from_millis(3000));
    }
}
