//! Client configuration from environment variables.

use std::env;
use std::time::Duration;

use mechanics_core::DEFAULT_ERROR_CLEAR;

/// Terminal UI configuration.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Render/input polling cadence.
    pub frame_interval: Duration,
    /// How long error feedback stays before a timed clear.
    pub error_clear: Duration,
    /// Whether to request terminal mouse events. Disabling leaves the
    /// app keyboard-only.
    pub mouse_capture: bool,
}

impl CliConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `PLAYGROUND_FRAME_INTERVAL_MS` - frame cadence (default: 16)
    /// - `PLAYGROUND_ERROR_CLEAR_MS` - error auto-clear delay (default: 1500)
    /// - `PLAYGROUND_MOUSE_CAPTURE` - "false"/"0" disables mouse capture
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(ms) = read_env::<u64>("PLAYGROUND_FRAME_INTERVAL_MS") {
            config.frame_interval = Duration::from_millis(ms.max(8));
        }
        if let Some(ms) = read_env::<u64>("PLAYGROUND_ERROR_CLEAR_MS") {
            config.error_clear = Duration::from_millis(ms);
        }
        if let Ok(raw) = env::var("PLAYGROUND_MOUSE_CAPTURE") {
            config.mouse_capture = !matches!(raw.as_str(), "false" | "0" | "off");
        }

        config
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            frame_interval: Duration::from_millis(16),
            error_clear: DEFAULT_ERROR_CLEAR,
            mouse_capture: true,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
