//! Simulated network latency for the in-process services.

use std::time::Duration;

/// Upper bound on any single simulated pause.
const MAX_DELAY: Duration = Duration::from_secs(60);

/// Latency applied before every service call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Latency {
    enabled: bool,
    scale: f64,
}

impl Latency {
    /// No pauses. Used by tests.
    pub const fn disabled() -> Self {
        Self {
            enabled: false,
            scale: 0.0,
        }
    }

    /// Pause for each operation's base delay multiplied by `scale`.
    ///
    /// A scale that is not a positive finite number disables latency.
    pub fn simulated(scale: f64) -> Self {
        if !(scale.is_finite() && scale > 0.0) {
            return Self::disabled();
        }
        Self {
            enabled: true,
            scale,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Effective delay for an operation with the given base delay.
    pub fn delay_for(&self, base_ms: u64) -> Duration {
        if !self.enabled {
            return Duration::ZERO;
        }
        Duration::try_from_secs_f64(base_ms as f64 * self.scale / 1000.0)
            .unwrap_or(MAX_DELAY)
            .min(MAX_DELAY)
    }

    pub async fn pause(&self, base_ms: u64) {
        let delay = self.delay_for(base_ms);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

impl Default for Latency {
    fn default() -> Self {
        Self::simulated(1.0)
    }
}
