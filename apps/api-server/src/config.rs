//! Application configuration loaded from environment variables.

use std::env;

use feed_core::Latency;

use crate::telemetry::TelemetryConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub latency: Latency,
    /// Load the bundled dataset at startup.
    pub seed: bool,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            latency: Self::latency_from_env(),
            seed: flag("SEED_DATA", true),
            telemetry: TelemetryConfig::from_env(),
        }
    }

    /// SIMULATED_LATENCY=false turns pauses off; LATENCY_SCALE stretches them.
    fn latency_from_env() -> Latency {
        if !flag("SIMULATED_LATENCY", true) {
            return Latency::disabled();
        }
        let scale = env::var("LATENCY_SCALE")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(1.0);
        Latency::simulated(scale)
    }
}

/// Boolean env var; anything but "false" or "0" counts as set.
fn flag(name: &str, default: bool) -> bool {
    env::var(name)
        .map(|v| parse_flag(&v))
        .unwrap_or(default)
}

fn parse_flag(value: &str) -> bool {
    let value = value.trim().to_lowercase();
    value != "false" && value != "0"
}
