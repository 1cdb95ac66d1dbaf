//! Application state - shared across all handlers.

use feed_core::{FeedServices, Latency, RepoError};
use feed_infra::InMemoryStores;

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub services: FeedServices,
    pub latency: Latency,
}

impl AppState {
    /// Build the stores and services described by `config`.
    pub fn new(config: &AppConfig) -> Result<Self, RepoError> {
        let stores = if config.seed {
            InMemoryStores::seeded()?
        } else {
            tracing::warn!("SEED_DATA=false. Starting with empty stores.");
            InMemoryStores::empty()
        };

        tracing::info!(
            latency_enabled = config.latency.is_enabled(),
            "Application state initialized"
        );

        Ok(Self::from_stores(&stores, config.latency))
    }

    pub fn from_stores(stores: &InMemoryStores, latency: Latency) -> Self {
        Self {
            services: stores.services(latency),
            latency,
        }
    }
}
