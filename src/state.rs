// src/state.rs
use std::sync::Arc;

use reqwest::Client;

use crate::config::RelayConfig;

pub type SharedState = Arc<AppState>;

/// Read-only per-process state. Handlers never mutate it.
pub struct AppState {
    pub relay: RelayConfig,
    /// Pooled client reused by every request.
    pub client: Client,
}

impl AppState {
    pub fn new(relay: RelayConfig) -> Self {
        Self {
            relay,
            client: Client::new(),
        }
    }

    pub fn shared(relay: RelayConfig) -> SharedState {
        Arc::new(Self::new(relay))
    }
}
