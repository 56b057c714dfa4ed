//! Application state management
//!
//! Conversions are stateless; the shared state only carries the server
//! configuration and the metrics counters.

use chrono::{DateTime, Utc};

use crate::config::ServerConfig;
use crate::metrics::Metrics;

/// Application state shared across all handlers
pub struct AppState {
    /// Server configuration
    pub config: ServerConfig,

    /// Request and conversion counters
    pub metrics: Metrics,

    /// Wall-clock start time, reported by the stats endpoint
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Create a new AppState with the given configuration
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            metrics: Metrics::new(),
            started_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new(ServerConfig::default());
        assert_eq!(state.config.port, 3000);
        assert_eq!(state.metrics.snapshot().conversions, 0);
        assert!(state.started_at <= Utc::now());
    }
}
