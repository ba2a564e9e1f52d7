//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use crate::upstream::FormBackendClient;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Upstream delivery client (absent when no form id is configured)
    pub upstream: Option<Arc<FormBackendClient>>,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create an AppState without an upstream client
    ///
    /// Submissions against this state fail with the misconfiguration
    /// status; the server still comes up so probes and diagnostics work.
    pub fn new(config: ApiConfig) -> Self {
        Self {
            upstream: None,
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Create an AppState with a configured upstream client
    pub fn with_upstream(config: ApiConfig, upstream: Arc<FormBackendClient>) -> Self {
        Self {
            upstream: Some(upstream),
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Check if an upstream client is configured
    pub fn has_upstream(&self) -> bool {
        self.upstream.is_some()
    }
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl ApiConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
