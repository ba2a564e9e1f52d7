//! Form backend client
//!
//! HTTP client for the upstream form-backend service. Each validated
//! signup is forwarded as `{"email": ...}` to a project-specific
//! endpoint. The project identifier is the deployment's secret; it lives
//! in server configuration and never appears in client-facing code.

use reqwest::Client;
use serde::Serialize;
use thiserror::Error;

/// Client for the upstream form backend
pub struct FormBackendClient {
    client: Client,
    config: UpstreamConfig,
}

/// Configuration for the upstream form backend
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// Base URL of the form backend (e.g., "https://formspree.io")
    pub base_url: String,
    /// Secret project identifier
    pub form_id: String,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "https://formspree.io".to_string(),
            form_id: String::new(),
            request_timeout_ms: 10_000,
        }
    }
}

impl FormBackendClient {
    /// Create a new client with the given configuration
    pub fn new(config: UpstreamConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(config.request_timeout_ms))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    /// Get the current configuration
    pub fn config(&self) -> &UpstreamConfig {
        &self.config
    }

    /// Submission endpoint for the configured project
    fn submit_url(&self) -> String {
        format!(
            "{}/f/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.form_id
        )
    }

    /// Forward one signup to the form backend
    ///
    /// A single attempt, no retries. The proxy collapses every failure
    /// here into one generic caller-facing status, so the error variants
    /// only matter for logging.
    pub async fn forward(&self, email: &str) -> Result<(), UpstreamError> {
        let body = SubmissionRequest {
            email: email.to_string(),
        };

        let response = self
            .client
            .post(self.submit_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    UpstreamError::Timeout
                } else if e.is_connect() {
                    UpstreamError::Unavailable
                } else {
                    UpstreamError::Request(e)
                }
            })?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(UpstreamError::Status(response.status().as_u16()))
        }
    }
}

// ============================================
// Request DTOs
// ============================================

#[derive(Debug, Serialize)]
struct SubmissionRequest {
    email: String,
}

// ============================================
// Errors
// ============================================

/// Errors that can occur when forwarding to the form backend
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("Form backend unavailable")]
    Unavailable,

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Form backend returned status {0}")]
    Status(u16),

    #[error("Request timeout")]
    Timeout,
}
