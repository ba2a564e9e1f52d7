//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};

// ============================================
// WAITLIST DTOs
// ============================================

/// Waitlist submission request
#[derive(Debug, Deserialize)]
pub struct WaitlistRequest {
    /// Submitted email address; absence is treated as invalid input
    #[serde(default)]
    pub email: Option<String>,
}

/// Waitlist submission acknowledgement
#[derive(Debug, Serialize)]
pub struct WaitlistAck {
    /// Always true; failures use the error body instead
    pub ok: bool,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health status response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: "healthy"
    pub status: String,
    /// Upstream client state: "configured" or "absent"
    pub upstream: String,
    /// Seconds since server start
    pub uptime_seconds: u64,
    /// Crate version
    pub version: String,
}
