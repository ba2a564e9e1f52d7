//! Waitlist Routes
//!
//! The proxy's single public endpoint.
//!
//! - POST /api/waitlist - Validate an email and relay it upstream

use axum::extract::rejection::JsonRejection;
use axum::{extract::State, Json};
use regex::Regex;
use std::sync::{Arc, OnceLock};

use crate::api::dto::{WaitlistAck, WaitlistRequest};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;

/// Pragmatic email shape check, not an RFC validator
///
/// Matches `local@domain.tld` where no part contains whitespace or a
/// second `@`.
fn email_regex() -> &'static Regex {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    EMAIL_REGEX
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex"))
}

/// Whether `email` looks like an address worth relaying
pub(crate) fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// POST /api/waitlist
///
/// Validate the submitted email and relay it to the form backend.
/// Callers only ever see the normalized statuses from the endpoint
/// contract; upstream detail goes to the log.
pub async fn submit(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<WaitlistRequest>, JsonRejection>,
) -> ApiResult<Json<WaitlistAck>> {
    // A missing, non-JSON, or mistyped body counts as an invalid email.
    let email = payload
        .ok()
        .and_then(|Json(req)| req.email)
        .ok_or(ApiError::InvalidEmail)?;

    if !is_valid_email(&email) {
        return Err(ApiError::InvalidEmail);
    }

    // Configuration is checked after validation, so a bad email reports
    // 400 even on a misconfigured server and never reaches upstream.
    let upstream = state.upstream.as_ref().ok_or(ApiError::Misconfigured)?;

    if let Err(e) = upstream.forward(&email).await {
        tracing::warn!(error = %e, "Upstream submission failed");
        return Err(ApiError::SubmissionFailed);
    }

    Ok(Json(WaitlistAck { ok: true }))
}

/// Any non-POST method on the waitlist endpoint
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last@sub.example.co"));
        assert!(is_valid_email("u+tag@example.io"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("missing@tld"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("spaces in@example.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@.com"));
    }
}
