//! Signup delivery
//!
//! How a submitted email leaves the form. The form only needs "try to
//! deliver, tell me if it failed", so the HTTP call sits behind a trait
//! and tests or the demo can slot in a double.

use async_trait::async_trait;
use serde_json::json;
use thiserror::Error;

/// Errors from a delivery attempt
#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("Request error: {0}")]
    Request(String),

    #[error("Rejected with status {0}")]
    Status(u16),
}

/// Forwards a signup to the waitlist endpoint
///
/// Failures never abort the submission flow: the local record is already
/// saved, so the form logs the error and carries on.
#[async_trait]
pub trait SignupDelivery: Send + Sync {
    /// Attempt to deliver `email`
    async fn deliver(&self, email: &str) -> Result<(), DeliveryError>;
}

/// Delivery that drops every signup
///
/// Used by the demo and by tests that only exercise local behavior.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullDelivery;

#[async_trait]
impl SignupDelivery for NullDelivery {
    async fn deliver(&self, _email: &str) -> Result<(), DeliveryError> {
        Ok(())
    }
}

/// HTTP delivery to the waitlist proxy
///
/// POSTs `{"email": ...}` to `<base>/api/waitlist` with a JSON content
/// type, the same request the hosted page makes.
pub struct HttpDelivery {
    client: reqwest::Client,
    base_url: String,
}

impl HttpDelivery {
    /// Create a delivery client for the given proxy base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(10))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl SignupDelivery for HttpDelivery {
    async fn deliver(&self, email: &str) -> Result<(), DeliveryError> {
        let url = format!("{}/api/waitlist", self.base_url.trim_end_matches('/'));

        let response = self
            .client
            .post(&url)
            .json(&json!({ "email": email }))
            .send()
            .await
            .map_err(|e| DeliveryError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(DeliveryError::Status(response.status().as_u16()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::routing::post;
    use axum::{Json, Router};
    use std::sync::{Arc, Mutex};
    use tokio::net::TcpListener;

    async fn spawn_stub(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_http_delivery_posts_email_json() {
        let seen: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&seen);

        let router = Router::new().route(
            "/api/waitlist",
            post(move |Json(body): Json<serde_json::Value>| {
                let recorded = Arc::clone(&recorded);
                async move {
                    let email = body["email"].as_str().unwrap_or_default().to_string();
                    recorded.lock().unwrap().push(email);
                    Json(json!({ "ok": true }))
                }
            }),
        );

        let base = spawn_stub(router).await;
        let delivery = HttpDelivery::new(base);

        delivery.deliver("user@example.com").await.unwrap();

        assert_eq!(*seen.lock().unwrap(), vec!["user@example.com".to_string()]);
    }

    #[tokio::test]
    async fn test_http_delivery_surfaces_error_status() {
        let router = Router::new().route(
            "/api/waitlist",
            post(|| async { (StatusCode::BAD_GATEWAY, Json(json!({ "error": "Submission failed" }))) }),
        );

        let base = spawn_stub(router).await;
        let delivery = HttpDelivery::new(base);

        let err = delivery.deliver("user@example.com").await.unwrap_err();
        match err {
            DeliveryError::Status(status) => assert_eq!(status, 502),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_null_delivery_always_succeeds() {
        NullDelivery.deliver("user@example.com").await.unwrap();
    }
}
