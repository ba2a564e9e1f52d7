//! # Sorta
//!
//! Waitlist Landing System - A full-stack Rust application for collecting,
//! storing, and relaying waitlist signups for a product landing page.
//!
//! ## Features
//!
//! - **Durable signups**: JSON-file store with atomic writes and duplicate detection
//! - **Ambient animation**: density-scaled particle field driven by a cancellable task
//! - **Form flow**: submit state machine with success overlay and automatic reset
//! - **Admin tools**: hidden panel with stats, CSV export, and guarded clear
//! - **Server proxy**: validates emails and relays them to the upstream form backend
//!
//! ## Modules
//!
//! - [`store`]: Signup persistence with pluggable backends
//! - [`particles`]: Background particle animation
//! - [`form`]: Signup form state machine
//! - [`admin`]: Hidden admin panel with export and clear
//! - [`api`]: Proxy server with Axum
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use sorta::form::{NullDelivery, WaitlistForm};
//! use sorta::store::SignupStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Open the signup store
//!     let store = Arc::new(SignupStore::open_json("./sorta_data"));
//!
//!     // Wire up the form; NullDelivery skips network delivery
//!     let form = Arc::new(WaitlistForm::new(Arc::clone(&store), Arc::new(NullDelivery)));
//!
//!     // Take a signup through the submit flow
//!     form.set_input("ada@example.com").await;
//!     if let Some(reset) = form.submit().await {
//!         reset.await?;
//!     }
//!
//!     println!("{} signups on the waitlist", store.count()?);
//!
//!     Ok(())
//! }
//! ```

pub mod admin;
pub mod api;
pub mod config;
pub mod form;
pub mod particles;
pub mod store;
pub mod upstream;

// Re-export top-level types for convenience
pub use store::{
    JsonFileBackend, MemoryBackend, SignupBackend, SignupRecord, SignupStore, StoreError,
    StoreResult, CSV_HEADER, STORE_FILE_NAME,
};

pub use particles::{Animator, NullSurface, Particle, ParticleField, Surface};

pub use form::{
    DeliveryError, FormConfig, FormPhase, FormView, HttpDelivery, NullDelivery, SignupDelivery,
    WaitlistForm,
};

pub use admin::{AdminEntry, AdminPanel, AdminView, ConfirmPrompt, KeyChord};

pub use upstream::{FormBackendClient, UpstreamConfig, UpstreamError};

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use config::{
    AnimationConfig, ApiConfig as ConfigApiConfig, Config, ConfigError, LoggingConfig,
    StoreConfig, UpstreamConfig as ConfigUpstreamConfig,
};
