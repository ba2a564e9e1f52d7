//! Waitlist signup form
//!
//! Models the landing page's submit flow as a small state machine:
//! `Idle -> Submitting -> Success -> Idle`. A submission records the email
//! locally, attempts network delivery, and always lands on the success
//! state; delivery failures are logged and never shown to the user.

pub mod delivery;

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use crate::store::SignupStore;

pub use delivery::{DeliveryError, HttpDelivery, NullDelivery, SignupDelivery};

/// Where a submission currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// Waiting for input
    Idle,
    /// Recording and delivering a submission
    Submitting,
    /// Showing the success overlay before resetting
    Success,
}

/// Form labels and timing
#[derive(Debug, Clone)]
pub struct FormConfig {
    /// Submit control label while idle
    pub idle_label: String,
    /// Submit control label during submission
    pub busy_label: String,
    /// How long the success overlay stays up before the form resets
    pub success_dwell: Duration,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            idle_label: "Join the waitlist".to_string(),
            busy_label: "Joining...".to_string(),
            success_dwell: Duration::from_secs(3),
        }
    }
}

/// Snapshot of everything a frontend needs to paint the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    /// Current submit control label
    pub label: String,
    /// Whether the submit control accepts clicks
    pub submit_enabled: bool,
    /// Whether the success overlay is showing
    pub overlay_visible: bool,
    /// Current input field contents
    pub input: String,
}

struct FormState {
    phase: FormPhase,
    input: String,
}

/// The waitlist form
///
/// Shared between the frontend event source and the reset task it spawns,
/// so it is used through `Arc`.
pub struct WaitlistForm {
    store: Arc<SignupStore>,
    delivery: Arc<dyn SignupDelivery>,
    config: FormConfig,
    state: Arc<RwLock<FormState>>,
}

impl WaitlistForm {
    /// Create a form with default labels and a 3 second success dwell
    pub fn new(store: Arc<SignupStore>, delivery: Arc<dyn SignupDelivery>) -> Self {
        Self::with_config(store, delivery, FormConfig::default())
    }

    /// Create a form with explicit configuration
    pub fn with_config(
        store: Arc<SignupStore>,
        delivery: Arc<dyn SignupDelivery>,
        config: FormConfig,
    ) -> Self {
        Self {
            store,
            delivery,
            config,
            state: Arc::new(RwLock::new(FormState {
                phase: FormPhase::Idle,
                input: String::new(),
            })),
        }
    }

    /// Replace the input field contents
    pub async fn set_input(&self, text: impl Into<String>) {
        self.state.write().await.input = text.into();
    }

    /// Current input field contents
    pub async fn input(&self) -> String {
        self.state.read().await.input.clone()
    }

    /// Current phase
    pub async fn phase(&self) -> FormPhase {
        self.state.read().await.phase
    }

    /// Snapshot the form for rendering
    pub async fn view(&self) -> FormView {
        let state = self.state.read().await;
        let (label, submit_enabled) = match state.phase {
            FormPhase::Submitting => (self.config.busy_label.clone(), false),
            _ => (self.config.idle_label.clone(), true),
        };

        FormView {
            label,
            submit_enabled,
            overlay_visible: state.phase == FormPhase::Success,
            input: state.input.clone(),
        }
    }

    /// Submit the current input
    ///
    /// An input that trims to empty is ignored and the form stays idle.
    /// Otherwise the email is recorded locally, delivery is attempted, and
    /// the form lands on `Success` regardless of either outcome. Returns
    /// the handle of the scheduled reset task, or `None` for the empty
    /// no-op case.
    pub async fn submit(self: &Arc<Self>) -> Option<tokio::task::JoinHandle<()>> {
        let email = self.state.read().await.input.trim().to_string();
        if email.is_empty() {
            return None;
        }

        self.state.write().await.phase = FormPhase::Submitting;

        // Local record first. A duplicate or a store failure never blocks
        // the submission; both only leave a trace in the logs.
        match self.store.add(&email) {
            Ok(true) => tracing::debug!(email = %email, "Signup recorded"),
            Ok(false) => tracing::debug!(email = %email, "Signup already present"),
            Err(e) => tracing::error!(error = %e, "Failed to record signup"),
        }

        if let Err(e) = self.delivery.deliver(&email).await {
            tracing::warn!(error = %e, "Submission failed");
        }

        self.state.write().await.phase = FormPhase::Success;

        Some(self.schedule_reset())
    }

    /// Spawn the task that ends the success dwell
    ///
    /// The reset only applies if the form is still in `Success` when the
    /// dwell elapses; a submission started in the meantime wins.
    fn schedule_reset(self: &Arc<Self>) -> tokio::task::JoinHandle<()> {
        let form = Arc::clone(self);

        tokio::spawn(async move {
            tokio::time::sleep(form.config.success_dwell).await;

            let mut state = form.state.write().await;
            if state.phase == FormPhase::Success {
                state.phase = FormPhase::Idle;
                state.input.clear();
            }
        })
    }
}
