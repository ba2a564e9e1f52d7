//! Animation driver
//!
//! Runs the particle field on a background task at a fixed frame interval,
//! painting each frame onto a `Surface`. The loop is cancellable: `stop`
//! flips a shared flag and the task exits at its next tick, so a field can
//! be torn down without aborting the runtime.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, RwLock};
use tokio::time::interval;

use super::field::ParticleField;
use super::surface::Surface;

/// Default frame interval, roughly 60 frames per second
pub const DEFAULT_FRAME_INTERVAL_MS: u64 = 16;

/// Drives a particle field on a background task
pub struct Animator {
    field: Arc<RwLock<ParticleField>>,
    surface: Arc<Mutex<Box<dyn Surface>>>,
    running: Arc<RwLock<bool>>,
    frames: Arc<RwLock<u64>>,
    frame_interval: Duration,
}

impl Animator {
    /// Create an animator with the default frame interval
    pub fn new(field: ParticleField, surface: Box<dyn Surface>) -> Self {
        Self::with_interval(
            field,
            surface,
            Duration::from_millis(DEFAULT_FRAME_INTERVAL_MS),
        )
    }

    /// Create an animator with an explicit frame interval
    pub fn with_interval(
        field: ParticleField,
        surface: Box<dyn Surface>,
        frame_interval: Duration,
    ) -> Self {
        Self {
            field: Arc::new(RwLock::new(field)),
            surface: Arc::new(Mutex::new(surface)),
            running: Arc::new(RwLock::new(false)),
            frames: Arc::new(RwLock::new(0)),
            frame_interval,
        }
    }

    /// Start the animation loop
    ///
    /// Returns the task handle so callers can join after `stop`.
    pub fn start(self: &Arc<Self>) -> tokio::task::JoinHandle<()> {
        let animator = Arc::clone(self);

        tokio::spawn(async move {
            *animator.running.write().await = true;

            let mut ticker = interval(animator.frame_interval);

            loop {
                ticker.tick().await;

                if !*animator.running.read().await {
                    break;
                }

                animator.advance_frame().await;
            }
        })
    }

    /// Stop the animation loop
    ///
    /// The background task exits at its next tick.
    pub async fn stop(&self) {
        *self.running.write().await = false;
    }

    /// Whether the loop is currently running
    pub async fn is_running(&self) -> bool {
        *self.running.read().await
    }

    /// Number of frames painted so far
    pub async fn frames(&self) -> u64 {
        *self.frames.read().await
    }

    /// Current particle count
    pub async fn particle_count(&self) -> usize {
        self.field.read().await.len()
    }

    /// Adopt new viewport bounds, respawning the field for them
    pub async fn resize(&self, width: f32, height: f32) {
        self.field.write().await.resize(width, height);
    }

    /// Advance the simulation one frame and paint it
    ///
    /// The loop calls this on every tick; tests and the demo call it
    /// directly to single-step without a running task.
    pub async fn advance_frame(&self) {
        let mut field = self.field.write().await;
        field.step();

        let mut surface = self.surface.lock().await;
        field.render(surface.as_mut());

        *self.frames.write().await += 1;
    }
}
