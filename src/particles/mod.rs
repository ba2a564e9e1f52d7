//! Ambient particle animation
//!
//! The decorative background of the landing page: a field of slowly rising
//! dots, advanced by a cancellable background task and drawn through a
//! pluggable surface.

pub mod animator;
pub mod field;
pub mod surface;

pub use animator::{Animator, DEFAULT_FRAME_INTERVAL_MS};
pub use field::{Particle, ParticleField, AREA_PER_PARTICLE, WRAP_MARGIN};
pub use surface::{NullSurface, Surface};
