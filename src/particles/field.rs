//! Particle field simulation
//!
//! A field of slowly rising dots sized to the viewport. Density is fixed
//! at one particle per 12 000 square units, so a 1200x800 view holds 80
//! particles and a phone-sized view proportionally fewer.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::surface::Surface;

/// Square units of viewport area per particle
pub const AREA_PER_PARTICLE: f32 = 12_000.0;

/// Distance past the edge before a particle wraps to the opposite side
pub const WRAP_MARGIN: f32 = 10.0;

/// One dot in the field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub vx: f32,
    pub vy: f32,
    pub opacity: f32,
}

/// The particle field
///
/// Owns its particles and its randomness. Velocities are fixed at spawn:
/// `vy` is always negative so every particle drifts upward, while `vx`
/// gives a slight sideways wander in either direction.
pub struct ParticleField {
    width: f32,
    height: f32,
    particles: Vec<Particle>,
    rng: StdRng,
}

impl ParticleField {
    /// Create a field sized to the given viewport, seeded from the OS
    pub fn new(width: f32, height: f32) -> Self {
        Self::from_rng(width, height, StdRng::from_entropy())
    }

    /// Create a field with a fixed seed, for deterministic runs
    pub fn with_seed(width: f32, height: f32, seed: u64) -> Self {
        Self::from_rng(width, height, StdRng::seed_from_u64(seed))
    }

    fn from_rng(width: f32, height: f32, rng: StdRng) -> Self {
        let mut field = Self {
            width,
            height,
            particles: Vec::new(),
            rng,
        };
        field.populate();
        field
    }

    /// Particle count for a viewport of the given size
    pub fn target_count(width: f32, height: f32) -> usize {
        ((width * height) / AREA_PER_PARTICLE).floor() as usize
    }

    fn populate(&mut self) {
        let count = Self::target_count(self.width, self.height);
        self.particles = (0..count).map(|_| self.spawn()).collect();
    }

    fn spawn(&mut self) -> Particle {
        Particle {
            x: self.rng.gen_range(0.0..self.width),
            y: self.rng.gen_range(0.0..self.height),
            radius: self.rng.gen_range(0.5..3.0),
            vx: self.rng.gen_range(-0.15..0.15),
            vy: self.rng.gen_range(-0.5..-0.1),
            opacity: self.rng.gen_range(0.1..0.6),
        }
    }

    /// Advance every particle by one frame
    ///
    /// Particles that drift more than `WRAP_MARGIN` past the top re-enter
    /// below the bottom edge; horizontal overshoot wraps to the opposite
    /// side. Downward wrapping never occurs because `vy` is negative.
    pub fn step(&mut self) {
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;

            if p.y < -WRAP_MARGIN {
                p.y = self.height + WRAP_MARGIN;
            }
            if p.x < -WRAP_MARGIN {
                p.x = self.width + WRAP_MARGIN;
            }
            if p.x > self.width + WRAP_MARGIN {
                p.x = -WRAP_MARGIN;
            }
        }
    }

    /// Adopt new viewport bounds and respawn the field for them
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.populate();
    }

    /// Paint the current frame onto `surface`
    pub fn render(&self, surface: &mut dyn Surface) {
        surface.clear();
        for p in &self.particles {
            surface.fill_circle(p.x, p.y, p.radius, p.opacity);
        }
    }

    /// Current particles, in spawn order
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of live particles
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether the field is empty
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Viewport width
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Viewport height
    pub fn height(&self) -> f32 {
        self.height
    }
}
