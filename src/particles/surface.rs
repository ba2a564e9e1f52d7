//! Drawing surface abstraction
//!
//! The particle field draws through this trait so rendering targets stay
//! out of the core crate. A canvas-backed implementation lives with the
//! embedding frontend; headless runs use `NullSurface`.

/// Render target for one animation frame
///
/// `clear` is called once per frame before any circles are drawn.
pub trait Surface: Send {
    /// Erase the previous frame
    fn clear(&mut self);

    /// Draw one filled circle at (`x`, `y`) with the given opacity
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, opacity: f32);
}

/// Surface that discards all drawing
///
/// Used by the demo binary and anywhere the field runs without a display.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn clear(&mut self) {}

    fn fill_circle(&mut self, _x: f32, _y: f32, _radius: f32, _opacity: f32) {}
}
