//! Drawing surface abstraction

use glam::Vec2;

use crate::color::{HexColor, Rgba};

/// Anything a scene can paint onto.
///
/// Calls are fire-and-forget: implementations log host failures instead of
/// returning them, a dropped frame is never worth stopping the sketch over.
pub trait Surface {
    /// Width and height in pixels
    fn size(&self) -> Vec2;

    /// Fill the whole surface, blending with what is already there
    fn fill(&mut self, color: Rgba);

    /// Filled circle
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: HexColor);
}
