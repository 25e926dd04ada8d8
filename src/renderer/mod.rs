//! Rendering module
//!
//! Scenes draw through the `Surface` trait: Canvas 2D in the browser, a
//! command recorder everywhere else.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recording;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use recording::{DrawCommand, RecordingSurface};
pub use surface::Surface;
