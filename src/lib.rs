//! Trailsketch - a fixed-timestep particle sketch with fading trails
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, scene, timestep, RNG helpers)
//! - `driver`: Frame loop state machine and scheduling seam
//! - `renderer`: Drawing surfaces (Canvas 2D, headless recorder)
//! - `platform`: Browser glue
//! - `config`: Frozen, validated configuration

pub mod app;
pub mod color;
pub mod config;
pub mod driver;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use app::bootstrap;
pub use color::{HexColor, Rgba};
pub use config::{Config, ParticleConfig};
pub use driver::{FrameHandle, Loop, LoopState, LoopStats, ManualScheduler, Scheduler};
pub use error::{Error, Result};

/// Default configuration values
pub mod consts {
    use crate::color::Rgba;

    /// Id of the canvas element to draw on
    pub const CANVAS_ID: &str = "canvas-boilerplate";
    /// Milliseconds between updates (~60 fps)
    pub const TIME_STEP_MS: f64 = 16.0;
    pub const PARTICLE_COUNT: usize = 50;
    pub const PARTICLE_RADIUS: f32 = 4.0;
    pub const PARTICLE_SPEED: f32 = 2.0;
    /// Semi-transparent black laid over each frame
    pub const BACKGROUND: Rgba = Rgba::new(0, 0, 0, 0.15);
}
