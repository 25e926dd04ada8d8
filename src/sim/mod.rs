//! Simulation module
//!
//! Everything that moves lives here. This module must stay deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (collection order)
//! - Drawing only through the `Surface` trait

pub mod entity;
pub mod random;
pub mod scene;
pub mod timestep;

pub use entity::{Entity, Particle};
pub use random::{random_color, random_int};
pub use scene::Scene;
pub use timestep::FixedTimestep;
