//! Sketch configuration
//!
//! Built once at startup and then only ever read. The browser entry accepts
//! a JSON override; any field left out keeps its default.

use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::consts::*;
use crate::error::{Error, Result};

/// Per-particle tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    /// Size of each particle in pixels
    pub radius: f32,
    /// Distance travelled per step
    pub speed: f32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            radius: PARTICLE_RADIUS,
            speed: PARTICLE_SPEED,
        }
    }
}

/// Everything tunable about the sketch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Id of the canvas element to draw on
    pub canvas_id: String,
    /// Milliseconds between simulation steps
    pub time_step_ms: f64,
    /// How many particles to spawn on load
    pub particle_count: usize,
    pub particle: ParticleConfig,
    /// Fill laid over each frame; lower alpha = longer trails
    pub background: Rgba,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas_id: CANVAS_ID.to_string(),
            time_step_ms: TIME_STEP_MS,
            particle_count: PARTICLE_COUNT,
            particle: ParticleConfig::default(),
            background: BACKGROUND,
        }
    }
}

impl Config {
    /// Parse a (possibly partial) JSON document and validate the result
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.canvas_id.trim().is_empty() {
            return Err(Error::InvalidConfig("canvas_id must not be empty".into()));
        }
        if !self.time_step_ms.is_finite() || self.time_step_ms <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "time_step_ms must be positive, got {}",
                self.time_step_ms
            )));
        }
        if !self.particle.radius.is_finite() || self.particle.radius <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "particle.radius must be positive, got {}",
                self.particle.radius
            )));
        }
        if !self.particle.speed.is_finite() || self.particle.speed < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "particle.speed must be non-negative, got {}",
                self.particle.speed
            )));
        }
        if !(0.0..=1.0).contains(&self.background.a) {
            return Err(Error::InvalidConfig(format!(
                "background alpha must be within [0, 1], got {}",
                self.background.a
            )));
        }
        Ok(())
    }
}
