//! Headless surface that records draw calls
//!
//! Backs the native binary and the tests.

use glam::Vec2;
use serde::Serialize;

use super::surface::Surface;
use crate::color::{HexColor, Rgba};

/// One recorded draw call
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum DrawCommand {
    Fill { color: Rgba },
    Circle { center: Vec2, radius: f32, color: HexColor },
}

#[derive(Debug, Clone)]
pub struct RecordingSurface {
    size: Vec2,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of full-surface fills, i.e. trail layers laid down
    pub fn fill_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Fill { .. }))
            .count()
    }

    /// Commands since the most recent fill (the last frame drawn)
    pub fn last_frame(&self) -> &[DrawCommand] {
        let start = self
            .commands
            .iter()
            .rposition(|c| matches!(c, DrawCommand::Fill { .. }))
            .unwrap_or(0);
        &self.commands[start..]
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn fill(&mut self, color: Rgba) {
        self.commands.push(DrawCommand::Fill { color });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: HexColor) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }
}
