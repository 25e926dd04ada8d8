//! Scene: owns every entity and paints the trail fade

use glam::Vec2;
use rand::Rng;

use super::entity::{Entity, Particle};
use crate::color::Rgba;
use crate::config::Config;
use crate::renderer::Surface;

pub struct Scene {
    entities: Vec<Box<dyn Entity>>,
    background: Rgba,
}

impl Scene {
    /// Spawn `config.particle_count` particles inside a surface of `size`
    pub fn new<R: Rng + ?Sized>(config: &Config, size: Vec2, rng: &mut R) -> Self {
        let entities = (0..config.particle_count)
            .map(|_| Box::new(Particle::new(&config.particle, size, rng)) as Box<dyn Entity>)
            .collect();
        Self {
            entities,
            background: config.background,
        }
    }

    /// Scene over any mix of entity kinds
    pub fn with_entities(entities: Vec<Box<dyn Entity>>, background: Rgba) -> Self {
        Self {
            entities,
            background,
        }
    }

    pub fn update(&mut self) {
        for entity in &mut self.entities {
            entity.update();
        }
    }

    /// Fade the previous frame, then draw entities in order
    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.fill(self.background);
        for entity in &self.entities {
            entity.draw(surface);
        }
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
