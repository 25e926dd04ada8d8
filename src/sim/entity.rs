//! Entities: the things a scene moves and draws

use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

use super::random::{random_color, random_int};
use crate::color::HexColor;
use crate::config::ParticleConfig;
use crate::renderer::Surface;

/// A visual element driven by a scene.
///
/// `update` advances one fixed step; `draw` must not change state.
pub trait Entity {
    fn update(&mut self);
    fn draw(&self, surface: &mut dyn Surface);
}

/// A colored dot that bounces off the edges of the surface.
///
/// `bounds` is the surface size taken when the particle was built; a later
/// canvas resize does not move the walls it bounces off.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: HexColor,
    /// Surface width and height the particle bounces inside
    pub bounds: Vec2,
}

impl Particle {
    /// Drop a particle somewhere random inside `bounds` heading in a random
    /// direction
    pub fn new<R: Rng + ?Sized>(config: &ParticleConfig, bounds: Vec2, rng: &mut R) -> Self {
        let radius = config.radius;
        let x = spawn_coord(rng, radius, bounds.x);
        let y = spawn_coord(rng, radius, bounds.y);

        let angle = rng.random::<f32>() * TAU;
        let vel = Vec2::from_angle(angle) * config.speed;

        Self {
            pos: Vec2::new(x, y),
            vel,
            radius,
            color: random_color(rng),
            bounds,
        }
    }

    /// Particle with explicit state
    pub fn with_state(pos: Vec2, vel: Vec2, radius: f32, color: HexColor, bounds: Vec2) -> Self {
        Self {
            pos,
            vel,
            radius,
            color,
            bounds,
        }
    }

    pub fn min_bound(&self) -> Vec2 {
        Vec2::splat(self.radius)
    }

    pub fn max_bound(&self) -> Vec2 {
        self.bounds - Vec2::splat(self.radius)
    }
}

/// Integer coordinate inside `[radius, extent - radius]`
fn spawn_coord<R: Rng + ?Sized>(rng: &mut R, radius: f32, extent: f32) -> f32 {
    let min = radius.ceil() as i32;
    let max = (extent - radius).floor() as i32;
    random_int(rng, min, max) as f32
}

/// Negate `vel` when `pos` has reached either bound.
///
/// A particle still past the bound on the next step is negated again.
#[inline]
fn bounce(pos: f32, vel: f32, min: f32, max: f32) -> f32 {
    if pos <= min || pos >= max { -vel } else { vel }
}

impl Entity for Particle {
    fn update(&mut self) {
        self.pos += self.vel;

        // Checked on the moved position; overshoot is not corrected
        let (min, max) = (self.min_bound(), self.max_bound());
        self.vel.x = bounce(self.pos.x, self.vel.x, min.x, max.x);
        self.vel.y = bounce(self.pos.y, self.vel.y, min.y, max.y);
    }

    fn draw(&self, surface: &mut dyn Surface) {
        surface.fill_circle(self.pos, self.radius, self.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, RecordingSurface};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const BOUNDS: Vec2 = Vec2::new(100.0, 100.0);

    fn particle(pos: Vec2, vel: Vec2) -> Particle {
        Particle::with_state(pos, vel, 4.0, HexColor(0xFFFFFF), BOUNDS)
    }

    #[test]
    fn test_left_wall_reflects_after_move() {
        let mut p = particle(Vec2::new(4.0, 50.0), Vec2::new(-2.0, 0.0));
        p.update();
        assert_eq!(p.pos.x, 2.0);
        assert_eq!(p.vel.x, 2.0);
        assert_eq!(p.vel.y, 0.0);
    }

    #[test]
    fn test_right_wall_reflects() {
        let mut p = particle(Vec2::new(95.0, 50.0), Vec2::new(1.5, 0.0));
        p.update();
        assert_eq!(p.pos.x, 96.5);
        assert_eq!(p.vel.x, -1.5);
    }

    #[test]
    fn test_landing_on_bound_negates_again() {
        let mut p = particle(Vec2::new(4.0, 50.0), Vec2::new(-2.0, 0.0));
        p.update();
        assert_eq!((p.pos.x, p.vel.x), (2.0, 2.0));
        // Back on the bound at x=4, which still counts as a hit
        p.update();
        assert_eq!(p.pos.x, 4.0);
        assert_eq!(p.vel.x, -2.0);
        p.update();
        assert_eq!((p.pos.x, p.vel.x), (2.0, 2.0));
    }

    #[test]
    fn test_deep_overshoot_negates_every_step() {
        // Still past the bound after the first reflection
        let mut p = particle(Vec2::new(3.0, 50.0), Vec2::new(-0.5, 0.0));
        p.update();
        assert_eq!((p.pos.x, p.vel.x), (2.5, 0.5));
        p.update();
        assert_eq!((p.pos.x, p.vel.x), (3.0, -0.5));
    }

    #[test]
    fn test_bounds_fixed_at_construction() {
        let config = ParticleConfig {
            radius: 4.0,
            speed: 0.0,
        };
        let mut rng = Pcg32::seed_from_u64(8);
        let mut p = Particle::new(&config, Vec2::new(50.0, 40.0), &mut rng);
        assert_eq!(p.max_bound(), Vec2::new(46.0, 36.0));
        p.pos = Vec2::new(46.0, 20.0);
        p.vel = Vec2::new(1.0, 0.0);
        p.update();
        assert_eq!(p.vel.x, -1.0);
    }

    #[test]
    fn test_corner_flips_both_axes() {
        let mut p = particle(Vec2::new(5.0, 5.0), Vec2::new(-2.0, -2.0));
        p.update();
        assert_eq!(p.vel, Vec2::new(2.0, 2.0));
    }

    #[test]
    fn test_interior_move_keeps_velocity() {
        let mut p = particle(Vec2::new(50.0, 50.0), Vec2::new(1.0, -1.0));
        p.update();
        assert_eq!(p.pos, Vec2::new(51.0, 49.0));
        assert_eq!(p.vel, Vec2::new(1.0, -1.0));
    }

    #[test]
    fn test_draw_emits_circle_without_mutating() {
        let p = particle(Vec2::new(10.0, 20.0), Vec2::new(1.0, 1.0));
        let before = p.clone();
        let mut surface = RecordingSurface::new(100.0, 100.0);
        p.draw(&mut surface);
        p.draw(&mut surface);
        assert_eq!(p, before);
        assert_eq!(
            surface.commands()[0],
            DrawCommand::Circle {
                center: Vec2::new(10.0, 20.0),
                radius: 4.0,
                color: HexColor(0xFFFFFF),
            }
        );
        assert_eq!(surface.commands().len(), 2);
    }

    #[test]
    fn test_velocity_has_configured_speed() {
        let config = ParticleConfig {
            radius: 4.0,
            speed: 2.0,
        };
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..50 {
            let p = Particle::new(&config, BOUNDS, &mut rng);
            assert!((p.vel.length() - 2.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_tiny_surface_spawns_at_lower_bound() {
        let config = ParticleConfig {
            radius: 4.0,
            speed: 0.0,
        };
        let mut rng = Pcg32::seed_from_u64(3);
        let p = Particle::new(&config, Vec2::new(6.0, 6.0), &mut rng);
        assert_eq!(p.pos, Vec2::new(4.0, 4.0));
    }

    proptest! {
        #[test]
        fn prop_spawn_inside_inset_bounds(
            seed in any::<u64>(),
            width in 10.0f32..2000.0,
            height in 10.0f32..2000.0,
            radius in 0.5f32..5.0,
        ) {
            let config = ParticleConfig { radius, speed: 2.0 };
            let mut rng = Pcg32::seed_from_u64(seed);
            let p = Particle::new(&config, Vec2::new(width, height), &mut rng);
            prop_assert!(p.pos.x >= radius && p.pos.x <= width - radius);
            prop_assert!(p.pos.y >= radius && p.pos.y <= height - radius);
        }

        #[test]
        fn prop_bound_hit_negates_velocity(
            overshoot in 0.01f32..3.0,
            vx in -3.0f32..3.0,
            vy in -3.0f32..3.0,
        ) {
            // Past the left bound after the move, whichever way it travels
            let start = Vec2::new(4.0 - overshoot - vx, 50.0);
            let mut p = particle(start, Vec2::new(vx, vy));
            p.update();
            prop_assert_eq!(p.vel.x, -vx);
            prop_assert_eq!(p.vel.y, vy);
        }
    }
}
