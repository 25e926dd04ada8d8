//! Startup wiring: config -> surface -> scene -> loop

use rand::Rng;

use crate::config::Config;
use crate::driver::Loop;
use crate::error::Result;
use crate::renderer::Surface;
use crate::sim::Scene;

/// Build a ready-to-start loop.
///
/// `find_surface` resolves `config.canvas_id`. On any failure the error is
/// logged here and nothing else is constructed.
pub fn bootstrap<S, F, R>(config: &Config, find_surface: F, rng: &mut R) -> Result<Loop<S>>
where
    S: Surface,
    F: FnOnce(&str) -> Result<S>,
    R: Rng + ?Sized,
{
    let surface = config
        .validate()
        .and_then(|_| find_surface(&config.canvas_id))
        .inspect_err(|e| log::error!("{}", e))?;

    let size = surface.size();
    let scene = Scene::new(config, size, rng);
    log::info!(
        "Spawned {} particles on {}x{} surface \"{}\"",
        scene.len(),
        size.x,
        size.y,
        config.canvas_id
    );

    Ok(Loop::new(scene, surface, config.time_step_ms))
}
