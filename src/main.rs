//! Trailsketch entry point
//!
//! In the browser this starts the sketch with the default config once the
//! page has loaded. Natively it runs the same loop headless against a
//! recording surface and a simulated 60 Hz clock.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    trailsketch::platform::web::init_logging();
    log::info!("Trailsketch starting...");
    trailsketch::platform::web::run(trailsketch::Config::default());
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use trailsketch::renderer::{DrawCommand, RecordingSurface};
    use trailsketch::{Config, ManualScheduler, bootstrap};

    /// Native frame interval (~60 Hz display)
    const FRAME_MS: f64 = 1000.0 / 60.0;
    const FRAMES: u32 = 120;
    const SEED: u64 = 0x5EED;

    env_logger::init();
    log::info!("Trailsketch (native) starting...");
    log::info!("Native mode runs headless - serve the wasm build for the canvas version");

    let config = Config::default();
    let Ok(mut sketch) = bootstrap(
        &config,
        |_| Ok(RecordingSurface::new(800.0, 600.0)),
        &mut Pcg32::seed_from_u64(SEED),
    ) else {
        return;
    };

    let mut scheduler = ManualScheduler::new();
    sketch.start(&mut scheduler);
    for frame in 1..=FRAMES {
        sketch.tick(frame as f64 * FRAME_MS, &mut scheduler);
    }
    sketch.stop(&mut scheduler);

    let stats = sketch.stats();
    log::info!(
        "{} callbacks, {} steps, {} draw calls",
        stats.callbacks,
        stats.steps,
        sketch.surface().commands().len()
    );

    let last: Vec<&DrawCommand> = sketch.surface().last_frame().iter().collect();
    match serde_json::to_string_pretty(&last) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize last frame: {}", e),
    }
}
