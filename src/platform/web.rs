//! Browser glue: page-ready trigger, animation-frame scheduling, JS handle

use rand::SeedableRng;
use rand_pcg::Pcg32;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Window;

use crate::app::bootstrap;
use crate::config::Config;
use crate::driver::{FrameHandle, Loop, Scheduler};
use crate::error::{Error, Result};
use crate::renderer::CanvasSurface;

/// Timer interval used when `requestAnimationFrame` is unavailable (~30 fps)
const FALLBACK_FRAME_MS: i32 = 1000 / 30;

type FrameCallback = Closure<dyn FnMut(f64)>;

struct BrowserScheduler {
    window: Window,
    callback: Rc<FrameCallback>,
}

impl Scheduler for BrowserScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        let callback: &js_sys::Function = (*self.callback).as_ref().unchecked_ref();
        match self.window.request_animation_frame(callback) {
            Ok(id) => FrameHandle::Animation(id),
            Err(e) => {
                log::debug!("requestAnimationFrame failed ({:?}), using timer", e);
                let id = self
                    .window
                    .set_timeout_with_callback_and_timeout_and_arguments_0(
                        callback,
                        FALLBACK_FRAME_MS,
                    )
                    .unwrap_or_else(|e| {
                        log::warn!("setTimeout failed: {:?}", e);
                        0
                    });
                FrameHandle::Timeout(id)
            }
        }
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        match handle {
            FrameHandle::Animation(id) => {
                if let Err(e) = self.window.cancel_animation_frame(id) {
                    log::warn!("cancelAnimationFrame failed: {:?}", e);
                }
            }
            FrameHandle::Timeout(id) => self.window.clear_timeout_with_handle(id),
        }
    }
}

struct Running {
    sketch: Loop<CanvasSurface>,
    scheduler: BrowserScheduler,
}

type Shared = Rc<RefCell<Option<Running>>>;

/// Handle to a sketch running on a page
#[wasm_bindgen]
pub struct SketchHandle {
    shared: Shared,
}

#[wasm_bindgen]
impl SketchHandle {
    pub fn start(&self) {
        if let Some(running) = self.shared.borrow_mut().as_mut() {
            running.sketch.start(&mut running.scheduler);
        }
    }

    pub fn stop(&self) {
        if let Some(running) = self.shared.borrow_mut().as_mut() {
            running.sketch.stop(&mut running.scheduler);
        }
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.shared
            .borrow()
            .as_ref()
            .is_some_and(|running| running.sketch.is_running())
    }

    /// Update+draw cycles performed so far
    pub fn steps(&self) -> f64 {
        self.shared
            .borrow()
            .as_ref()
            .map_or(0.0, |running| running.sketch.stats().steps as f64)
    }
}

/// Parse `json` as a config, then bootstrap and start a sketch
#[wasm_bindgen(js_name = startWithConfig)]
pub fn start_with_config(json: &str) -> std::result::Result<SketchHandle, JsValue> {
    init_logging();
    let config = Config::from_json(json).map_err(|e| {
        log::error!("{}", e);
        JsValue::from_str(&e.to_string())
    })?;
    let handle = launch(&config).map_err(|e| JsValue::from_str(&e.to_string()))?;
    handle.start();
    Ok(handle)
}

/// Console logger and panic hook; safe to call more than once
pub fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Build an idle sketch on the configured canvas
pub fn launch(config: &Config) -> Result<SketchHandle> {
    let window = web_sys::window().ok_or_else(|| {
        log::error!("No window available");
        Error::SurfaceNotFound(config.canvas_id.clone())
    })?;

    let seed = js_sys::Date::now() as u64;
    let mut rng = Pcg32::seed_from_u64(seed);
    let sketch = bootstrap(
        config,
        |id| {
            let document = window
                .document()
                .ok_or_else(|| Error::SurfaceNotFound(id.to_string()))?;
            CanvasSurface::find(&document, id)
        },
        &mut rng,
    )?;
    log::info!("Sketch initialized with seed: {}", seed);

    let shared: Shared = Rc::new(RefCell::new(None));
    let callback = {
        let shared = shared.clone();
        let window = window.clone();
        // Timer callbacks arrive without a timestamp
        FrameCallback::new(move |time: f64| {
            let now = if time.is_finite() {
                time
            } else {
                performance_now(&window)
            };
            if let Some(running) = shared.borrow_mut().as_mut() {
                running.sketch.tick(now, &mut running.scheduler);
            }
        })
    };

    *shared.borrow_mut() = Some(Running {
        sketch,
        scheduler: BrowserScheduler {
            window,
            callback: Rc::new(callback),
        },
    });

    Ok(SketchHandle { shared })
}

/// Launch and start with `config` once the page has finished loading.
///
/// A missing canvas was already logged by `launch`; nothing else happens.
pub fn run(config: Config) {
    on_page_ready(move || {
        if let Ok(handle) = launch(&config) {
            handle.start();
            log::info!("Sketch running!");
        }
    });
}

fn on_page_ready(f: impl FnOnce() + 'static) {
    let Some(window) = web_sys::window() else {
        log::error!("No window available");
        return;
    };
    let loaded = window
        .document()
        .is_some_and(|d| d.ready_state() == "complete");
    if loaded {
        f();
        return;
    }

    let closure = Closure::once(move |_event: web_sys::Event| f());
    let listener = closure.as_ref().unchecked_ref();
    if let Err(e) = window.add_event_listener_with_callback("load", listener) {
        log::error!("Failed to listen for page load: {:?}", e);
        return;
    }
    closure.forget();
}

fn performance_now(window: &Window) -> f64 {
    window
        .performance()
        .map_or_else(js_sys::Date::now, |p| p.now())
}
