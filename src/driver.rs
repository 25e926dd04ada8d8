//! Frame loop driver
//!
//! `Loop` owns the scene and the surface and decides, per host frame
//! callback, whether a fixed step runs. Scheduling itself is delegated to a
//! `Scheduler` so the same loop runs under `requestAnimationFrame` or a
//! scripted clock.

use crate::renderer::Surface;
use crate::sim::{FixedTimestep, Scene};

/// Id of a pending frame callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameHandle {
    /// `requestAnimationFrame` id
    Animation(i32),
    /// `setTimeout` id used when animation frames are unavailable
    Timeout(i32),
}

/// Host facility that calls back once per frame
pub trait Scheduler {
    /// Ask for the next frame callback
    fn request_frame(&mut self) -> FrameHandle;
    /// Cancel a pending callback; unknown handles are ignored
    fn cancel_frame(&mut self, handle: FrameHandle);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Running(FrameHandle),
}

/// Counters since construction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopStats {
    /// Frame callbacks handled while running
    pub callbacks: u64,
    /// Update+draw cycles performed
    pub steps: u64,
}

pub struct Loop<S: Surface> {
    scene: Scene,
    surface: S,
    timestep: FixedTimestep,
    state: LoopState,
    stats: LoopStats,
}

impl<S: Surface> Loop<S> {
    pub fn new(scene: Scene, surface: S, time_step_ms: f64) -> Self {
        Self {
            scene,
            surface,
            timestep: FixedTimestep::new(time_step_ms),
            state: LoopState::Idle,
            stats: LoopStats::default(),
        }
    }

    pub fn start(&mut self, scheduler: &mut dyn Scheduler) {
        if self.is_running() {
            log::debug!("Loop already running");
            return;
        }
        self.state = LoopState::Running(scheduler.request_frame());
        log::info!("Loop started ({} ms step)", self.timestep.step_ms());
    }

    pub fn stop(&mut self, scheduler: &mut dyn Scheduler) {
        match self.state {
            LoopState::Running(handle) => {
                scheduler.cancel_frame(handle);
                self.state = LoopState::Idle;
                log::info!("Loop stopped after {} steps", self.stats.steps);
            }
            LoopState::Idle => log::debug!("Loop already idle"),
        }
    }

    /// Handle one frame callback at `now_ms`.
    ///
    /// Runs at most one update+draw and always reschedules while running.
    /// Returns whether a step was taken.
    pub fn tick(&mut self, now_ms: f64, scheduler: &mut dyn Scheduler) -> bool {
        if !self.is_running() {
            log::debug!("Ignoring frame callback while idle");
            return false;
        }
        self.stats.callbacks += 1;

        let stepped = self.timestep.advance(now_ms);
        if stepped {
            self.scene.update();
            self.scene.draw(&mut self.surface);
            self.stats.steps += 1;
        }

        self.state = LoopState::Running(scheduler.request_frame());
        stepped
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, LoopState::Running(_))
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn stats(&self) -> LoopStats {
        self.stats
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn timestep(&self) -> &FixedTimestep {
        &self.timestep
    }
}

/// Scheduler that only records requests, for headless runs where the
/// caller supplies timestamps itself
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: i32,
    pending: Option<FrameHandle>,
    pub requested: u64,
    pub cancelled: u64,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }
}

impl Scheduler for ManualScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_id += 1;
        self.requested += 1;
        let handle = FrameHandle::Animation(self.next_id);
        self.pending = Some(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
            self.cancelled += 1;
        }
    }
}
