//! Interactive session: sandbox, schedule and renderer wired together.

use std::time::Instant;

use smallvec::SmallVec;

use crate::brush::Brush;
use crate::config::{ConfigError, SandboxConfig};
use crate::metrics::StepMetrics;
use crate::render::Renderer;
use crate::sandbox::Sandbox;
use crate::schedule::{ScheduleError, Scheduler, TickRate};

/// Metrics for the ticks run by one [`Session::advance`] call.
///
/// Bounded by the catch-up limit, which is small, so it lives inline.
pub type AdvanceReport = SmallVec<[StepMetrics; 4]>;

/// A [`Sandbox`] driven by a [`Scheduler`] and drawn by a [`Renderer`].
///
/// This is the whole interactive surface: play/pause, speed, manual
/// step, painting, clear and a single save slot. The renderer is called
/// after every operation that changes the grid.
pub struct Session<R> {
    sandbox: Sandbox,
    scheduler: Scheduler,
    renderer: R,
}

impl<R: Renderer> Session<R> {
    /// Build a stopped session from `config` and draw the empty grid.
    pub fn new(config: &SandboxConfig, renderer: R) -> Result<Self, ConfigError> {
        let sandbox = Sandbox::new(config)?;
        let scheduler = Scheduler::from_config(config)?;
        Ok(Self::from_parts(sandbox, scheduler, renderer))
    }

    /// Assemble a session from existing parts and draw the current grid.
    pub fn from_parts(sandbox: Sandbox, scheduler: Scheduler, mut renderer: R) -> Self {
        renderer.render(sandbox.grid());
        Self {
            sandbox,
            scheduler,
            renderer,
        }
    }

    /// Start ticking; the first tick is due one interval after `now`.
    pub fn start(&mut self, now: Instant) {
        self.scheduler.start(now);
    }

    /// Stop ticking. The grid is left as it is.
    pub fn stop(&mut self) {
        self.scheduler.stop();
    }

    /// Whether the schedule is running.
    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    /// Apply a speed-slider setting; a running schedule restarts at the
    /// new rate.
    pub fn set_speed(&mut self, speed: u32, now: Instant) {
        let rate = TickRate::from_speed(speed);
        log::debug!("speed {speed} -> {} Hz", rate.hz());
        self.scheduler.set_tick_rate(rate, now);
    }

    /// Run exactly one tick. Refused while the schedule is running.
    pub fn manual_step(&mut self) -> Result<StepMetrics, ScheduleError> {
        self.scheduler.check_manual_step()?;
        let metrics = self.sandbox.step();
        self.renderer.render(self.sandbox.grid());
        Ok(metrics)
    }

    /// Run every tick that is due at `now`, then render once if any ran.
    pub fn advance(&mut self, now: Instant) -> AdvanceReport {
        let due = self.scheduler.poll(now);
        let report: AdvanceReport = (0..due).map(|_| self.sandbox.step()).collect();
        if !report.is_empty() {
            self.renderer.render(self.sandbox.grid());
        }
        report
    }

    /// Stamp `brush` at `center` and render. Painting is allowed while
    /// running; the next tick sees the new cells.
    pub fn paint(&mut self, brush: &Brush, center: (i32, i32)) -> usize {
        let stamped = self.sandbox.paint(brush, center);
        self.renderer.render(self.sandbox.grid());
        stamped
    }

    /// Empty the grid and render.
    pub fn clear(&mut self) {
        self.sandbox.clear();
        self.renderer.render(self.sandbox.grid());
    }

    /// Store the grid in the save slot.
    pub fn save(&mut self) {
        self.sandbox.save();
    }

    /// Restore the saved grid and render. A running schedule is stopped
    /// and re-armed from `now`. Returns `false`, doing nothing at all,
    /// when nothing was saved.
    pub fn load(&mut self, now: Instant) -> bool {
        if !self.sandbox.has_saved() {
            return false;
        }
        let was_running = self.scheduler.is_running();
        self.scheduler.stop();
        let loaded = self.sandbox.load();
        self.renderer.render(self.sandbox.grid());
        if was_running {
            self.scheduler.start(now);
        }
        loaded
    }

    /// The sandbox.
    pub fn sandbox(&self) -> &Sandbox {
        &self.sandbox
    }

    /// Mutable access to the sandbox. Changes made through it are not
    /// rendered until the next session operation that renders.
    pub fn sandbox_mut(&mut self) -> &mut Sandbox {
        &mut self.sandbox
    }

    /// The schedule.
    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// The renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Mutable access to the renderer.
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Tear down, returning the renderer.
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

impl<R> std::fmt::Debug for Session<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("sandbox", &self.sandbox)
            .field("running", &self.scheduler.is_running())
            .finish()
    }
}
