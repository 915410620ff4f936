//! Clock-driven tick scheduling.
//!
//! [`Scheduler`] owns no thread and reads no clock. The caller passes the
//! current [`Instant`] to every call, so the same schedule drives an
//! interactive loop or a test with a synthetic clock. At most one tick
//! cadence is ever armed: starting an already-running schedule replaces
//! it.

use std::error::Error;
use std::fmt;
use std::time::{Duration, Instant};

use crate::config::{tick_interval, ConfigError, SandboxConfig};

// ── ScheduleError ────────────────────────────────────────────────

/// Error from an operation that conflicts with the schedule state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScheduleError {
    /// A manual step was requested while the schedule is running.
    Running,
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Running => write!(f, "cannot step manually while the schedule is running"),
        }
    }
}

impl Error for ScheduleError {}

// ── TickRate ─────────────────────────────────────────────────────

/// A validated tick frequency.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickRate {
    hz: f64,
    interval: Duration,
}

impl TickRate {
    /// Slowest speed-slider setting.
    pub const MIN_SPEED: u32 = 1;
    /// Fastest speed-slider setting.
    pub const MAX_SPEED: u32 = 100;

    /// Rate of `hz` ticks per second.
    pub fn from_hz(hz: f64) -> Result<Self, ConfigError> {
        Ok(Self {
            hz,
            interval: tick_interval(hz)?,
        })
    }

    /// Rate for a speed-slider setting: `speed` ticks per second, with
    /// `speed` clamped to [`MIN_SPEED`](Self::MIN_SPEED)..=[`MAX_SPEED`](Self::MAX_SPEED).
    pub fn from_speed(speed: u32) -> Self {
        let speed = speed.clamp(Self::MIN_SPEED, Self::MAX_SPEED);
        Self {
            hz: speed as f64,
            interval: Duration::from_nanos(1_000_000_000 / speed as u64),
        }
    }

    /// Ticks per second.
    pub fn hz(&self) -> f64 {
        self.hz
    }

    /// Time between ticks.
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Default for TickRate {
    fn default() -> Self {
        Self::from_speed(10)
    }
}

// ── Scheduler ────────────────────────────────────────────────────

/// Single-slot periodic tick schedule.
///
/// While running, [`poll`](Self::poll) reports how many ticks came due
/// since the last poll. After a long stall at most `max_catch_up` ticks
/// are reported and the rest are dropped, so a paused debugger does not
/// cause a burst of hundreds of ticks.
#[derive(Clone, Debug)]
pub struct Scheduler {
    rate: TickRate,
    max_catch_up: u32,
    next_due: Option<Instant>,
    dropped: u64,
}

impl Scheduler {
    /// Stopped schedule at `rate`.
    pub fn new(rate: TickRate, max_catch_up: u32) -> Result<Self, ConfigError> {
        if max_catch_up == 0 {
            return Err(ConfigError::ZeroCatchUp);
        }
        Ok(Self {
            rate,
            max_catch_up,
            next_due: None,
            dropped: 0,
        })
    }

    /// Stopped schedule using the rate and catch-up limit from `config`.
    pub fn from_config(config: &SandboxConfig) -> Result<Self, ConfigError> {
        Self::new(
            TickRate::from_hz(config.tick_rate_hz)?,
            config.max_catch_up_ticks,
        )
    }

    /// Arm the schedule; the first tick is due one interval after `now`.
    ///
    /// Starting a running schedule re-arms it from `now`.
    pub fn start(&mut self, now: Instant) {
        if self.next_due.is_some() {
            log::debug!("restarting schedule at {} Hz", self.rate.hz());
        } else {
            log::debug!("starting schedule at {} Hz", self.rate.hz());
        }
        self.next_due = Some(now.checked_add(self.rate.interval()).unwrap_or(now));
    }

    /// Disarm the schedule. No-op when already stopped.
    pub fn stop(&mut self) {
        if self.next_due.take().is_some() {
            log::debug!("stopping schedule");
        }
    }

    /// Whether the schedule is armed.
    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Change the rate. A running schedule is re-armed from `now` at the
    /// new rate; a stopped one stays stopped.
    pub fn set_tick_rate(&mut self, rate: TickRate, now: Instant) {
        self.rate = rate;
        if self.is_running() {
            self.start(now);
        }
    }

    /// Current rate.
    pub fn tick_rate(&self) -> TickRate {
        self.rate
    }

    /// Most ticks a single poll will report.
    pub fn max_catch_up(&self) -> u32 {
        self.max_catch_up
    }

    /// When the next tick comes due, if running.
    pub fn next_due(&self) -> Option<Instant> {
        self.next_due
    }

    /// Total ticks dropped by the catch-up cap since construction.
    pub fn dropped_ticks(&self) -> u64 {
        self.dropped
    }

    /// Number of ticks due at `now`, advancing the schedule past them.
    ///
    /// Returns 0 when stopped or when the next tick is not yet due.
    pub fn poll(&mut self, now: Instant) -> u32 {
        let Some(due) = self.next_due else {
            return 0;
        };
        if now < due {
            return 0;
        }

        let interval = self.rate.interval();
        let behind = (now - due).as_nanos() / interval.as_nanos() + 1;
        let run = behind.min(self.max_catch_up as u128) as u32;
        if behind > run as u128 {
            let dropped = u64::try_from(behind - run as u128).unwrap_or(u64::MAX);
            log::warn!("schedule fell {behind} ticks behind; dropping {dropped}");
            self.dropped = self.dropped.saturating_add(dropped);
            self.next_due = Some(now.checked_add(interval).unwrap_or(now));
        } else {
            let next = interval
                .checked_mul(run)
                .and_then(|d| due.checked_add(d))
                .unwrap_or(now);
            self.next_due = Some(next);
        }
        run
    }

    /// `Ok` when a manual step is allowed, which is only while stopped.
    pub fn check_manual_step(&self) -> Result<(), ScheduleError> {
        if self.is_running() {
            Err(ScheduleError::Running)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    fn ten_hz() -> Scheduler {
        Scheduler::new(TickRate::from_speed(10), 4).unwrap()
    }

    #[test]
    fn from_speed_clamps_and_inverts() {
        assert_eq!(TickRate::from_speed(10).interval(), 100 * MS);
        assert_eq!(TickRate::from_speed(0).hz(), 1.0);
        assert_eq!(TickRate::from_speed(500).interval(), 10 * MS);
        assert_eq!(TickRate::default(), TickRate::from_speed(10));
    }

    #[test]
    fn from_hz_rejects_non_positive() {
        assert!(matches!(
            TickRate::from_hz(0.0),
            Err(ConfigError::InvalidTickRate { .. })
        ));
        assert_eq!(TickRate::from_hz(4.0).unwrap().interval(), 250 * MS);
    }

    #[test]
    fn zero_catch_up_rejected() {
        assert_eq!(
            Scheduler::new(TickRate::default(), 0).unwrap_err(),
            ConfigError::ZeroCatchUp
        );
    }

    #[test]
    fn stopped_schedule_never_ticks() {
        let mut s = ten_hz();
        let t0 = Instant::now();
        assert!(!s.is_running());
        assert_eq!(s.poll(t0 + 10 * 100 * MS), 0);
    }

    #[test]
    fn ticks_come_due_each_interval() {
        let mut s = ten_hz();
        let t0 = Instant::now();
        s.start(t0);
        assert_eq!(s.poll(t0 + 99 * MS), 0);
        assert_eq!(s.poll(t0 + 100 * MS), 1);
        assert_eq!(s.poll(t0 + 150 * MS), 0);
        assert_eq!(s.poll(t0 + 310 * MS), 2);
        assert_eq!(s.next_due(), Some(t0 + 400 * MS));
    }

    #[test]
    fn catch_up_is_capped() {
        let mut s = ten_hz();
        let t0 = Instant::now();
        s.start(t0);
        assert_eq!(s.poll(t0 + 1000 * MS), 4);
        assert_eq!(s.dropped_ticks(), 6);
        assert_eq!(s.next_due(), Some(t0 + 1100 * MS));
    }

    #[test]
    fn restart_replaces_the_single_slot() {
        let mut s = ten_hz();
        let t0 = Instant::now();
        s.start(t0);
        s.start(t0 + 50 * MS);
        assert_eq!(s.poll(t0 + 100 * MS), 0);
        assert_eq!(s.poll(t0 + 150 * MS), 1);
    }

    #[test]
    fn rate_change_rearms_without_doubling() {
        let mut s = ten_hz();
        let t0 = Instant::now();
        s.start(t0);
        s.set_tick_rate(TickRate::from_speed(20), t0 + 20 * MS);
        // Old cadence would fire at 100ms; new one fires at 70, 120.
        assert_eq!(s.poll(t0 + 70 * MS), 1);
        assert_eq!(s.poll(t0 + 100 * MS), 0);
        assert_eq!(s.poll(t0 + 120 * MS), 1);
    }

    #[test]
    fn rate_change_while_stopped_stays_stopped() {
        let mut s = ten_hz();
        s.set_tick_rate(TickRate::from_speed(50), Instant::now());
        assert!(!s.is_running());
        assert_eq!(s.tick_rate().interval(), 20 * MS);
    }

    #[test]
    fn manual_step_only_while_stopped() {
        let mut s = ten_hz();
        assert_eq!(s.check_manual_step(), Ok(()));
        s.start(Instant::now());
        assert_eq!(s.check_manual_step(), Err(ScheduleError::Running));
        s.stop();
        assert_eq!(s.check_manual_step(), Ok(()));
    }

    #[test]
    fn from_config_uses_rate_and_cap() {
        let config = SandboxConfig {
            tick_rate_hz: 5.0,
            max_catch_up_ticks: 2,
            ..Default::default()
        };
        let s = Scheduler::from_config(&config).unwrap();
        assert_eq!(s.tick_rate().interval(), 200 * MS);
        assert_eq!(s.max_catch_up(), 2);
    }
}
