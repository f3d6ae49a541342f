//! Countdown clock state machine.
//!
//! `Idle -> Running -> {Expired, Stopped}`. The clock itself never schedules
//! anything; a runtime feeds it [`Countdown::tick`] once per second, tagged
//! with the epoch returned by [`Countdown::start`]. Ticks from an older run,
//! or arriving after a stop, are ignored.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Default countdown length in seconds.
pub const DEFAULT_DURATION_SECS: u32 = 30;

/// Phase of the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum TimerPhase {
    /// Not started since creation or the last rearm.
    Idle,
    /// Counting down.
    Running,
    /// Reached zero.
    Expired,
    /// Stopped before reaching zero.
    Stopped,
}

/// What a tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Stale or late tick; nothing changed.
    Ignored,
    /// One second elapsed; this many remain.
    Remaining(u32),
    /// The last second elapsed. Reported exactly once per run.
    Expired,
}

/// Error starting the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum TimerError {
    /// A countdown of zero seconds.
    #[display("Timer duration must be at least one second")]
    ZeroDuration,
    /// `start` while already running.
    #[display("Timer is already running")]
    AlreadyRunning,
}

/// Countdown clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    duration: u32,
    remaining: u32,
    phase: TimerPhase,
    epoch: u64,
}

impl Countdown {
    /// Creates an idle countdown of `duration` seconds.
    pub fn new(duration: u32) -> Self {
        Self {
            duration,
            remaining: duration,
            phase: TimerPhase::Idle,
            epoch: 0,
        }
    }

    /// Seconds left.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Length of the current or next run.
    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// Current phase.
    pub fn phase(&self) -> TimerPhase {
        self.phase
    }

    /// Identifies the current run; ticks must carry it.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Whether the countdown is running.
    pub fn is_running(&self) -> bool {
        self.phase == TimerPhase::Running
    }

    /// Starts a run of `duration` seconds and returns its epoch.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn start(&mut self, duration: u32) -> Result<u64, TimerError> {
        if duration == 0 {
            return Err(TimerError::ZeroDuration);
        }
        if self.is_running() {
            return Err(TimerError::AlreadyRunning);
        }
        self.duration = duration;
        self.remaining = duration;
        self.phase = TimerPhase::Running;
        self.epoch += 1;
        info!(epoch = self.epoch, duration, "Timer started");
        Ok(self.epoch)
    }

    /// Applies one elapsed second from run `epoch`.
    #[instrument(skip(self), fields(current = self.epoch, phase = %self.phase))]
    pub fn tick(&mut self, epoch: u64) -> Tick {
        if !self.is_running() || epoch != self.epoch {
            debug!("Tick ignored");
            return Tick::Ignored;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.phase = TimerPhase::Expired;
            info!("Timer expired");
            Tick::Expired
        } else {
            Tick::Remaining(self.remaining)
        }
    }

    /// Stops a running countdown. Returns whether anything was running.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn stop(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.phase = TimerPhase::Stopped;
        info!(remaining = self.remaining, "Timer stopped");
        true
    }

    /// Returns to `Idle` with the full duration on the clock.
    ///
    /// The epoch is kept, so ticks still in flight from a previous run are
    /// ignored after the next `start`.
    pub fn rearm(&mut self) {
        self.phase = TimerPhase::Idle;
        self.remaining = self.duration;
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION_SECS)
    }
}
