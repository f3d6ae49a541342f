//! Single dispatcher routing discrete events to the engine and the clock.

use crate::config::{GameConfig, TimerConfig};
use serde::Serialize;
use tictoc_core::{Countdown, Game, PlayerNames, Snapshot, Tick};
use tracing::{debug, info, instrument};

/// Input to the controller. Processed one at a time, in arrival order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A player selected cell `0..=8`.
    Move(usize),
    /// One second elapsed on the clock run identified by `epoch`.
    Tick {
        /// Run the tick belongs to.
        epoch: u64,
    },
    /// Start the clock at the configured duration.
    StartTimer,
    /// Stop the clock.
    StopTimer,
    /// Start a fresh game.
    Reset,
    /// End the game for good.
    EndGame,
}

/// Output of the controller for presentation layers and the runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Notification {
    /// Full game view after a state change.
    State(Snapshot),
    /// Seconds left after a tick.
    Tick {
        /// Seconds on the clock.
        remaining: u32,
    },
    /// The clock began run `epoch`; ticks must be scheduled for it.
    TimerStarted {
        /// Run identifier.
        epoch: u64,
        /// Seconds on the clock.
        remaining: u32,
    },
    /// The clock was stopped; pending ticks must be cancelled.
    TimerStopped,
    /// The clock reached zero; pending ticks must be cancelled.
    TimerExpired,
}

/// Owns the game, the clock and the player names.
///
/// The only mutator of game state. After every event, a finished game never
/// has a running clock.
#[derive(Debug, Clone)]
pub struct Controller {
    game: Game,
    timer: Countdown,
    names: PlayerNames,
    timer_config: TimerConfig,
}

impl Controller {
    /// Creates a controller for a new game.
    #[instrument(skip(config))]
    pub fn new(config: &GameConfig) -> Self {
        let timer_config = *config.timer();
        Self {
            game: Game::new(),
            timer: Countdown::new(*timer_config.duration_secs()),
            names: config.names(),
            timer_config,
        }
    }

    /// The engine.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// The clock.
    pub fn timer(&self) -> &Countdown {
        &self.timer
    }

    /// Player names.
    pub fn names(&self) -> &PlayerNames {
        &self.names
    }

    /// Current view of the game.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.game, &self.timer, &self.names)
    }

    /// Whether a new game starts its clock right away.
    pub fn auto_start(&self) -> bool {
        *self.timer_config.auto_start()
    }

    /// Processes one event to completion.
    #[instrument(skip(self))]
    pub fn handle(&mut self, event: Event) -> Vec<Notification> {
        let notes = match event {
            Event::Move(index) => self.on_move(index),
            Event::Tick { epoch } => self.on_tick(epoch),
            Event::StartTimer => self.on_start_timer(),
            Event::StopTimer => self.on_stop_timer(),
            Event::Reset => self.on_reset(),
            Event::EndGame => self.on_end_game(),
        };
        debug_assert!(
            self.game.active() || !self.timer.is_running(),
            "finished game with a running clock"
        );
        notes
    }

    fn on_move(&mut self, index: usize) -> Vec<Notification> {
        let status = match self.game.apply_move(index) {
            Ok(status) => status,
            Err(e) => {
                debug!(error = %e, "Move ignored");
                return Vec::new();
            }
        };

        let mut notes = Vec::new();
        if status.is_terminal() && self.timer.stop() {
            notes.push(Notification::TimerStopped);
        }
        notes.push(Notification::State(self.snapshot()));
        notes
    }

    fn on_tick(&mut self, epoch: u64) -> Vec<Notification> {
        match self.timer.tick(epoch) {
            Tick::Ignored => Vec::new(),
            Tick::Remaining(remaining) => vec![Notification::Tick { remaining }],
            Tick::Expired => {
                self.game.force_timeout();
                vec![
                    Notification::Tick { remaining: 0 },
                    Notification::TimerExpired,
                    Notification::State(self.snapshot()),
                ]
            }
        }
    }

    fn on_start_timer(&mut self) -> Vec<Notification> {
        if !self.game.active() {
            debug!("Timer start ignored: game is over");
            return Vec::new();
        }
        match self.start_timer() {
            Some(started) => vec![started, Notification::State(self.snapshot())],
            None => Vec::new(),
        }
    }

    fn start_timer(&mut self) -> Option<Notification> {
        match self.timer.start(*self.timer_config.duration_secs()) {
            Ok(epoch) => Some(Notification::TimerStarted {
                epoch,
                remaining: self.timer.remaining(),
            }),
            Err(e) => {
                debug!(error = %e, "Timer start ignored");
                None
            }
        }
    }

    fn on_stop_timer(&mut self) -> Vec<Notification> {
        if self.timer.stop() {
            vec![
                Notification::TimerStopped,
                Notification::State(self.snapshot()),
            ]
        } else {
            Vec::new()
        }
    }

    fn on_reset(&mut self) -> Vec<Notification> {
        let clock_used = self.timer.phase() != tictoc_core::TimerPhase::Idle;
        let mut notes = Vec::new();
        if self.timer.stop() {
            notes.push(Notification::TimerStopped);
        }
        self.timer.rearm();
        self.game.reset();

        let restart = self.auto_start() || (clock_used && *self.timer_config.restart_on_reset());
        if restart {
            notes.extend(self.start_timer());
        }
        info!(restart, "New game");
        notes.push(Notification::State(self.snapshot()));
        notes
    }

    fn on_end_game(&mut self) -> Vec<Notification> {
        let mut notes = Vec::new();
        if self.timer.stop() {
            notes.push(Notification::TimerStopped);
        }
        if self.game.abandon() {
            notes.push(Notification::State(self.snapshot()));
        }
        notes
    }
}
