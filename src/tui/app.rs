//! Presentation state fed by controller notifications.

use crate::controller::Notification;
use tictoc_core::{Position, Snapshot};
use tracing::debug;

/// What the terminal shows.
#[derive(Debug, Clone)]
pub struct App {
    snapshot: Snapshot,
    cursor: Position,
}

impl App {
    /// Creates the view from an initial snapshot.
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            snapshot,
            cursor: Position::Center,
        }
    }

    /// Latest snapshot.
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Highlighted cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Moves the highlight.
    pub fn set_cursor(&mut self, cursor: Position) {
        self.cursor = cursor;
    }

    /// Folds a notification into the view.
    pub fn handle(&mut self, note: Notification) {
        debug!(?note, "Handling notification");
        match note {
            Notification::State(snapshot) => self.snapshot = snapshot,
            Notification::Tick { remaining } | Notification::TimerStarted { remaining, .. } => {
                self.snapshot.remaining_seconds = remaining;
            }
            Notification::TimerStopped | Notification::TimerExpired => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::controller::{Controller, Event};
    use tictoc_core::TimerPhase;

    #[test]
    fn test_tick_updates_clock_only() {
        let controller = Controller::new(&GameConfig::default());
        let mut app = App::new(controller.snapshot());
        app.handle(Notification::Tick { remaining: 7 });
        assert_eq!(app.snapshot().remaining_seconds, 7);
        assert_eq!(app.snapshot().message, "Player X's turn");
    }

    #[test]
    fn test_manual_start_shows_running_clock() {
        let mut controller = Controller::new(&GameConfig::default());
        let mut app = App::new(controller.snapshot());
        for note in controller.handle(Event::StartTimer) {
            app.handle(note);
        }
        let epoch = controller.timer().epoch();
        for note in controller.handle(Event::Tick { epoch }) {
            app.handle(note);
        }
        assert_eq!(app.snapshot().timer, TimerPhase::Running);
        assert_eq!(app.snapshot().remaining_seconds, 29);
    }
}
