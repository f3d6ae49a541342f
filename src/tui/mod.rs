//! Terminal front end.

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::{Action, key_action, move_cursor};

use crate::controller::Controller;
use crate::session::SessionHandle;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event as TermEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::{error, info, instrument};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Runs the terminal front end until the player quits.
#[instrument(skip_all)]
pub async fn run_tui(controller: Controller) -> Result<()> {
    info!("Starting terminal UI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_loop(&mut terminal, controller).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    controller: Controller,
) -> Result<()> {
    let mut app = App::new(controller.snapshot());
    let (session, mut notes) = SessionHandle::spawn(controller);

    loop {
        while let Ok(note) = notes.try_recv() {
            app.handle(note);
        }

        terminal.draw(|frame| ui::draw(frame, &app))?;

        if event::poll(POLL_INTERVAL)?
            && let TermEvent::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match key_action(app.cursor(), key.code) {
                Action::Cursor(pos) => app.set_cursor(pos),
                Action::Send(event) => {
                    session.send(event);
                }
                Action::Quit => break,
                Action::None => {}
            }
        }

        tokio::task::yield_now().await;
    }

    let controller = session.shutdown().await.context("Session task failed")?;
    info!(outcome = %controller.game().outcome(), "Terminal UI closed");
    Ok(())
}
