//! Line-oriented front end: commands on stdin, JSON notifications on stdout.

use crate::controller::{Controller, Event, Notification};
use crate::session::SessionHandle;
use tictoc_core::Position;
use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info, instrument, warn};

/// A parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Forward to the controller.
    Event(Event),
    /// Stop reading and end the session.
    Quit,
}

/// Parses one command line.
///
/// `move N` (cell 0-8, or a label like `center`), `reset`, `start`, `stop`, `end`, `quit`.
/// Blank lines and unknown commands yield `None`.
pub fn parse_command(line: &str) -> Option<Command> {
    let mut words = line.split_whitespace();
    let command = match words.next()?.to_ascii_lowercase().as_str() {
        "move" | "m" => Command::Event(Event::Move(cell(words.next()?)?)),
        "reset" | "new" => Command::Event(Event::Reset),
        "start" => Command::Event(Event::StartTimer),
        "stop" => Command::Event(Event::StopTimer),
        "end" => Command::Event(Event::EndGame),
        "quit" | "exit" => Command::Quit,
        _ => return None,
    };
    if words.next().is_some() {
        return None;
    }
    Some(command)
}

/// A raw cell index, or a cell label such as `center` or `top-left`.
///
/// Indices are passed through unchecked so the engine can reject them.
fn cell(word: &str) -> Option<usize> {
    match word.parse::<usize>() {
        Ok(index) => Some(index),
        Err(_) => Position::parse(word).map(Position::to_index),
    }
}

/// Runs a session on stdin/stdout until `quit` or end of input.
pub async fn run_headless(controller: Controller) -> Result<()> {
    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();
    run(controller, stdin, stdout).await
}

/// Runs a session reading commands from `input` and writing notifications
/// to `output`, one JSON object per line.
#[instrument(skip_all)]
pub async fn run<R, W>(controller: Controller, input: R, mut output: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    info!("Starting headless session");
    let (session, mut notes) = SessionHandle::spawn(controller);
    let mut lines = input.lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                match line.context("Failed to read command")? {
                    Some(line) => match parse_command(&line) {
                        Some(Command::Event(event)) => {
                            debug!(?event, "Command received");
                            session.send(event);
                        }
                        Some(Command::Quit) => break,
                        None if line.trim().is_empty() => {}
                        None => warn!(%line, "Unrecognized command"),
                    },
                    None => {
                        debug!("End of input");
                        break;
                    }
                }
            }
            note = notes.recv() => match note {
                Some(note) => write_note(&mut output, &note).await?,
                None => break,
            },
        }
    }

    let controller = session
        .shutdown()
        .await
        .context("Session task failed")?;

    // Flush whatever the loop produced before it stopped.
    while let Ok(note) = notes.try_recv() {
        write_note(&mut output, &note).await?;
    }
    output.flush().await?;

    info!(outcome = %controller.game().outcome(), "Headless session ended");
    Ok(())
}

async fn write_note<W: AsyncWrite + Unpin>(output: &mut W, note: &Notification) -> Result<()> {
    let mut line = serde_json::to_string(note).context("Failed to encode notification")?;
    line.push('\n');
    output.write_all(line.as_bytes()).await?;
    Ok(())
}
