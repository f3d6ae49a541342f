//! Event loop: one queue, one controller, one clock ticker.

use crate::controller::{Controller, Event, Notification};
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::task::{JoinError, JoinHandle};
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, instrument, warn};

/// Clock resolution.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Handle to a running session.
///
/// Events sent through the handle (and ticks from the clock) share one queue
/// and are handled strictly in the order they were enqueued.
#[derive(Debug)]
pub struct SessionHandle {
    events: mpsc::UnboundedSender<Event>,
    shutdown: oneshot::Sender<()>,
    task: JoinHandle<Controller>,
}

impl SessionHandle {
    /// Spawns the loop for `controller`.
    ///
    /// The receiver gets an initial [`Notification::State`], then every
    /// notification the controller produces.
    #[instrument(skip(controller))]
    pub fn spawn(controller: Controller) -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let (notes_tx, notes_rx) = mpsc::unbounded_channel();
        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        if controller.auto_start() {
            // Queued before anything the caller can send.
            let _ = events_tx.send(Event::StartTimer);
        }

        let task = tokio::spawn(run(
            controller,
            events_rx,
            events_tx.clone(),
            notes_tx,
            shutdown_rx,
        ));

        let handle = Self {
            events: events_tx,
            shutdown: shutdown_tx,
            task,
        };
        (handle, notes_rx)
    }

    /// Enqueues an event. Returns `false` if the loop has ended.
    pub fn send(&self, event: Event) -> bool {
        self.events.send(event).is_ok()
    }

    /// Stops the loop and returns the controller in its final state.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<Controller, JoinError> {
        let _ = self.shutdown.send(());
        self.task.await
    }
}

#[instrument(skip_all)]
async fn run(
    mut controller: Controller,
    mut events: mpsc::UnboundedReceiver<Event>,
    ticks: mpsc::UnboundedSender<Event>,
    notes: mpsc::UnboundedSender<Notification>,
    mut shutdown: oneshot::Receiver<()>,
) -> Controller {
    info!("Session started");
    let mut ticker: Option<JoinHandle<()>> = None;

    if notes.send(Notification::State(controller.snapshot())).is_err() {
        warn!("Notification receiver dropped before start");
    }

    loop {
        tokio::select! {
            _ = &mut shutdown => {
                // Events enqueued before shutdown are still handled.
                while let Ok(event) = events.try_recv() {
                    dispatch(&mut controller, event, &mut ticker, &ticks, &notes);
                }
                break;
            }
            event = events.recv() => match event {
                Some(event) => dispatch(&mut controller, event, &mut ticker, &ticks, &notes),
                None => break,
            },
        }
    }

    cancel(&mut ticker);
    info!("Session ended");
    controller
}

fn dispatch(
    controller: &mut Controller,
    event: Event,
    ticker: &mut Option<JoinHandle<()>>,
    ticks: &mpsc::UnboundedSender<Event>,
    notes: &mpsc::UnboundedSender<Notification>,
) {
    for note in controller.handle(event) {
        match note {
            Notification::TimerStarted { epoch, .. } => {
                cancel(ticker);
                *ticker = Some(spawn_ticker(epoch, ticks.clone()));
            }
            Notification::TimerStopped | Notification::TimerExpired => cancel(ticker),
            _ => {}
        }
        if notes.send(note).is_err() {
            debug!("Notification receiver dropped");
        }
    }
}

fn cancel(ticker: &mut Option<JoinHandle<()>>) {
    if let Some(task) = ticker.take() {
        task.abort();
    }
}

/// Enqueues `Tick { epoch }` once per [`TICK_INTERVAL`] until aborted.
fn spawn_ticker(epoch: u64, events: mpsc::UnboundedSender<Event>) -> JoinHandle<()> {
    debug!(epoch, "Spawning clock ticker");
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(TICK_INTERVAL);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately.
        interval.tick().await;
        loop {
            interval.tick().await;
            if events.send(Event::Tick { epoch }).is_err() {
                break;
            }
        }
    })
}
