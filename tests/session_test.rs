//! Tests for the async session loop and its clock ticker.

use std::time::Duration;
use tictoc::{
    Controller, Event, GameConfig, Notification, Outcome, SessionHandle, TimerConfig, TimerPhase,
};
use tokio::sync::mpsc::UnboundedReceiver;

fn controller(duration: u32) -> Controller {
    let config =
        GameConfig::default().with_timer(TimerConfig::default().with_duration_secs(duration));
    Controller::new(&config)
}

async fn next(notes: &mut UnboundedReceiver<Notification>) -> Notification {
    notes.recv().await.expect("session alive")
}

#[tokio::test(start_paused = true)]
async fn test_scenario_d_clock_times_out_game() {
    let (session, mut notes) = SessionHandle::spawn(controller(3));
    assert!(matches!(next(&mut notes).await, Notification::State(_)));

    session.send(Event::StartTimer);
    assert_eq!(
        next(&mut notes).await,
        Notification::TimerStarted {
            epoch: 1,
            remaining: 3
        }
    );
    assert!(matches!(
        next(&mut notes).await,
        Notification::State(snapshot) if snapshot.timer == TimerPhase::Running
    ));

    let mut ticks = Vec::new();
    let snapshot = loop {
        match next(&mut notes).await {
            Notification::Tick { remaining } => ticks.push(remaining),
            Notification::State(snapshot) => break snapshot,
            _ => {}
        }
    };
    assert_eq!(ticks, vec![2, 1, 0]);
    assert_eq!(snapshot.outcome, Outcome::TimedOut);
    assert!(!snapshot.active);
    assert_eq!(snapshot.message, "Time's up! Game over.");

    let controller = session.shutdown().await.unwrap();
    assert_eq!(controller.timer().phase(), TimerPhase::Expired);
    assert!(!controller.game().active());
}

#[tokio::test(start_paused = true)]
async fn test_stopped_clock_never_ticks_again() {
    let (session, mut notes) = SessionHandle::spawn(controller(5));
    next(&mut notes).await;

    session.send(Event::StartTimer);
    next(&mut notes).await;
    next(&mut notes).await;
    assert_eq!(next(&mut notes).await, Notification::Tick { remaining: 4 });

    session.send(Event::StopTimer);
    session.send(Event::StopTimer);
    assert_eq!(next(&mut notes).await, Notification::TimerStopped);
    assert!(matches!(next(&mut notes).await, Notification::State(_)));

    tokio::time::sleep(Duration::from_secs(10)).await;
    assert!(notes.try_recv().is_err());

    let controller = session.shutdown().await.unwrap();
    assert_eq!(controller.timer().remaining(), 4);
    assert_eq!(controller.timer().phase(), TimerPhase::Stopped);
}

#[tokio::test(start_paused = true)]
async fn test_win_cancels_clock() {
    let (session, mut notes) = SessionHandle::spawn(controller(30));
    next(&mut notes).await;
    session.send(Event::StartTimer);
    for index in [0, 3, 1, 4, 2] {
        session.send(Event::Move(index));
    }

    tokio::time::sleep(Duration::from_secs(60)).await;
    let mut saw_tick = false;
    while let Ok(note) = notes.try_recv() {
        saw_tick |= matches!(note, Notification::Tick { .. });
    }
    assert!(!saw_tick, "clock ticked after the game was won");

    let controller = session.shutdown().await.unwrap();
    assert_eq!(controller.game().outcome(), Outcome::Win(tictoc::Player::X));
    assert_eq!(controller.timer().remaining(), 30);
}

#[tokio::test(start_paused = true)]
async fn test_auto_start_runs_clock_immediately() {
    let config = GameConfig::default().with_timer(
        TimerConfig::default()
            .with_duration_secs(2)
            .with_auto_start(true),
    );
    let (session, mut notes) = SessionHandle::spawn(Controller::new(&config));
    next(&mut notes).await;
    assert!(matches!(
        next(&mut notes).await,
        Notification::TimerStarted { remaining: 2, .. }
    ));

    session.send(Event::Reset);
    let controller = session.shutdown().await.unwrap();
    // Reset restarted a fresh run.
    assert_eq!(controller.timer().epoch(), 2);
    assert!(controller.timer().is_running());
}

#[tokio::test]
async fn test_events_handled_in_order_before_shutdown() {
    let (session, mut notes) = SessionHandle::spawn(controller(30));
    for index in [4, 4, 0] {
        session.send(Event::Move(index));
    }
    let controller = session.shutdown().await.unwrap();

    let mut states = 0;
    while let Ok(note) = notes.try_recv() {
        states += matches!(note, Notification::State(_)) as usize;
    }
    // Initial state plus two applied moves; the repeated 4 was ignored.
    assert_eq!(states, 3);
    assert_eq!(controller.game().state().history().len(), 2);
}
