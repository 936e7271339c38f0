use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use rusty_golf_draft::controller::live::next_adjustment;
use rusty_golf_draft::controller::scheduler::ScheduledTask;
use rusty_golf_draft::model::{AppState, GolferId, TournamentPhase, default_roster};
use rusty_golf_draft::mvu::draft::Msg;
use rusty_golf_draft::mvu::runtime::{Board, BoardSettings};

fn counting_task(period: Duration) -> (ScheduledTask, Arc<AtomicUsize>) {
    let count = Arc::new(AtomicUsize::new(0));
    let c = Arc::clone(&count);
    let task = ScheduledTask::spawn("counter", period, move || {
        let c = Arc::clone(&c);
        async move {
            c.fetch_add(1, Ordering::SeqCst);
        }
    });
    (task, count)
}

#[tokio::test(start_paused = true)]
async fn test_ticks_after_each_period_and_stops_on_cancel() {
    let (task, count) = counting_task(Duration::from_secs(10));

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(count.load(Ordering::SeqCst), 0, "first tick waits a full period");

    tokio::time::sleep(Duration::from_secs(30)).await;
    assert_eq!(count.load(Ordering::SeqCst), 3);

    task.cancel();
    assert!(task.is_cancelled());
    tokio::time::sleep(Duration::from_secs(100)).await;
    assert_eq!(count.load(Ordering::SeqCst), 3);
}

#[tokio::test(start_paused = true)]
async fn test_drop_and_shutdown_stop_the_loop() {
    let (task, count) = counting_task(Duration::from_secs(1));
    drop(task);
    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(count.load(Ordering::SeqCst), 0);

    let (task, count) = counting_task(Duration::from_secs(1));
    tokio::time::sleep(Duration::from_millis(2500)).await;
    task.shutdown().await;
    let seen = count.load(Ordering::SeqCst);
    assert_eq!(seen, 2);
    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(count.load(Ordering::SeqCst), seen);
}

#[test]
fn test_simulated_adjustments_follow_their_odds() {
    let golfers: Vec<GolferId> = AppState::new(default_roster()).universe.iter().cloned().collect();
    let mut rng = StdRng::seed_from_u64(7);

    let draws: Vec<_> = (0..2000)
        .filter_map(|_| next_adjustment(&mut rng, &golfers))
        .collect();
    let moved = draws.len();
    assert!((450..=750).contains(&moved), "moved {moved} of 2000");

    let birdies = draws.iter().filter(|a| a.delta == -1).count();
    assert!(draws.iter().all(|a| a.delta == -1 || a.delta == 1));
    let share = birdies as f64 / moved as f64;
    assert!((0.5..=0.7).contains(&share), "birdie share {share}");

    assert!(next_adjustment(&mut rng, &[]).is_none());
}

#[tokio::test(start_paused = true)]
async fn test_board_runs_live_updates_only_while_live() {
    let board = Board::new(
        AppState::new(default_roster()),
        None,
        BoardSettings {
            live_update_every: Duration::from_secs(1),
            rng_seed: Some(42),
            ..BoardSettings::default()
        },
    );
    assert!(!board.live_updates_running().await);

    // no-op before the start
    board.live_tick().await;
    let untouched = board
        .with_state(|s| {
            s.scores
                .golfers()
                .iter()
                .all(|g| s.scores.get(g.as_str()).is_some_and(|x| x.score == 0))
        })
        .await;
    assert!(untouched);

    board.dispatch(Msg::StartTournament(Vec::new())).await;
    assert_eq!(board.phase().await, TournamentPhase::Live);
    assert!(board.live_updates_running().await);

    board.dispatch(Msg::LockDraftOrder).await;
    assert_eq!(board.phase().await, TournamentPhase::Locked);
    assert!(!board.live_updates_running().await);

    let frozen = board.ranking().await;
    tokio::time::sleep(Duration::from_secs(60)).await;
    assert_eq!(board.ranking().await, frozen);
}
