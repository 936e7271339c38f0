use chrono::{DateTime, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info};

use crate::controller::live::next_adjustment;
use crate::controller::odds_fetch::OddsFetcher;
use crate::controller::scheduler::ScheduledTask;
use crate::error::CoreError;
use crate::model::{AppState, OddsOutcome, TournamentPhase};
use crate::mvu::draft::{Effect, Msg, update};
use crate::ranking::{RankChange, Ranking, detect_rank_changes, rank_state};

#[derive(Debug, Clone)]
pub struct BoardSettings {
    pub odds_refresh_every: Duration,
    pub live_update_every: Duration,
    /// Fixed seed for the score simulator; `None` seeds from the OS.
    pub rng_seed: Option<u64>,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            odds_refresh_every: Duration::from_secs(600),
            live_update_every: Duration::from_secs(30),
            rng_seed: None,
        }
    }
}

/// Everything a page render needs, taken under one lock.
#[derive(Serialize, Clone, Debug)]
pub struct BoardSnapshot {
    pub ranking: Ranking,
    pub changes: Vec<RankChange>,
    pub phase: TournamentPhase,
    pub last_odds_outcome: Option<OddsOutcome>,
    pub last_updated: DateTime<Utc>,
    pub web_odds: bool,
}

/// Owns the state and runs the effects `update` asks for.
pub struct Board {
    state: RwLock<AppState>,
    fetcher: Option<OddsFetcher>,
    refresh_guard: Mutex<()>,
    odds_task: Mutex<Option<ScheduledTask>>,
    live_task: Mutex<Option<ScheduledTask>>,
    rng: Mutex<StdRng>,
    settings: BoardSettings,
}

impl Board {
    #[must_use]
    pub fn new(state: AppState, fetcher: Option<OddsFetcher>, settings: BoardSettings) -> Arc<Self> {
        let rng = match settings.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Arc::new(Self {
            state: RwLock::new(state),
            fetcher,
            refresh_guard: Mutex::new(()),
            odds_task: Mutex::new(None),
            live_task: Mutex::new(None),
            rng: Mutex::new(rng),
            settings,
        })
    }

    #[must_use]
    pub fn web_odds(&self) -> bool {
        self.fetcher.is_some()
    }

    /// Run `update` under the write lock and hand back its effects unexecuted.
    pub async fn apply(&self, msg: Msg) -> Vec<Effect> {
        let mut state = self.state.write().await;
        update(&mut state, msg)
    }

    /// Apply a message and carry out the resulting effects.
    pub async fn dispatch(self: &Arc<Self>, msg: Msg) -> Vec<Effect> {
        let effects = self.apply(msg).await;
        for effect in &effects {
            self.run_effect(*effect).await;
        }
        effects
    }

    async fn run_effect(self: &Arc<Self>, effect: Effect) {
        debug!(?effect, "effect start");
        match effect {
            Effect::StartLiveUpdates => {
                let task = self.spawn_live_updates();
                if let Some(old) = self.live_task.lock().await.replace(task) {
                    old.cancel();
                }
            }
            Effect::StopLiveUpdates => {
                if let Some(task) = self.live_task.lock().await.take() {
                    task.cancel();
                }
            }
            Effect::StopOddsRefresh => {
                if let Some(task) = self.odds_task.lock().await.take() {
                    task.cancel();
                }
            }
        }
        debug!(?effect, "effect done");
    }

    fn spawn_live_updates(self: &Arc<Self>) -> ScheduledTask {
        let board = Arc::downgrade(self);
        ScheduledTask::spawn("live-updates", self.settings.live_update_every, move || {
            let board: Weak<Self> = board.clone();
            async move {
                if let Some(board) = board.upgrade() {
                    board.live_tick().await;
                }
            }
        })
    }

    /// Start periodic odds refreshes. A no-op without a web odds source.
    pub async fn start_odds_refresh(self: &Arc<Self>) {
        if self.fetcher.is_none() {
            return;
        }
        let board = Arc::downgrade(self);
        let task = ScheduledTask::spawn("odds-refresh", self.settings.odds_refresh_every, move || {
            let board: Weak<Self> = board.clone();
            async move {
                if let Some(board) = board.upgrade() {
                    board.odds_refresh_tick().await;
                }
            }
        });
        if let Some(old) = self.odds_task.lock().await.replace(task) {
            old.cancel();
        }
    }

    /// One simulator step. Does nothing outside live play.
    pub async fn live_tick(&self) {
        let golfers = {
            let state = self.state.read().await;
            if state.phase != TournamentPhase::Live {
                return;
            }
            state.scores.golfers()
        };
        let adjustment = {
            let mut rng = self.rng.lock().await;
            next_adjustment(&mut *rng, &golfers)
        };
        if let Some(adj) = adjustment {
            debug!(golfer = %adj.golfer, delta = adj.delta, "simulated score change");
            // score adjustments never schedule work
            self.apply(Msg::ScoreAdjusted(adj)).await;
        }
    }

    /// Periodic refresh. Only fetches before play starts.
    pub async fn odds_refresh_tick(&self) {
        if self.state.read().await.tournament_started() {
            debug!("tournament underway, odds refresh skipped");
            return;
        }
        self.refresh_odds().await;
    }

    /// Fetch web odds and merge them. At most one refresh runs at a time; an
    /// overlapping call returns [`OddsOutcome::RefreshSkipped`] without fetching.
    pub async fn refresh_odds(&self) -> OddsOutcome {
        let Ok(_guard) = self.refresh_guard.try_lock() else {
            info!("odds refresh already in flight");
            self.apply(Msg::OddsRefreshSkipped).await;
            return OddsOutcome::RefreshSkipped;
        };

        let result = match &self.fetcher {
            Some(fetcher) => {
                let names: Vec<String> = {
                    let state = self.state.read().await;
                    state.universe.names().into_iter().map(str::to_string).collect()
                };
                let names: Vec<&str> = names.iter().map(String::as_str).collect();
                fetcher.fetch_odds(&names).await
            }
            None => Err(CoreError::InvalidInput(
                "web odds are disabled, start with --odds-source web".into(),
            )),
        };

        let mut state = self.state.write().await;
        update(&mut state, Msg::OddsFetched(result));
        state
            .last_odds_outcome
            .clone()
            .unwrap_or(OddsOutcome::NoChanges)
    }

    /// Current ranking without touching the movement history.
    pub async fn ranking(&self) -> Ranking {
        rank_state(&*self.state.read().await)
    }

    /// Rank and diff against the ranking before the last reorder. Read only.
    pub async fn snapshot(&self) -> BoardSnapshot {
        let state = self.state.read().await;
        let ranking = rank_state(&state);
        let changes = detect_rank_changes(&state.previous_ranking, &ranking.teams);
        BoardSnapshot {
            ranking,
            changes,
            phase: state.phase,
            last_odds_outcome: state.last_odds_outcome.clone(),
            last_updated: state.last_updated,
            web_odds: self.web_odds(),
        }
    }

    pub async fn phase(&self) -> TournamentPhase {
        self.state.read().await.phase
    }

    pub async fn live_updates_running(&self) -> bool {
        self.live_task
            .lock()
            .await
            .as_ref()
            .is_some_and(|t| !t.is_cancelled())
    }

    pub async fn odds_refresh_running(&self) -> bool {
        self.odds_task
            .lock()
            .await
            .as_ref()
            .is_some_and(|t| !t.is_cancelled())
    }

    /// Read-only view of the state, for tests and the JSON endpoint.
    pub async fn with_state<T>(&self, f: impl FnOnce(&AppState) -> T) -> T {
        f(&*self.state.read().await)
    }
}
