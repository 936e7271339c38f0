use tracing::{info, warn};

use crate::controller::live::ScoreAdjustment;
use crate::error::CoreError;
use crate::model::defaults::{SAMPLE_SCORES, SIMULATED_ODDS};
use crate::model::{
    AppState, OddsOutcome, OddsUpdate, ScoreEntry, ScoreStore, TournamentPhase,
    odds_update_from_table, score_entries_from_table,
};
use crate::odds_text::match_odds_in_text;
use crate::ranking::{detect_rank_changes, rank_state};

#[derive(Debug)]
pub enum Msg {
    /// Free text from the operator, possibly raw HTML.
    OddsPasted(String),
    OddsFetched(Result<OddsUpdate, CoreError>),
    /// A refresh was asked for while another was still in flight.
    OddsRefreshSkipped,
    SimulateOdds,
    /// Begin play. An empty list starts from the bundled sample scores.
    StartTournament(Vec<ScoreEntry>),
    /// A full replacement from a live score feed.
    ScoresReplaced(Vec<ScoreEntry>),
    ScoreAdjusted(ScoreAdjustment),
    LockDraftOrder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    StartLiveUpdates,
    StopLiveUpdates,
    StopOddsRefresh,
}

fn apply_odds(state: &mut AppState, found: &OddsUpdate) {
    if found.is_empty() {
        state.last_odds_outcome = Some(OddsOutcome::NoOddsFound);
        return;
    }
    let report = state.odds.merge(found);
    if !report.is_noop() {
        state.touch();
    }
    state.last_odds_outcome = Some(OddsOutcome::from_report(&report));
}

/// Apply one message. When it reorders the board, the ranking from just before
/// is kept in `previous_ranking` so every reader sees the same movement.
pub fn update(state: &mut AppState, msg: Msg) -> Vec<Effect> {
    let before = rank_state(state).teams;
    let effects = handle(state, msg);
    let after = rank_state(state).teams;
    if !detect_rank_changes(&before, &after).is_empty() {
        state.previous_ranking = before;
    }
    effects
}

fn handle(state: &mut AppState, msg: Msg) -> Vec<Effect> {
    match msg {
        Msg::OddsPasted(text) => {
            let found = match_odds_in_text(&text, &state.universe.names());
            apply_odds(state, &found);
            vec![]
        }
        Msg::OddsFetched(Ok(found)) => {
            apply_odds(state, &found);
            vec![]
        }
        Msg::OddsFetched(Err(e)) => {
            warn!(error = %e, "keeping previous odds");
            state.last_odds_outcome = Some(OddsOutcome::FetchFailed(e.to_string()));
            vec![]
        }
        Msg::OddsRefreshSkipped => {
            state.last_odds_outcome = Some(OddsOutcome::RefreshSkipped);
            vec![]
        }
        Msg::SimulateOdds => {
            apply_odds(state, &odds_update_from_table(SIMULATED_ODDS));
            vec![]
        }
        Msg::StartTournament(entries) => {
            if state.phase != TournamentPhase::PreTournament {
                warn!(phase = ?state.phase, "tournament already started");
                return vec![];
            }
            let entries = if entries.is_empty() {
                score_entries_from_table(SAMPLE_SCORES)
            } else {
                entries
            };
            state.scores = ScoreStore::from_entries(&state.universe, &entries);
            state.phase = TournamentPhase::Live;
            state.touch();
            info!(golfers = state.scores.len(), "tournament started");
            vec![Effect::StopOddsRefresh, Effect::StartLiveUpdates]
        }
        Msg::ScoresReplaced(entries) => {
            if state.phase != TournamentPhase::Live {
                warn!(phase = ?state.phase, "score feed ignored outside live play");
                return vec![];
            }
            state.scores = ScoreStore::from_entries(&state.universe, &entries);
            state.touch();
            if state.scores.all_finished() {
                state.phase = TournamentPhase::Complete;
                info!("every golfer finished, tournament complete");
                vec![Effect::StopLiveUpdates]
            } else {
                vec![]
            }
        }
        Msg::ScoreAdjusted(adj) => {
            if state.phase == TournamentPhase::Live
                && state.scores.adjust(adj.golfer.as_str(), adj.delta)
            {
                state.touch();
            }
            vec![]
        }
        Msg::LockDraftOrder => {
            if state.phase != TournamentPhase::Live {
                warn!(phase = ?state.phase, "draft order can only be locked during play");
                return vec![];
            }
            state.phase = TournamentPhase::Locked;
            state.touch();
            info!("draft order locked");
            vec![Effect::StopLiveUpdates]
        }
    }
}
