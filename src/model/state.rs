use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use crate::model::defaults::FALLBACK_ODDS;
use crate::model::golfer::GolferUniverse;
use crate::model::odds::{MergeReport, OddsStore};
use crate::model::score::ScoreStore;
use crate::model::team::Team;
use crate::ranking::TeamSummary;

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TournamentPhase {
    PreTournament,
    Live,
    Locked,
    Complete,
}

impl TournamentPhase {
    /// Ranking switches from odds to score once play has begun.
    #[must_use]
    pub fn tournament_started(self) -> bool {
        !matches!(self, Self::PreTournament)
    }
}

impl fmt::Display for TournamentPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::PreTournament => "Pre-Tournament (Odds-Based Ranking)",
            Self::Live => "Live Tournament",
            Self::Locked => "Draft Order Locked",
            Self::Complete => "Tournament Complete",
        };
        write!(f, "{s}")
    }
}

/// What the last odds action produced, shown to the operator.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub enum OddsOutcome {
    Updated(usize),
    NoChanges,
    NoOddsFound,
    FetchFailed(String),
    RefreshSkipped,
}

impl OddsOutcome {
    #[must_use]
    pub fn from_report(report: &MergeReport) -> Self {
        if report.is_noop() {
            Self::NoChanges
        } else {
            Self::Updated(report.change_count())
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Updated(_) | Self::NoChanges)
    }
}

impl fmt::Display for OddsOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Updated(1) => write!(f, "Updated odds for 1 golfer"),
            Self::Updated(n) => write!(f, "Updated odds for {n} golfers"),
            Self::NoChanges => write!(f, "No changes"),
            Self::NoOddsFound => write!(f, "No odds found in the supplied content"),
            Self::FetchFailed(e) => write!(f, "Odds fetch failed: {e}"),
            Self::RefreshSkipped => write!(f, "Odds refresh already running"),
        }
    }
}

/// Everything the board knows. Mutated only by `mvu::draft::update`.
#[derive(Debug, Clone)]
pub struct AppState {
    pub teams: Vec<Team>,
    pub universe: GolferUniverse,
    pub odds: OddsStore,
    pub scores: ScoreStore,
    pub phase: TournamentPhase,
    /// Ranking just before the most recent reorder.
    pub previous_ranking: Vec<TeamSummary>,
    pub last_odds_outcome: Option<OddsOutcome>,
    pub last_updated: DateTime<Utc>,
}

impl AppState {
    /// Roster plus the static fallback odds, all scores zeroed.
    #[must_use]
    pub fn new(teams: Vec<Team>) -> Self {
        let universe = GolferUniverse::from_teams(&teams);
        let odds = OddsStore::seed(&universe, FALLBACK_ODDS.iter().copied());
        Self::with_odds(teams, universe, odds)
    }

    #[must_use]
    pub fn with_odds(teams: Vec<Team>, universe: GolferUniverse, odds: OddsStore) -> Self {
        let scores = ScoreStore::zeroed(&universe);
        Self {
            teams,
            universe,
            odds,
            scores,
            phase: TournamentPhase::PreTournament,
            previous_ranking: Vec::new(),
            last_odds_outcome: None,
            last_updated: Utc::now(),
        }
    }

    #[must_use]
    pub fn tournament_started(&self) -> bool {
        self.phase.tournament_started()
    }

    pub fn touch(&mut self) {
        self.last_updated = Utc::now();
    }
}
