use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::model::{AppState, OddsStore, ScoreStore, THRU_NOT_STARTED, Team};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TeamSummary {
    pub rank: usize,
    pub name: String,
    pub golfer1: String,
    pub golfer2: String,
    pub golfer1_score: i32,
    pub golfer2_score: i32,
    pub golfer1_thru: String,
    pub golfer2_thru: String,
    pub golfer1_odds: u32,
    pub golfer2_odds: u32,
    pub total_score: i32,
    pub combined_odds: u32,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RankBy {
    CombinedOdds,
    TotalScore,
}

impl RankBy {
    #[must_use]
    pub fn for_phase(tournament_started: bool) -> Self {
        if tournament_started {
            Self::TotalScore
        } else {
            Self::CombinedOdds
        }
    }

    #[must_use]
    pub fn key(self, summary: &TeamSummary) -> i64 {
        match self {
            Self::CombinedOdds => i64::from(summary.combined_odds),
            Self::TotalScore => i64::from(summary.total_score),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Ranking {
    pub ranked_by: RankBy,
    pub teams: Vec<TeamSummary>,
    /// Odds or score lookups that fell back to a default.
    pub defaulted_lookups: usize,
}

struct Lookup {
    score: i32,
    thru: String,
    odds: u32,
}

fn lookup(golfer: &str, odds: &OddsStore, scores: &ScoreStore, defaulted: &mut usize) -> Lookup {
    let (score, thru) = match scores.get(golfer) {
        Some(s) => (s.score, s.thru.clone()),
        None => {
            *defaulted += 1;
            (0, THRU_NOT_STARTED.to_string())
        }
    };
    let odds = odds.get(golfer).unwrap_or_else(|| {
        *defaulted += 1;
        0
    });
    Lookup { score, thru, odds }
}

/// Rank teams by combined odds before the tournament, by total score after.
///
/// Lower is better in both phases. The sort is stable, ties share the rank of
/// their first position and the next distinct value takes its own position
/// (1, 2, 2, 4). Missing golfers read as zero; the count of such lookups is
/// returned in [`Ranking::defaulted_lookups`].
#[must_use]
pub fn rank(
    teams: &[Team],
    odds: &OddsStore,
    scores: &ScoreStore,
    tournament_started: bool,
) -> Ranking {
    let mut defaulted = 0;

    let mut summaries: Vec<TeamSummary> = teams
        .iter()
        .map(|team| {
            let g1 = lookup(&team.golfer1, odds, scores, &mut defaulted);
            let g2 = lookup(&team.golfer2, odds, scores, &mut defaulted);
            TeamSummary {
                rank: 0,
                name: team.name.clone(),
                golfer1: team.golfer1.clone(),
                golfer2: team.golfer2.clone(),
                golfer1_score: g1.score,
                golfer2_score: g2.score,
                golfer1_thru: g1.thru,
                golfer2_thru: g2.thru,
                golfer1_odds: g1.odds,
                golfer2_odds: g2.odds,
                total_score: g1.score.saturating_add(g2.score),
                combined_odds: g1.odds.saturating_add(g2.odds),
            }
        })
        .collect();

    let ranked_by = RankBy::for_phase(tournament_started);
    summaries.sort_by_key(|s| ranked_by.key(s));
    assign_competition_ranks(&mut summaries, ranked_by);

    if defaulted > 0 {
        warn!(defaulted, "ranking used default values for missing golfer data");
    }

    Ranking {
        ranked_by,
        teams: summaries,
        defaulted_lookups: defaulted,
    }
}

fn assign_competition_ranks(sorted: &mut [TeamSummary], ranked_by: RankBy) {
    let mut current_rank = 1;
    let mut prev_key = None;
    for (i, summary) in sorted.iter_mut().enumerate() {
        let key = ranked_by.key(summary);
        if prev_key.is_some_and(|prev| prev != key) {
            current_rank = i + 1;
        }
        summary.rank = current_rank;
        prev_key = Some(key);
    }
}

/// Rank the current board state.
#[must_use]
pub fn rank_state(state: &AppState) -> Ranking {
    rank(
        &state.teams,
        &state.odds,
        &state.scores,
        state.tournament_started(),
    )
}
