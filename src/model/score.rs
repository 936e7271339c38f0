use ahash::RandomState;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

use crate::model::golfer::{GolferId, GolferUniverse};

/// Thru marker before a golfer tees off.
pub const THRU_NOT_STARTED: &str = "--";
/// Thru marker once a round is finished.
pub const THRU_FINISHED: &str = "F";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct GolferScore {
    pub score: i32,
    pub thru: String,
}

impl Default for GolferScore {
    fn default() -> Self {
        Self {
            score: 0,
            thru: THRU_NOT_STARTED.to_string(),
        }
    }
}

/// One row of incoming score data, keyed by a raw name until validated.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ScoreEntry {
    pub golfer: String,
    pub score: i32,
    #[serde(default = "not_started")]
    pub thru: String,
}

fn not_started() -> String {
    THRU_NOT_STARTED.to_string()
}

#[derive(Debug, Clone, Default)]
pub struct ScoreStore {
    scores: HashMap<GolferId, GolferScore, RandomState>,
}

impl ScoreStore {
    /// Every known golfer at even par, not started.
    #[must_use]
    pub fn zeroed(universe: &GolferUniverse) -> Self {
        let scores = universe
            .iter()
            .map(|id| (id.clone(), GolferScore::default()))
            .collect();
        Self { scores }
    }

    /// Build a fresh store from incoming rows. Replaces, never merges: golfers
    /// missing from `entries` read as the default afterwards.
    #[must_use]
    pub fn from_entries(universe: &GolferUniverse, entries: &[ScoreEntry]) -> Self {
        let mut scores = HashMap::default();
        for entry in entries {
            match universe.resolve(&entry.golfer) {
                Some(id) => {
                    scores.insert(
                        id.clone(),
                        GolferScore {
                            score: entry.score,
                            thru: entry.thru.clone(),
                        },
                    );
                }
                None => warn!(golfer = %entry.golfer, "score for golfer outside the roster, skipping"),
            }
        }
        Self { scores }
    }

    #[must_use]
    pub fn get(&self, golfer: &str) -> Option<&GolferScore> {
        self.scores.get(golfer)
    }

    /// Shift one golfer's score. Returns false for golfers not in the store.
    pub fn adjust(&mut self, golfer: &str, delta: i32) -> bool {
        match self.scores.get_mut(golfer) {
            Some(s) => {
                s.score = s.score.saturating_add(delta);
                true
            }
            None => false,
        }
    }

    /// Golfers with a score entry, sorted by name.
    #[must_use]
    pub fn golfers(&self) -> Vec<GolferId> {
        let mut golfers: Vec<GolferId> = self.scores.keys().cloned().collect();
        golfers.sort();
        golfers
    }

    #[must_use]
    pub fn all_finished(&self) -> bool {
        !self.scores.is_empty() && self.scores.values().all(|s| s.thru == THRU_FINISHED)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// Collect a static `(name, score, thru)` table into score rows.
#[must_use]
pub fn score_entries_from_table(table: &[(&str, i32, &str)]) -> Vec<ScoreEntry> {
    table
        .iter()
        .map(|(golfer, score, thru)| ScoreEntry {
            golfer: (*golfer).to_string(),
            score: *score,
            thru: (*thru).to_string(),
        })
        .collect()
}

/// Golf convention: `E` for even, explicit `+` over par, native `-` under.
#[must_use]
pub fn format_score(score: i32) -> String {
    match score {
        0 => "E".to_string(),
        s if s > 0 => format!("+{s}"),
        s => s.to_string(),
    }
}

#[must_use]
pub fn score_class(score: i32) -> &'static str {
    match score {
        s if s < 0 => "score-under",
        s if s > 0 => "score-over",
        _ => "score-even",
    }
}

#[must_use]
pub fn format_odds(odds: u32) -> String {
    format!("+{odds}")
}
