use ahash::RandomState;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, info, warn};

use crate::model::golfer::{GolferId, GolferUniverse};

/// Smallest odds value accepted from any source.
pub const MIN_ODDS: u32 = 100;
/// Largest odds value accepted from any source.
pub const MAX_ODDS: u32 = 100_000;

#[must_use]
pub fn odds_in_range(odds: u32) -> bool {
    (MIN_ODDS..=MAX_ODDS).contains(&odds)
}

/// Partial golfer -> odds mapping produced by the text matcher or a fetch.
pub type OddsUpdate = BTreeMap<String, u32>;

/// Golfer -> positive American odds. Every roster golfer has a key from the
/// moment the store is seeded; `None` means no price has been seen yet.
/// Merges only overwrite existing keys.
#[derive(Debug, Clone, Default)]
pub struct OddsStore {
    odds: HashMap<GolferId, Option<u32>, RandomState>,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct OddsChange {
    pub golfer: String,
    /// `None` when the golfer had no odds before this merge.
    pub old: Option<u32>,
    pub new: u32,
}

/// Outcome of one merge, split so callers can tell "nothing new" from "applied".
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct MergeReport {
    pub changed: Vec<OddsChange>,
    pub unchanged: Vec<String>,
    pub unknown: Vec<String>,
}

impl MergeReport {
    #[must_use]
    pub fn change_count(&self) -> usize {
        self.changed.len()
    }

    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.changed.is_empty()
    }
}

impl OddsStore {
    /// Key every golfer in `universe`, then fill in the `(name, odds)` pairs.
    /// Names outside the universe and zero odds are dropped with a warning.
    pub fn seed<'a>(
        universe: &GolferUniverse,
        pairs: impl IntoIterator<Item = (&'a str, u32)>,
    ) -> Self {
        let mut odds: HashMap<GolferId, Option<u32>, RandomState> =
            universe.iter().map(|id| (id.clone(), None)).collect();
        for (name, value) in pairs {
            let Some(id) = universe.resolve(name) else {
                debug!(golfer = name, "seed odds for golfer outside the roster, skipping");
                continue;
            };
            if value == 0 {
                warn!(golfer = name, "seed odds of zero, skipping");
                continue;
            }
            odds.insert(id.clone(), Some(value));
        }
        let unpriced = odds.values().filter(|v| v.is_none()).count();
        if unpriced > 0 {
            info!(unpriced, "golfers start without odds");
        }
        Self { odds }
    }

    /// Current odds, or `None` for unknown or not yet priced golfers.
    #[must_use]
    pub fn get(&self, golfer: &str) -> Option<u32> {
        self.odds.get(golfer).copied().flatten()
    }

    /// Whether `golfer` is part of the store's key set, priced or not.
    #[must_use]
    pub fn contains(&self, golfer: &str) -> bool {
        self.odds.contains_key(golfer)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.odds.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.odds.is_empty()
    }

    #[must_use]
    pub fn priced_count(&self) -> usize {
        self.odds.values().filter(|v| v.is_some()).count()
    }

    /// Priced golfers sorted by name.
    #[must_use]
    pub fn to_sorted(&self) -> BTreeMap<String, u32> {
        self.odds
            .iter()
            .filter_map(|(k, v)| v.map(|odds| (k.to_string(), odds)))
            .collect()
    }

    /// Apply `updates` golfer by golfer. See [`merge_odds`].
    pub fn merge(&mut self, updates: &OddsUpdate) -> MergeReport {
        let mut report = MergeReport::default();

        for (golfer, &new) in updates {
            match self.odds.get_mut(golfer.as_str()) {
                Some(slot) if *slot != Some(new) => {
                    info!(golfer = %golfer, old = ?*slot, new, "odds updated");
                    report.changed.push(OddsChange {
                        golfer: golfer.clone(),
                        old: *slot,
                        new,
                    });
                    *slot = Some(new);
                }
                Some(_) => {
                    debug!(golfer = %golfer, odds = new, "odds unchanged");
                    report.unchanged.push(golfer.clone());
                }
                None => {
                    warn!(golfer = %golfer, "odds update for unknown golfer ignored");
                    report.unknown.push(golfer.clone());
                }
            }
        }

        info!(
            changed = report.changed.len(),
            unchanged = report.unchanged.len(),
            unknown = report.unknown.len(),
            "odds merge complete"
        );
        report
    }
}

/// Merge a partial odds mapping into the store and report what changed.
///
/// Keys missing from the store are ignored; the golfer set never grows.
pub fn merge_odds(store: &mut OddsStore, updates: &OddsUpdate) -> MergeReport {
    store.merge(updates)
}

/// Collect a static `(name, odds)` table into an update map.
#[must_use]
pub fn odds_update_from_table(table: &[(&str, u32)]) -> OddsUpdate {
    table
        .iter()
        .map(|(name, odds)| ((*name).to_string(), *odds))
        .collect()
}
