use ahash::RandomState;
use serde::Serialize;
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;

use crate::model::team::Team;

/// A golfer name that was validated against the universe at startup.
///
/// Only [`GolferUniverse`] hands these out, so a store keyed by `GolferId`
/// can never grow a key outside the roster.
#[derive(Serialize, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct GolferId(String);

impl GolferId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for GolferId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for GolferId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GolferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The closed set of golfers referenced by the roster, in roster order.
#[derive(Debug, Clone, Default)]
pub struct GolferUniverse {
    golfers: Vec<GolferId>,
    index: HashMap<String, usize, RandomState>,
}

impl GolferUniverse {
    #[must_use]
    pub fn from_teams(teams: &[Team]) -> Self {
        let mut universe = Self::default();
        for team in teams {
            universe.insert(&team.golfer1);
            universe.insert(&team.golfer2);
        }
        universe
    }

    fn insert(&mut self, name: &str) {
        let name = name.trim();
        if name.is_empty() || self.index.contains_key(name) {
            return;
        }
        self.index.insert(name.to_string(), self.golfers.len());
        self.golfers.push(GolferId(name.to_string()));
    }

    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<&GolferId> {
        self.index.get(name.trim()).map(|&i| &self.golfers[i])
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name.trim())
    }

    pub fn iter(&self) -> impl Iterator<Item = &GolferId> {
        self.golfers.iter()
    }

    /// Plain names in roster order, the shape the odds text matcher wants.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.golfers.iter().map(GolferId::as_str).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.golfers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.golfers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn universe_dedupes_and_keeps_roster_order() {
        let teams = vec![
            Team::new("A", "Rory McIlroy", "J.J. Spaun"),
            Team::new("B", "J.J. Spaun", "Sam Burns"),
        ];
        let universe = GolferUniverse::from_teams(&teams);
        assert_eq!(
            universe.names(),
            vec!["Rory McIlroy", "J.J. Spaun", "Sam Burns"]
        );
        assert!(universe.resolve(" Sam Burns ").is_some());
        assert!(universe.resolve("Scottie Scheffler").is_none());
    }
}
