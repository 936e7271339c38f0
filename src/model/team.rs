use serde::{Deserialize, Serialize};

use crate::model::defaults::DEFAULT_ROSTER;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Team {
    pub name: String,
    pub golfer1: String,
    pub golfer2: String,
}

impl Team {
    /// Surrounding whitespace is dropped so lookups match the golfer universe.
    #[must_use]
    pub fn new(name: &str, golfer1: &str, golfer2: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            golfer1: golfer1.trim().to_string(),
            golfer2: golfer2.trim().to_string(),
        }
    }

    /// Copy with every name trimmed.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        Self::new(&self.name, &self.golfer1, &self.golfer2)
    }
}

/// The twelve draft teams, in draft-sheet order.
#[must_use]
pub fn default_roster() -> Vec<Team> {
    DEFAULT_ROSTER
        .iter()
        .map(|(name, g1, g2)| Team::new(name, g1, g2))
        .collect()
}
