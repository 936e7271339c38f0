use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;
use tracing::debug;

use crate::model::{OddsUpdate, odds_in_range};

static WHITESPACE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\s+").ok());

/// Ways of pairing a golfer with a number in dense, single-line content.
/// Tried in declaration order; the first in-range hit wins.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DesktopStrategy {
    ExactNameThenNumber,
    NumberThenExactName,
    NameGapThenNumber,
    LastNameGapThenNumber,
}

pub const DESKTOP_STRATEGIES: [DesktopStrategy; 4] = [
    DesktopStrategy::ExactNameThenNumber,
    DesktopStrategy::NumberThenExactName,
    DesktopStrategy::NameGapThenNumber,
    DesktopStrategy::LastNameGapThenNumber,
];

impl DesktopStrategy {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::ExactNameThenNumber => "exact-name-then-number",
            Self::NumberThenExactName => "number-then-exact-name",
            Self::NameGapThenNumber => "name-gap-then-number",
            Self::LastNameGapThenNumber => "last-name-gap-then-number",
        }
    }

    fn pattern(self, golfer: &str) -> String {
        let name = regex::escape(golfer);
        match self {
            Self::ExactNameThenNumber => format!(r"(?i){name}\s*\+?([0-9]{{3,5}})\b"),
            Self::NumberThenExactName => format!(r"(?i)\+?([0-9]{{3,5}})\s+{name}"),
            Self::NameGapThenNumber => format!(r"(?i){name}.{{0,20}}?\+?([0-9]{{3,5}})\b"),
            Self::LastNameGapThenNumber => {
                let last = golfer.split_whitespace().last().unwrap_or(golfer);
                format!(r"(?i){}.{{0,30}}?\+?([0-9]{{3,5}})\b", regex::escape(last))
            }
        }
    }

    /// Odds for `golfer` from the first match of this strategy, if that match
    /// is in range.
    #[must_use]
    pub fn find(self, text: &str, golfer: &str) -> Option<u32> {
        let re = match Regex::new(&self.pattern(golfer)) {
            Ok(re) => re,
            Err(e) => {
                debug!(strategy = self.name(), golfer, error = %e, "pattern rejected");
                return None;
            }
        };
        let odds: u32 = re.captures(text)?.get(1)?.as_str().parse().ok()?;
        if odds_in_range(odds) {
            Some(odds)
        } else {
            debug!(strategy = self.name(), golfer, odds, "odds out of range");
            None
        }
    }
}

/// Collapse every whitespace run, newlines included, to one space.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    match WHITESPACE.as_ref() {
        Some(re) => re.replace_all(text, " ").trim().to_string(),
        None => text.split_whitespace().collect::<Vec<_>>().join(" "),
    }
}

#[must_use]
pub fn match_desktop(text: &str, golfers: &[&str]) -> OddsUpdate {
    let content = collapse_whitespace(text);
    let mut found = OddsUpdate::new();

    for &golfer in golfers {
        let hit = DESKTOP_STRATEGIES
            .iter()
            .find_map(|&strategy| strategy.find(&content, golfer).map(|odds| (strategy, odds)));
        match hit {
            Some((strategy, odds)) => {
                debug!(golfer, odds, strategy = strategy.name(), "odds found");
                found.insert(golfer.to_string(), odds);
            }
            None => debug!(golfer, "odds not found"),
        }
    }

    found
}
