use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::model::{OddsUpdate, odds_in_range};
use crate::odds_text::names::matches_golfer_name;

/// Lines after a name line that may hold its odds.
pub const ODDS_LOOKAHEAD_LINES: usize = 7;

/// Need this many indicators before treating content as the compact layout.
const MIN_INDICATORS: usize = 2;

static INDICATORS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)\bPLAYER\b",
        r"(?i)\bODDS\b",
        r"(?i)\bPOS\b",
        r"(?i)[0-9]{1,2}:[0-9]{2}\s*[AP]M",
    ]
    .iter()
    .filter_map(|p| Regex::new(p).ok())
    .collect()
});

static ODDS_TOKEN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\+([0-9]{3,5})\b").ok());

/// Compact (phone) leaderboards put names and odds on separate lines under
/// `PLAYER` / `ODDS` / `POS` headers, often next to tee times.
#[must_use]
pub fn is_mobile_shape(text: &str) -> bool {
    INDICATORS.iter().filter(|re| re.is_match(text)).count() >= MIN_INDICATORS
}

fn odds_on_line(line: &str) -> Option<u32> {
    let odds: u32 = ODDS_TOKEN
        .as_ref()?
        .captures(line)?
        .get(1)?
        .as_str()
        .parse()
        .ok()?;
    odds_in_range(odds).then_some(odds)
}

#[must_use]
pub fn match_mobile(text: &str, golfers: &[&str]) -> OddsUpdate {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    let mut found = OddsUpdate::new();

    for (i, line) in lines.iter().enumerate() {
        for &golfer in golfers {
            if found.contains_key(golfer) || !matches_golfer_name(line, golfer) {
                continue;
            }
            debug!(golfer, line, "name line");

            let window_end = (i + 1 + ODDS_LOOKAHEAD_LINES).min(lines.len());
            let hit = lines[i + 1..window_end]
                .iter()
                .find_map(|candidate| odds_on_line(candidate));
            if let Some(odds) = hit {
                debug!(golfer, odds, "odds found");
                found.insert(golfer.to_string(), odds);
            }
        }
    }

    found
}
