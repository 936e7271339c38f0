//! Best-effort extraction of American odds from pasted or fetched pages.
//!
//! Two layouts are handled. Dense pages keep a golfer's name and odds close
//! together on one line; compact pages spread them across lines under column
//! headers. Neither path ever fails: unreadable input gives an empty map.

pub mod desktop;
pub mod html;
pub mod mobile;
pub mod names;

use serde::Serialize;
use tracing::info;

use crate::model::OddsUpdate;

pub use desktop::{DESKTOP_STRATEGIES, DesktopStrategy, collapse_whitespace, match_desktop};
pub use html::visible_text;
pub use mobile::{is_mobile_shape, match_mobile};
pub use names::matches_golfer_name;

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentShape {
    Desktop,
    Mobile,
}

#[must_use]
pub fn detect_shape(text: &str) -> ContentShape {
    if is_mobile_shape(text) {
        ContentShape::Mobile
    } else {
        ContentShape::Desktop
    }
}

/// Find odds for each known golfer in `raw_text`. Golfers without a
/// confident match are left out of the result.
#[must_use]
pub fn match_odds_in_text(raw_text: &str, known_golfers: &[&str]) -> OddsUpdate {
    let text = visible_text(raw_text);
    let shape = detect_shape(&text);
    let found = match shape {
        ContentShape::Mobile => match_mobile(&text, known_golfers),
        ContentShape::Desktop => match_desktop(&text, known_golfers),
    };
    info!(
        ?shape,
        found = found.len(),
        searched = known_golfers.len(),
        "odds text matched"
    );
    found
}
