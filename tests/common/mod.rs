use std::sync::Arc;

use rusty_golf_draft::model::{AppState, default_roster};
use rusty_golf_draft::mvu::runtime::{Board, BoardSettings};

/// Board over the built-in roster with fallback odds and no web source.
pub fn static_board() -> Arc<Board> {
    Board::new(
        AppState::new(default_roster()),
        None,
        BoardSettings {
            rng_seed: Some(1),
            ..BoardSettings::default()
        },
    )
}

pub fn texts(document: &scraper::Html, selector: &str) -> Vec<String> {
    let Ok(selector) = scraper::Selector::parse(selector) else {
        panic!("bad selector {selector}");
    };
    document
        .select(&selector)
        .map(|e| e.text().collect::<String>().trim().to_string())
        .collect()
}
