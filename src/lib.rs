pub mod args;
pub mod error;
pub mod model;
pub mod odds_text;
pub mod ranking;
pub mod controller {
    pub mod http_handlers;
    pub mod live;
    pub mod odds_fetch;
    pub mod scheduler;
}
pub mod mvu {
    pub mod draft;
    pub mod runtime;
}
pub mod view {
    pub mod index;
    pub mod leaderboard;
}

pub const HTMX_PATH: &str = "https://cdn.jsdelivr.net/npm/htmx.org@2.0.8/dist/htmx.min.js";
