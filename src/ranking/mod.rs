pub mod changes;
pub mod engine;

pub use changes::{RankChange, detect_rank_changes, ordinal};
pub use engine::{RankBy, Ranking, TeamSummary, rank, rank_state};
