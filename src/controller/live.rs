use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

use crate::model::GolferId;

/// Chance that a tick moves the chosen golfer at all.
pub const SCORE_CHANGE_CHANCE: f64 = 0.3;
/// Given a move, chance it is a birdie rather than a bogey.
pub const BIRDIE_CHANCE: f64 = 0.6;

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ScoreAdjustment {
    pub golfer: GolferId,
    pub delta: i32,
}

/// One simulated tick: pick a golfer, then maybe move them a stroke.
///
/// Returns `None` for an empty field or when the roll says nothing happened.
pub fn next_adjustment<R: Rng + ?Sized>(
    rng: &mut R,
    golfers: &[GolferId],
) -> Option<ScoreAdjustment> {
    let golfer = golfers.choose(rng)?;
    if !rng.gen_bool(SCORE_CHANGE_CHANCE) {
        return None;
    }
    let delta = if rng.gen_bool(BIRDIE_CHANCE) { -1 } else { 1 };
    Some(ScoreAdjustment {
        golfer: golfer.clone(),
        delta,
    })
}
