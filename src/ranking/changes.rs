use serde::Serialize;

use crate::ranking::TeamSummary;

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct RankChange {
    pub team: String,
    pub old_rank: usize,
    pub new_rank: usize,
}

/// Teams whose rank differs between two rankings. Teams absent from
/// `previous` are not reported.
#[must_use]
pub fn detect_rank_changes(previous: &[TeamSummary], current: &[TeamSummary]) -> Vec<RankChange> {
    current
        .iter()
        .filter_map(|team| {
            let prev = previous.iter().find(|p| p.name == team.name)?;
            (prev.rank != team.rank).then(|| RankChange {
                team: team.name.clone(),
                old_rank: prev.rank,
                new_rank: team.rank,
            })
        })
        .collect()
}

#[must_use]
pub fn ordinal(rank: usize) -> String {
    let suffix = match (rank % 10, rank % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{rank}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals() {
        let got: Vec<String> = [1, 2, 3, 4, 11, 12, 13, 21, 22, 101, 111]
            .into_iter()
            .map(ordinal)
            .collect();
        assert_eq!(
            got,
            vec![
                "1st", "2nd", "3rd", "4th", "11th", "12th", "13th", "21st", "22nd", "101st",
                "111th"
            ]
        );
    }
}
