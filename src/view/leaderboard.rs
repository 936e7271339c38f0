use maud::{Markup, html};

use crate::model::{TournamentPhase, format_odds, format_score, score_class};
use crate::mvu::runtime::BoardSnapshot;
use crate::ranking::{RankChange, TeamSummary, ordinal};

fn phase_class(phase: TournamentPhase) -> &'static str {
    match phase {
        TournamentPhase::PreTournament => "status-pre",
        TournamentPhase::Live => "status-live",
        TournamentPhase::Locked => "status-locked",
        TournamentPhase::Complete => "status-complete",
    }
}

#[must_use]
pub fn render_status(snapshot: &BoardSnapshot) -> Markup {
    html! {
        div id="tournament-status" class={ "tournament-status " (phase_class(snapshot.phase)) } {
            span class="status-indicator" {}
            span class="status-text" { (snapshot.phase) }
            span class="last-updated" {
                "Updated " (snapshot.last_updated.format("%H:%M:%S UTC"))
            }
        }
        @if let Some(outcome) = &snapshot.last_odds_outcome {
            div id="odds-outcome"
                class=(if outcome.is_success() { "odds-outcome ok" } else { "odds-outcome err" }) {
                (outcome)
            }
        }
    }
}

fn render_golfer(name: &str, odds: u32, score: i32, thru: &str, started: bool) -> Markup {
    html! {
        div class="golfer-info" {
            div class="golfer-name" {
                (name) " "
                span class="odds" { (format_odds(odds)) }
            }
            div class="golfer-score" {
                @if started {
                    span class=(score_class(score)) { (format_score(score)) }
                    " "
                    span class="thru" { "(" (thru) ")" }
                } @else {
                    "(" (thru) ")"
                }
            }
        }
    }
}

fn render_row(team: &TeamSummary, changed: bool, started: bool) -> Markup {
    html! {
        tr class=(if changed { "team-row rank-change" } else { "team-row" }) {
            td class="rank" { (team.rank) }
            td class="team-name" { (team.name) }
            td { (render_golfer(&team.golfer1, team.golfer1_odds, team.golfer1_score, &team.golfer1_thru, started)) }
            td { (render_golfer(&team.golfer2, team.golfer2_odds, team.golfer2_score, &team.golfer2_thru, started)) }
            @if started {
                td class={ "total-score " (score_class(team.total_score)) } { (format_score(team.total_score)) }
            } @else {
                td class="total-score" { (format_odds(team.combined_odds)) }
            }
        }
    }
}

fn render_changes(changes: &[RankChange]) -> Markup {
    html! {
        @if !changes.is_empty() {
            ul class="rank-changes" {
                @for change in changes {
                    li {
                        (change.team) ": " (ordinal(change.old_rank)) " to " (ordinal(change.new_rank))
                    }
                }
            }
        }
    }
}

/// Status line plus the ranked table. Served on its own for htmx swaps.
#[must_use]
pub fn render_board(snapshot: &BoardSnapshot) -> Markup {
    let started = snapshot.phase.tournament_started();
    html! {
        (render_status(snapshot))
        table class="leaderboard" {
            thead {
                tr {
                    th { "Rank" }
                    th { "Team" }
                    th { "Golfer 1" }
                    th { "Golfer 2" }
                    th { @if started { "Total" } @else { "Combined Odds" } }
                }
            }
            tbody {
                @for team in &snapshot.ranking.teams {
                    (render_row(
                        team,
                        snapshot.changes.iter().any(|c| c.team == team.name),
                        started,
                    ))
                }
            }
        }
        (render_changes(&snapshot.changes))
    }
}
