use maud::{Markup, html};

use crate::HTMX_PATH;
use crate::model::TournamentPhase;
use crate::mvu::runtime::BoardSnapshot;
use crate::view::leaderboard::render_board;

pub const DEFAULT_INDEX_TITLE: &str = "Draft Leaderboard";

fn render_controls(snapshot: &BoardSnapshot) -> Markup {
    let pre = snapshot.phase == TournamentPhase::PreTournament;
    html! {
        div class="controls" {
            form hx-post="odds/paste" hx-target="#board" hx-swap="innerHTML" {
                label for="odds-content" { "Paste odds page text or HTML" }
                textarea id="odds-content" name="content" rows="6" {}
                button type="submit" { "Update Odds" }
            }
            div class="buttons" {
                @if snapshot.web_odds && pre {
                    button hx-post="odds/refresh" hx-target="#board" { "Refresh Web Odds" }
                }
                button hx-post="odds/simulate" hx-target="#board" { "Simulate Odds Movement" }
                @if pre {
                    button hx-post="tournament/start" hx-target="#board" { "Start Tournament" }
                }
                @if snapshot.phase == TournamentPhase::Live {
                    button hx-post="tournament/lock" hx-target="#board" { "Lock Draft Order" }
                }
            }
        }
    }
}

#[must_use]
pub fn render_index_template(title: &str, snapshot: &BoardSnapshot) -> Markup {
    html! {
        (maud::DOCTYPE)
        head {
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            link rel="stylesheet" href="static/styles.css";
            title { (title) }
            script src=(HTMX_PATH) defer integrity="sha384-/TgkGk7p307TH7EXJDuUlgG3Ce1UVolAOFopFekQkkXihi5u/6OCvVKyz1W+idaz" crossorigin="anonymous" {}
        }
        body {
            h1 { (title) }
            (render_controls(snapshot))
            div id="board" hx-get="leaderboard" hx-trigger="every 5s" hx-swap="innerHTML" {
                (render_board(snapshot))
            }
        }
    }
}
