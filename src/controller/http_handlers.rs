use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use serde::Deserialize;
use std::collections::HashMap;

use crate::model::ScoreEntry;
use crate::mvu::draft::Msg;
use crate::mvu::runtime::Board;
use crate::view::index::{DEFAULT_INDEX_TITLE, render_index_template};
use crate::view::leaderboard::render_board;

#[derive(Deserialize)]
pub struct PasteForm {
    pub content: String,
}

/// Routes of the draft board. The caller supplies `Data<Board>`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/leaderboard", web::get().to(leaderboard))
        .route("/odds/paste", web::post().to(paste_odds))
        .route("/odds/refresh", web::post().to(refresh_odds))
        .route("/odds/simulate", web::post().to(simulate_odds))
        .route("/tournament/start", web::post().to(start_tournament))
        .route("/tournament/scores", web::post().to(replace_scores))
        .route("/tournament/lock", web::post().to(lock_draft_order))
        .route("/health", web::get().to(HttpResponse::Ok));
}

async fn board_fragment(board: &Board) -> HttpResponse {
    let snapshot = board.snapshot().await;
    HttpResponse::Ok()
        .content_type("text/html")
        .body(render_board(&snapshot).into_string())
}

async fn index(board: Data<Board>) -> impl Responder {
    let snapshot = board.snapshot().await;
    let markup = render_index_template(DEFAULT_INDEX_TITLE, &snapshot);
    HttpResponse::Ok().content_type("text/html").body(markup.into_string())
}

async fn leaderboard(
    query: web::Query<HashMap<String, String>>,
    board: Data<Board>,
) -> HttpResponse {
    let json = query
        .get("json")
        .is_some_and(|v| v == "1" || v.eq_ignore_ascii_case("true"));
    if json {
        HttpResponse::Ok().json(board.snapshot().await)
    } else {
        board_fragment(&board).await
    }
}

async fn paste_odds(form: web::Form<PasteForm>, board: Data<Board>) -> HttpResponse {
    let board = board.into_inner();
    board.dispatch(Msg::OddsPasted(form.into_inner().content)).await;
    board_fragment(&board).await
}

async fn refresh_odds(board: Data<Board>) -> HttpResponse {
    board.refresh_odds().await;
    board_fragment(&board).await
}

async fn simulate_odds(board: Data<Board>) -> HttpResponse {
    let board = board.into_inner();
    board.dispatch(Msg::SimulateOdds).await;
    board_fragment(&board).await
}

/// An empty body starts from sample scores; otherwise a JSON array of
/// `{"golfer", "score", "thru"}` rows.
async fn start_tournament(body: web::Bytes, board: Data<Board>) -> HttpResponse {
    let entries: Vec<ScoreEntry> = if body.iter().all(u8::is_ascii_whitespace) {
        Vec::new()
    } else {
        match serde_json::from_slice(&body) {
            Ok(entries) => entries,
            Err(e) => return HttpResponse::BadRequest().body(format!("invalid scores: {e}")),
        }
    };
    let board = board.into_inner();
    board.dispatch(Msg::StartTournament(entries)).await;
    board_fragment(&board).await
}

async fn replace_scores(entries: web::Json<Vec<ScoreEntry>>, board: Data<Board>) -> HttpResponse {
    let board = board.into_inner();
    board.dispatch(Msg::ScoresReplaced(entries.into_inner())).await;
    HttpResponse::Ok().json(board.ranking().await)
}

async fn lock_draft_order(board: Data<Board>) -> HttpResponse {
    let board = board.into_inner();
    board.dispatch(Msg::LockDraftOrder).await;
    board_fragment(&board).await
}
