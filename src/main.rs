use actix_files::Files;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use rusty_golf_draft::args::{self, OddsSourceKind};
use rusty_golf_draft::controller::http_handlers;
use rusty_golf_draft::controller::odds_fetch::OddsFetcher;
use rusty_golf_draft::model::AppState;
use rusty_golf_draft::mvu::runtime::{Board, BoardSettings};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = match args::args_checks() {
        Ok(args) => args,
        Err(e) => {
            error!(error = %e, "invalid arguments");
            std::process::exit(2);
        }
    };

    let fetcher = (args.odds_source == OddsSourceKind::Web).then(|| {
        OddsFetcher::from_relays(&args.relays, &args.odds_url, args.fetch_timeout)
    });
    let state = AppState::new(args.roster.clone());
    info!(
        teams = state.teams.len(),
        golfers = state.universe.len(),
        priced = state.odds.priced_count(),
        "board seeded with fallback odds"
    );

    let board = Board::new(
        state,
        fetcher,
        BoardSettings {
            odds_refresh_every: args.odds_refresh_every,
            live_update_every: args.live_update_every,
            rng_seed: args.sim_seed,
        },
    );

    if board.web_odds() {
        let outcome = board.refresh_odds().await;
        info!(%outcome, "startup odds fetch");
        board.start_odds_refresh().await;
    }

    info!(bind = %args.bind, "listening");
    let data = Data::from(board);
    HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .configure(http_handlers::configure)
            .service(Files::new("/static", "./static"))
    })
    .bind(args.bind)?
    .run()
    .await?;
    Ok(())
}
