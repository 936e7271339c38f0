use clap::{Parser, ValueEnum};
use std::net::SocketAddr;
use std::time::Duration;

use crate::controller::odds_fetch::Relay;
use crate::model::Team;
use crate::model::defaults::{DEFAULT_ODDS_URL, DEFAULT_RELAYS};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OddsSourceKind {
    /// Bundled fallback odds only; web refresh is disabled.
    Static,
    /// Fetch odds through the configured relays at startup and periodically.
    Web,
}

/// A validated roster loaded from `--roster-json`.
#[derive(Clone, Debug)]
pub struct Roster(pub Vec<Team>);

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Address the web server listens on.
    #[arg(short = 'b', long, value_name = "ADDR", default_value = "0.0.0.0:5201")]
    pub bind: SocketAddr,

    #[arg(long, value_name = "SOURCE", value_enum, default_value_t = OddsSourceKind::Static)]
    pub odds_source: OddsSourceKind,

    /// Page to scrape for odds when the source is `web`.
    #[arg(long, value_name = "URL", default_value = DEFAULT_ODDS_URL, value_parser = crate::args::validation::check_http_url)]
    pub odds_url: String,

    /// Relay in front of the odds page, as `json:<url>` or `raw:<url>`. Repeat to try several.
    #[arg(long = "relay", value_name = "RELAY", value_parser = Relay::parse)]
    pub relays: Vec<Relay>,

    #[arg(long, value_name = "SECONDS", default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..=120))]
    pub fetch_timeout_secs: u64,

    #[arg(long, value_name = "SECONDS", default_value_t = 600, value_parser = clap::value_parser!(u64).range(10..))]
    pub odds_refresh_secs: u64,

    #[arg(long, value_name = "SECONDS", default_value_t = 30, value_parser = clap::value_parser!(u64).range(1..))]
    pub live_update_secs: u64,

    /// JSON array of `{"name", "golfer1", "golfer2"}` replacing the built-in roster.
    #[arg(long, value_name = "FILE", value_parser = crate::args::validation::check_readable_file_and_roster)]
    pub roster_json: Option<Roster>,

    /// Seed the live score simulator for repeatable runs.
    #[arg(long, value_name = "SEED")]
    pub sim_seed: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub bind: SocketAddr,
    pub odds_source: OddsSourceKind,
    pub odds_url: String,
    pub relays: Vec<Relay>,
    pub fetch_timeout: Duration,
    pub odds_refresh_every: Duration,
    pub live_update_every: Duration,
    pub roster: Vec<Team>,
    pub sim_seed: Option<u64>,
}

impl CleanArgs {
    /// Fill defaults the parser cannot express, such as the relay list.
    ///
    /// # Errors
    /// Returns an error if a built-in relay does not parse.
    pub fn new(args: Args) -> Result<Self, String> {
        let relays = if args.relays.is_empty() {
            DEFAULT_RELAYS
                .iter()
                .map(|r| Relay::parse(r))
                .collect::<Result<Vec<_>, _>>()?
        } else {
            args.relays
        };
        Ok(Self {
            bind: args.bind,
            odds_source: args.odds_source,
            odds_url: args.odds_url,
            relays,
            fetch_timeout: Duration::from_secs(args.fetch_timeout_secs),
            odds_refresh_every: Duration::from_secs(args.odds_refresh_secs),
            live_update_every: Duration::from_secs(args.live_update_secs),
            roster: args
                .roster_json
                .map_or_else(crate::model::default_roster, |r| r.0),
            sim_seed: args.sim_seed,
        })
    }
}
