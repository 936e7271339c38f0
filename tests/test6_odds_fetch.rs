use async_trait::async_trait;
use std::time::Duration;
use tokio::net::TcpListener;

use rusty_golf_draft::controller::odds_fetch::{
    OddsFetcher, OddsSource, Relay, RelayOddsSource,
};
use rusty_golf_draft::error::CoreError;
use rusty_golf_draft::model::{AppState, OddsOutcome, default_roster};
use rusty_golf_draft::mvu::runtime::{Board, BoardSettings};

const GOOD_PAGE: &str = "Rory McIlroy +700\nTommy Fleetwood +1400\nViktor Hovland +2600\nSam Burns +4400\nJustin Rose +12000";
const THIN_PAGE: &str = "Rory McIlroy +700\nSam Burns +4400";

struct FakeSource {
    label: &'static str,
    page: Result<&'static str, &'static str>,
    delay: Duration,
}

impl FakeSource {
    fn boxed(label: &'static str, page: Result<&'static str, &'static str>) -> Box<dyn OddsSource> {
        Self::slow(label, page, Duration::ZERO)
    }

    fn slow(
        label: &'static str,
        page: Result<&'static str, &'static str>,
        delay: Duration,
    ) -> Box<dyn OddsSource> {
        Box::new(Self { label, page, delay })
    }
}

#[async_trait]
impl OddsSource for FakeSource {
    fn label(&self) -> String {
        self.label.to_string()
    }

    async fn fetch_page(&self) -> Result<String, CoreError> {
        tokio::time::sleep(self.delay).await;
        self.page
            .map(str::to_string)
            .map_err(|e| CoreError::Network(e.to_string()))
    }
}

fn known() -> Vec<&'static str> {
    vec![
        "Rory McIlroy",
        "Tommy Fleetwood",
        "Viktor Hovland",
        "Sam Burns",
        "Justin Rose",
    ]
}

#[tokio::test]
async fn test_first_usable_source_wins() {
    let fetcher = OddsFetcher::new(vec![
        FakeSource::boxed("down", Err("connection refused")),
        FakeSource::boxed("thin", Ok(THIN_PAGE)),
        FakeSource::boxed("good", Ok(GOOD_PAGE)),
    ]);
    let found = fetcher.fetch_odds(&known()).await.expect("third source usable");
    assert_eq!(found.len(), 5);
    assert_eq!(found.get("Justin Rose"), Some(&12000));
}

#[tokio::test(start_paused = true)]
async fn test_source_order_beats_speed() {
    let fetcher = OddsFetcher::new(vec![
        FakeSource::slow("slow", Ok(GOOD_PAGE), Duration::from_secs(5)),
        FakeSource::boxed(
            "fast",
            Ok("Rory McIlroy +900\nTommy Fleetwood +900\nViktor Hovland +900\nSam Burns +900"),
        ),
    ]);
    let found = fetcher.fetch_odds(&known()).await.expect("both usable");
    assert_eq!(found.get("Rory McIlroy"), Some(&700));
}

#[tokio::test]
async fn test_no_usable_source_is_an_error() {
    let fetcher = OddsFetcher::new(vec![
        FakeSource::boxed("down", Err("connection refused")),
        FakeSource::boxed("thin", Ok(THIN_PAGE)),
    ]);
    let err = fetcher.fetch_odds(&known()).await.unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("down: network error: connection refused"), "{msg}");
    assert!(msg.contains("thin: only 2 golfers matched"), "{msg}");

    let empty = OddsFetcher::new(Vec::new());
    assert!(empty.fetch_odds(&known()).await.is_err());
}

#[tokio::test]
async fn test_relay_request_times_out() -> Result<(), Box<dyn std::error::Error>> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    let relay = Relay::parse(&format!("raw:http://{addr}/"))?;
    let source = RelayOddsSource::new(
        relay,
        "odds",
        reqwest::Client::new(),
        Duration::from_millis(300),
    );
    let err = source.fetch_page().await.unwrap_err();
    assert!(err.to_string().contains("timed out"), "{err}");
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_board_refresh_is_single_flight() {
    let fetcher = OddsFetcher::new(vec![FakeSource::slow(
        "slow",
        Ok(GOOD_PAGE),
        Duration::from_secs(3),
    )]);
    let board = Board::new(
        AppState::new(default_roster()),
        Some(fetcher),
        BoardSettings::default(),
    );

    let (a, b) = tokio::join!(board.refresh_odds(), board.refresh_odds());
    assert_eq!(a, OddsOutcome::Updated(5));
    assert_eq!(b, OddsOutcome::RefreshSkipped);
    assert_eq!(
        board.with_state(|s| s.odds.get("Rory McIlroy")).await,
        Some(700)
    );

    // a later refresh runs again and finds nothing new
    assert_eq!(board.refresh_odds().await, OddsOutcome::NoChanges);
}

#[tokio::test]
async fn test_board_without_web_odds_reports_failure() {
    let board = Board::new(AppState::new(default_roster()), None, BoardSettings::default());
    let outcome = board.refresh_odds().await;
    assert!(matches!(outcome, OddsOutcome::FetchFailed(_)));
    assert_eq!(
        board.with_state(|s| s.odds.get("Rory McIlroy")).await,
        Some(850)
    );
}
