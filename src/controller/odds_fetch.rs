use async_trait::async_trait;
use futures::future::join_all;
use reqwest::{Client, Url};
use serde::Deserialize;
use std::fmt;
use std::time::Duration;
use tracing::{info, warn};

use crate::error::CoreError;
use crate::model::OddsUpdate;
use crate::odds_text::match_odds_in_text;

/// A fetched page must name more than this many golfers to be trusted.
pub const MIN_FETCHED_GOLFERS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayKind {
    /// Wraps the page as `{"contents": "..."}` and takes the target as `?url=`.
    Json,
    /// Passes the page through; the target is appended to the relay prefix.
    Raw,
}

/// A cross-origin relay in front of the odds page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relay {
    pub kind: RelayKind,
    pub base: String,
}

impl Relay {
    /// Parse `json:<url>` or `raw:<url>`.
    ///
    /// # Errors
    /// Returns a message suitable for clap when the prefix or URL is invalid.
    pub fn parse(value: &str) -> Result<Self, String> {
        let (kind, base) = match value.trim().split_once(':') {
            Some(("json", rest)) => (RelayKind::Json, rest),
            Some(("raw", rest)) => (RelayKind::Raw, rest),
            _ => {
                return Err(format!(
                    "relay '{value}' must start with 'json:' or 'raw:'"
                ));
            }
        };
        Url::parse(base).map_err(|e| format!("relay '{value}' has an invalid url: {e}"))?;
        Ok(Self {
            kind,
            base: base.to_string(),
        })
    }

    /// # Errors
    /// Returns `CoreError::InvalidInput` when the combined URL does not parse.
    pub fn request_url(&self, target: &str) -> Result<Url, CoreError> {
        let url = match self.kind {
            RelayKind::Json => Url::parse_with_params(&self.base, &[("url", target)]),
            RelayKind::Raw => Url::parse(&format!("{}{target}", self.base)),
        };
        url.map_err(|e| CoreError::InvalidInput(e.to_string()))
    }
}

impl fmt::Display for Relay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            RelayKind::Json => "json",
            RelayKind::Raw => "raw",
        };
        write!(f, "{kind}:{}", self.base)
    }
}

#[async_trait]
pub trait OddsSource: Send + Sync {
    fn label(&self) -> String;
    async fn fetch_page(&self) -> Result<String, CoreError>;
}

#[derive(Deserialize)]
struct JsonRelayBody {
    contents: String,
}

pub struct RelayOddsSource {
    relay: Relay,
    target_url: String,
    client: Client,
    timeout: Duration,
}

impl RelayOddsSource {
    #[must_use]
    pub fn new(relay: Relay, target_url: &str, client: Client, timeout: Duration) -> Self {
        Self {
            relay,
            target_url: target_url.to_string(),
            client,
            timeout,
        }
    }

    async fn fetch_untimed(&self) -> Result<String, CoreError> {
        let url = self.relay.request_url(&self.target_url)?;
        let resp = self.client.get(url).send().await?.error_for_status()?;
        match self.relay.kind {
            RelayKind::Json => Ok(resp.json::<JsonRelayBody>().await?.contents),
            RelayKind::Raw => Ok(resp.text().await?),
        }
    }
}

#[async_trait]
impl OddsSource for RelayOddsSource {
    fn label(&self) -> String {
        self.relay.to_string()
    }

    async fn fetch_page(&self) -> Result<String, CoreError> {
        match tokio::time::timeout(self.timeout, self.fetch_untimed()).await {
            Ok(result) => result,
            Err(_) => Err(CoreError::Network(format!(
                "{} timed out after {}s",
                self.label(),
                self.timeout.as_secs()
            ))),
        }
    }
}

/// Tries every source and keeps the first usable page, in source order.
pub struct OddsFetcher {
    sources: Vec<Box<dyn OddsSource>>,
}

impl OddsFetcher {
    #[must_use]
    pub fn new(sources: Vec<Box<dyn OddsSource>>) -> Self {
        Self { sources }
    }

    #[must_use]
    pub fn from_relays(relays: &[Relay], target_url: &str, timeout: Duration) -> Self {
        let client = Client::new();
        let sources = relays
            .iter()
            .map(|relay| {
                Box::new(RelayOddsSource::new(
                    relay.clone(),
                    target_url,
                    client.clone(),
                    timeout,
                )) as Box<dyn OddsSource>
            })
            .collect();
        Self::new(sources)
    }

    #[must_use]
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Fetch every source concurrently and parse them in order.
    ///
    /// # Errors
    /// Returns `CoreError::Network` when no source produced a page naming more
    /// than [`MIN_FETCHED_GOLFERS`] golfers.
    pub async fn fetch_odds(&self, known_golfers: &[&str]) -> Result<OddsUpdate, CoreError> {
        if self.sources.is_empty() {
            return Err(CoreError::Network("no odds sources configured".into()));
        }

        let pages = join_all(self.sources.iter().map(|s| s.fetch_page())).await;
        let mut failures = Vec::new();

        for (source, page) in self.sources.iter().zip(pages) {
            let label = source.label();
            match page {
                Ok(page) => {
                    let found = match_odds_in_text(&page, known_golfers);
                    if found.len() > MIN_FETCHED_GOLFERS {
                        info!(source = %label, golfers = found.len(), "odds fetched");
                        return Ok(found);
                    }
                    warn!(source = %label, golfers = found.len(), "too few golfers in fetched page");
                    failures.push(format!("{label}: only {} golfers matched", found.len()));
                }
                Err(e) => {
                    warn!(source = %label, error = %e, "odds fetch failed");
                    failures.push(format!("{label}: {e}"));
                }
            }
        }

        Err(CoreError::Network(failures.join("; ")))
    }
}
