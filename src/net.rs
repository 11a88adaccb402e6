// src/net.rs
// Blocking POST to the scrape endpoint. Called from a worker thread only.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::{
    config::{consts::USER_AGENT, options::EndpointOptions},
    error::ScrapeError,
    model::{ScrapeRecord, ScrapeRequest, ScrapeResponse},
};

/// Anything that can turn a request into records.
/// The GUI worker holds one of these; tests swap in a canned implementation.
pub trait ScrapeClient: Send + Sync {
    fn scrape(&self, req: &ScrapeRequest) -> Result<Vec<ScrapeRecord>, ScrapeError>;
}

pub struct HttpScrapeClient {
    client: Client,
    endpoint: String,
}

impl HttpScrapeClient {
    pub fn new(opts: &EndpointOptions) -> Result<Self, ScrapeError> {
        Self::with_timeout(&opts.url, opts.timeout)
    }

    pub fn with_timeout(endpoint: &str, timeout: Duration) -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self { client, endpoint: endpoint.to_string() })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ScrapeClient for HttpScrapeClient {
    /// 1. POST the JSON body.
    /// 2. Anything outside 2xx is a failure, body unread.
    /// 3. Decode `{ data: [...] }`; missing `data` is an empty result.
    fn scrape(&self, req: &ScrapeRequest) -> Result<Vec<ScrapeRecord>, ScrapeError> {
        let resp = self.client.post(&self.endpoint).json(req).send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ScrapeError::Status(status.as_u16()));
        }

        let body = resp.text()?;
        let parsed: ScrapeResponse = serde_json::from_str(&body)?;
        Ok(parsed.into_records())
    }
}
