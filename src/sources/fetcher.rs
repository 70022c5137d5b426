// fetcher.rs
use crate::sources::SourceError;
use reqwest::blocking::Client;
use std::time::{Duration, Instant};

const USER_AGENT: &str = concat!("lodge-schedule/", env!("CARGO_PKG_VERSION"));

/// Anything that can turn a source URL into its raw document body.
pub trait Fetch: Send + Sync {
    fn fetch(&self, url: &str) -> Result<String, SourceError>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self, SourceError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| SourceError::Unavailable(e.to_string()))?;

        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, SourceError> {
        let start = Instant::now();

        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| SourceError::Unavailable(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(SourceError::Unavailable(format!("HTTP {status}")));
        }

        let text = resp
            .text()
            .map_err(|e| SourceError::Unavailable(e.to_string()))?;

        log::debug!(
            "Fetched {} bytes from {url} in {:?}",
            text.len(),
            start.elapsed()
        );

        Ok(text)
    }
}
