//! Blocking HTTP client used for all page fetches.
//!
//! Requests run one at a time with an explicit timeout, so a stalled server
//! fails the fetch instead of hanging the run.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config;
use crate::error::Result;

/// Thin wrapper around a configured blocking client.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Build a client with the given per-request timeout.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(config::USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self { client })
    }

    /// Fetch a page and return its body. Non-success statuses are errors.
    pub fn get_html(&self, url: &str) -> Result<String> {
        let resp = self.client.get(url).send()?.error_for_status()?;
        Ok(resp.text()?)
    }
}
