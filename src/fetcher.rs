use log::debug;
use reqwest::blocking::Client;
use std::time::Duration;

use crate::error::ImportError;

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Source of raw page HTML.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<String, ImportError>;
}

/// Blocking HTTP fetcher.
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new(timeout: Option<Duration>, user_agent: &str) -> Result<Self, ImportError> {
        let timeout = timeout.unwrap_or(Duration::from_secs(30));
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }
}

impl Fetch for PageFetcher {
    /// Non-success statuses are reported as transport errors.
    fn fetch(&self, url: &str) -> Result<String, ImportError> {
        let response = self.client.get(url).send()?.error_for_status()?;
        debug!("Fetched {} ({})", url, response.status());
        let html = response.text()?;
        Ok(html)
    }
}
