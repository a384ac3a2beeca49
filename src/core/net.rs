// src/core/net.rs

use std::time::Duration;

use crate::config::consts::{HOST, HTTP_TIMEOUT_SECS, PREFIX, USER_AGENT};
use crate::error::ScrapeError;

/// Fetch seam. The pipeline only ever sees page text, so tests can feed
/// canned markup and never touch the network.
pub trait Fetch {
    /// GET `path` (relative to the chart prefix) and return the body as
    /// UTF-8 text.
    fn fetch(&self, path: &str) -> Result<String, ScrapeError>;
}

pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<HttpFetcher, ScrapeError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()?;
        Ok(HttpFetcher { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, path: &str) -> Result<String, ScrapeError> {
        let url = format!("https://{HOST}{PREFIX}{path}");

        let resp = self.client.get(&url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ScrapeError::UpstreamHttp {
                status: status.as_u16(),
                url,
            });
        }
        // reqwest decodes the body to UTF-8 from the response charset
        Ok(resp.text()?)
    }
}
