//! libcurl-backed page fetcher.

use std::time::Duration;

use super::{Page, PageFetcher};
use crate::http::{HttpClient, HttpError};

/// Fetches pages with a blocking GET, following redirects.
#[derive(Debug, Clone)]
pub struct CurlFetcher {
    client: HttpClient,
}

impl CurlFetcher {
    pub fn new(user_agent: &str, timeout: Duration) -> Self {
        Self {
            client: HttpClient::new(user_agent, timeout),
        }
    }
}

impl PageFetcher for CurlFetcher {
    fn fetch(&self, url: &str) -> Result<Page, HttpError> {
        let response = self.client.get(url)?;
        let is_html = response.head.is_html();
        tracing::debug!(
            "fetched {} ({} bytes, {})",
            url,
            response.body.len(),
            response.head.content_type.as_deref().unwrap_or("no content type")
        );
        Ok(Page {
            body: if is_html { response.text() } else { String::new() },
            is_html,
        })
    }
}
