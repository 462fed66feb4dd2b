//! IndexNow ping (<https://www.indexnow.org/documentation>).

use serde::Serialize;

use super::IndexNowPinger;
use crate::error::{Result, SitemapError};
use crate::http::{HttpClient, Method};
use crate::url_model::BaseOrigin;

const SERVICE: &str = "IndexNow";

/// JSON body of an IndexNow submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexNowPayload {
    pub host: String,
    pub key: String,
    /// Where the key file is hosted: `<origin>/<key>.txt`.
    pub key_location: String,
    pub url_list: Vec<String>,
}

impl IndexNowPayload {
    pub fn new<I>(base: &BaseOrigin, key: &str, urls: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            host: base.host().to_string(),
            key: key.to_string(),
            key_location: format!("{}/{}.txt", base, key),
            url_list: urls.into_iter().map(Into::into).collect(),
        }
    }
}

/// POSTs payloads to a configured endpoint.
#[derive(Debug, Clone)]
pub struct IndexNowClient {
    endpoint: String,
    http: HttpClient,
}

impl IndexNowClient {
    pub fn new(endpoint: impl Into<String>, http: HttpClient) -> Self {
        Self {
            endpoint: endpoint.into(),
            http,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl IndexNowPinger for IndexNowClient {
    fn ping(&self, payload: &IndexNowPayload) -> Result<()> {
        let body = serde_json::to_vec(payload).map_err(|e| SitemapError::PublishResponse {
            service: SERVICE,
            reason: format!("encode payload: {}", e),
        })?;

        let response = self
            .http
            .send(
                Method::Post,
                &self.endpoint,
                &[("Content-Type", "application/json; charset=utf-8")],
                Some(&body),
            )
            .map_err(|source| SitemapError::Publish {
                service: SERVICE,
                source,
            })?;

        tracing::info!(
            "IndexNow accepted {} URLs for {} (HTTP {})",
            payload.url_list.len(),
            payload.host,
            response.status
        );
        Ok(())
    }
}
