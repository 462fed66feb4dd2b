//! Search-console sitemap submission with a service-account key.
//!
//! Two calls: exchange a signed RS256 JWT for an access token at the key's
//! `token_uri`, then `PUT /webmasters/v3/sites/{site}/sitemaps/{feed}`.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};

use super::SitemapSubmitter;
use crate::error::{Result, SitemapError};
use crate::http::{HttpClient, Method};

const SERVICE: &str = "search console";

pub const WEBMASTERS_SCOPE: &str = "https://www.googleapis.com/auth/webmasters";
const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";
const DEFAULT_API_BASE: &str = "https://www.googleapis.com";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// The fields of a service-account JSON key we need.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceAccountKey {
    pub client_email: String,
    pub private_key: String,
    #[serde(default)]
    pub token_uri: Option<String>,
}

impl ServiceAccountKey {
    pub fn from_file(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path).map_err(|e| SitemapError::io("read", path, e))?;
        serde_json::from_str(&data).map_err(|e| SitemapError::Credentials {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    pub fn token_uri(&self) -> &str {
        self.token_uri.as_deref().unwrap_or(DEFAULT_TOKEN_URI)
    }
}

#[derive(Debug, Serialize)]
struct Claims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Search-console client bound to one service account.
#[derive(Debug, Clone)]
pub struct SearchConsoleClient {
    key: ServiceAccountKey,
    key_path: PathBuf,
    http: HttpClient,
    api_base: String,
}

impl SearchConsoleClient {
    pub fn from_credentials_file(path: &Path, http: HttpClient) -> Result<Self> {
        let key = ServiceAccountKey::from_file(path)?;
        Ok(Self {
            key,
            key_path: path.to_path_buf(),
            http,
            api_base: DEFAULT_API_BASE.to_string(),
        })
    }

    /// Points the sitemap call at another API host (tests, proxies).
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    /// Endpoint for submitting `feed_url` under `site_url`.
    pub fn submit_url(&self, site_url: &str, feed_url: &str) -> String {
        format!(
            "{}/webmasters/v3/sites/{}/sitemaps/{}",
            self.api_base,
            encode_segment(site_url),
            encode_segment(feed_url)
        )
    }

    /// Signs the one-hour JWT assertion for the token exchange.
    fn assertion(&self, now: DateTime<Utc>) -> Result<String> {
        let claims = Claims {
            iss: &self.key.client_email,
            scope: WEBMASTERS_SCOPE,
            aud: self.key.token_uri(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(1)).timestamp(),
        };
        let key = EncodingKey::from_rsa_pem(self.key.private_key.as_bytes()).map_err(|e| {
            SitemapError::Credentials {
                path: self.key_path.clone(),
                reason: format!("private_key: {}", e),
            }
        })?;
        encode(&Header::new(Algorithm::RS256), &claims, &key).map_err(|e| {
            SitemapError::Credentials {
                path: self.key_path.clone(),
                reason: format!("sign assertion: {}", e),
            }
        })
    }

    fn access_token(&self) -> Result<String> {
        let assertion = self.assertion(Utc::now())?;
        let form = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("grant_type", JWT_BEARER_GRANT)
            .append_pair("assertion", &assertion)
            .finish();

        let response = self
            .http
            .send(
                Method::Post,
                self.key.token_uri(),
                &[("Content-Type", "application/x-www-form-urlencoded")],
                Some(form.as_bytes()),
            )
            .map_err(|source| SitemapError::Publish {
                service: SERVICE,
                source,
            })?;

        let token: TokenResponse =
            serde_json::from_slice(&response.body).map_err(|e| SitemapError::PublishResponse {
                service: SERVICE,
                reason: format!("token response: {}", e),
            })?;
        tracing::debug!("obtained access token for {}", self.key.client_email);
        Ok(token.access_token)
    }
}

impl SitemapSubmitter for SearchConsoleClient {
    fn submit(&self, site_url: &str, feed_url: &str) -> Result<()> {
        let token = self.access_token()?;
        let authorization = format!("Bearer {}", token);
        let url = self.submit_url(site_url, feed_url);

        self.http
            .send(Method::Put, &url, &[("Authorization", authorization.as_str())], None)
            .map_err(|source| SitemapError::Publish {
                service: SERVICE,
                source,
            })?;

        tracing::info!("submitted {} for {}", feed_url, site_url);
        Ok(())
    }
}

/// Percent-encodes a full URL for use as one path segment. Everything but
/// unreserved characters is escaped; a space becomes `%20`, never `+`.
fn encode_segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::time::Duration as StdDuration;

    fn write_key(json: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(json.as_bytes()).unwrap();
        f.flush().unwrap();
        f
    }

    fn http() -> HttpClient {
        HttpClient::new("sitemapper-test", StdDuration::from_secs(5))
    }

    #[test]
    fn key_defaults_token_uri() {
        let f = write_key(r#"{"client_email":"bot@proj.iam.gserviceaccount.com","private_key":"x"}"#);
        let key = ServiceAccountKey::from_file(f.path()).unwrap();
        assert_eq!(key.client_email, "bot@proj.iam.gserviceaccount.com");
        assert_eq!(key.token_uri(), "https://oauth2.googleapis.com/token");
    }

    #[test]
    fn key_missing_fields_is_credentials_error() {
        let f = write_key(r#"{"type":"service_account"}"#);
        assert!(matches!(
            ServiceAccountKey::from_file(f.path()),
            Err(SitemapError::Credentials { .. })
        ));
    }

    #[test]
    fn key_file_absent_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            ServiceAccountKey::from_file(&dir.path().join("sa.json")),
            Err(SitemapError::Io { .. })
        ));
    }

    #[test]
    fn submit_url_encodes_both_segments() {
        let f = write_key(r#"{"client_email":"a@b","private_key":"x"}"#);
        let client = SearchConsoleClient::from_credentials_file(f.path(), http()).unwrap();
        assert_eq!(
            client.submit_url("https://example.com/", "https://example.com/sitemap.xml"),
            "https://www.googleapis.com/webmasters/v3/sites/https%3A%2F%2Fexample.com%2F/sitemaps/https%3A%2F%2Fexample.com%2Fsitemap.xml"
        );
        let client = client.with_api_base("http://127.0.0.1:9/");
        assert!(client
            .submit_url("sc-domain:example.com", "https://example.com/sitemap.xml")
            .starts_with("http://127.0.0.1:9/webmasters/v3/sites/sc-domain%3Aexample.com/"));
    }

    #[test]
    fn segments_use_path_encoding() {
        assert_eq!(encode_segment("a b+c"), "a%20b%2Bc");
        let f = write_key(r#"{"client_email":"a@b","private_key":"x"}"#);
        let client = SearchConsoleClient::from_credentials_file(f.path(), http()).unwrap();
        assert!(client
            .submit_url("https://example.com/", "https://example.com/site map+1.xml")
            .ends_with("/sitemaps/https%3A%2F%2Fexample.com%2Fsite%20map%2B1.xml"));
    }

    #[test]
    fn bad_private_key_fails_before_any_request() {
        let f = write_key(r#"{"client_email":"a@b","private_key":"not a pem","token_uri":"http://127.0.0.1:9/token"}"#);
        let client = SearchConsoleClient::from_credentials_file(f.path(), http()).unwrap();
        let err = client
            .submit("https://example.com/", "https://example.com/sitemap.xml")
            .unwrap_err();
        assert!(matches!(err, SitemapError::Credentials { .. }));
    }
}
