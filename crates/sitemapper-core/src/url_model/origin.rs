//! The configured base origin (scheme + host + port).

use std::fmt;

use url::Url;

use super::is_web_scheme;
use crate::error::{Result, SitemapError};

/// Scheme and host every generated URL is bound to.
///
/// Built once per run from the configured base URL. Any path, query or
/// credentials on the configured value are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseOrigin {
    /// Root URL of the origin (`https://example.com/`), used for joins.
    pub(super) root: Url,
    /// Serialized origin without trailing slash (`https://example.com`).
    pub(super) origin: String,
}

impl BaseOrigin {
    /// Parses the configured base URL. Fails unless it is an absolute
    /// http(s) URL with a host.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        let invalid = |reason: &'static str| SitemapError::InvalidBaseUrl {
            input: input.to_string(),
            reason,
        };

        let url = Url::parse(input).map_err(|_| invalid("not an absolute URL"))?;
        if !is_web_scheme(url.scheme()) {
            return Err(invalid("scheme must be http or https"));
        }
        if url.host_str().map_or(true, str::is_empty) {
            return Err(invalid("missing host"));
        }

        let origin = url.origin().ascii_serialization();
        let root = Url::parse(&origin).map_err(|_| invalid("origin is not a valid URL"))?;
        Ok(Self { root, origin })
    }

    /// `scheme://host[:port]` with no trailing slash.
    pub fn as_str(&self) -> &str {
        &self.origin
    }

    /// Host name (no port), as sent in the IndexNow `host` field.
    pub fn host(&self) -> &str {
        self.root.host_str().unwrap_or_default()
    }

    /// True when `url` (already normalized) lives under this origin.
    ///
    /// A bare prefix test would accept `https://example.com.evil`, so the
    /// character after the origin must end the authority.
    pub fn contains(&self, url: &str) -> bool {
        match url.strip_prefix(self.origin.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with('/') || rest.starts_with('?'),
            None => false,
        }
    }
}

impl fmt::Display for BaseOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_strips_path_and_trailing_slash() {
        let base = BaseOrigin::parse("https://example.com/some/page?x=1").unwrap();
        assert_eq!(base.as_str(), "https://example.com");
        assert_eq!(base.host(), "example.com");
    }

    #[test]
    fn parse_keeps_non_default_port() {
        let base = BaseOrigin::parse("http://127.0.0.1:8080/").unwrap();
        assert_eq!(base.as_str(), "http://127.0.0.1:8080");
        assert_eq!(base.host(), "127.0.0.1");
    }

    #[test]
    fn parse_rejects_relative_and_hostless() {
        assert!(matches!(
            BaseOrigin::parse("/just/a/path"),
            Err(SitemapError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            BaseOrigin::parse("example.com"),
            Err(SitemapError::InvalidBaseUrl { .. })
        ));
        assert!(BaseOrigin::parse("").is_err());
    }

    #[test]
    fn parse_rejects_non_web_scheme() {
        let err = BaseOrigin::parse("ftp://files.example.com").unwrap_err();
        assert!(err.to_string().contains("http or https"));
        assert!(BaseOrigin::parse("mailto:ops@example.com").is_err());
    }

    #[test]
    fn contains_requires_authority_boundary() {
        let base = BaseOrigin::parse("https://example.com").unwrap();
        assert!(base.contains("https://example.com"));
        assert!(base.contains("https://example.com/tours"));
        assert!(base.contains("https://example.com?lang=si"));
        assert!(!base.contains("https://example.com.evil/tours"));
        assert!(!base.contains("http://example.com/tours"));
    }
}
