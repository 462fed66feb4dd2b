//! Error taxonomy for a sitemap run.
//!
//! Recoverable failures (a malformed existing sitemap, a single crawl page)
//! never surface here; they are logged where they happen. Everything in
//! [`SitemapError`] aborts the run.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::http::HttpError;

pub type Result<T> = std::result::Result<T, SitemapError>;

#[derive(Debug, Error)]
pub enum SitemapError {
    /// The base URL is not an absolute http(s) URL with a host.
    #[error("invalid base URL `{input}`: {reason}")]
    InvalidBaseUrl { input: String, reason: &'static str },

    /// Config file could not be read or parsed.
    #[error("invalid config {}: {reason}", path.display())]
    Config { path: PathBuf, reason: String },

    /// An override file was requested but is not on disk.
    #[error("override file {} does not exist", .0.display())]
    MissingOverrideFile(PathBuf),

    #[error("failed to {action} {}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// quick-xml refused to serialize the document.
    #[error("failed to render sitemap XML: {0}")]
    Render(String),

    /// Service-account credential file is unusable.
    #[error("invalid credentials {}: {reason}", path.display())]
    Credentials { path: PathBuf, reason: String },

    /// A publisher call failed at the transport or status level.
    #[error("{service} request failed")]
    Publish {
        service: &'static str,
        #[source]
        source: HttpError,
    },

    /// A publisher answered 2xx but the payload was not what we expected.
    #[error("{service}: {reason}")]
    PublishResponse {
        service: &'static str,
        reason: String,
    },
}

impl SitemapError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        SitemapError::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_override_message_names_path() {
        let err = SitemapError::MissingOverrideFile(PathBuf::from("/tmp/extra-urls.txt"));
        assert_eq!(
            err.to_string(),
            "override file /tmp/extra-urls.txt does not exist"
        );
    }

    #[test]
    fn io_error_keeps_source() {
        let err = SitemapError::io(
            "write",
            "public/sitemap.xml",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "failed to write public/sitemap.xml");
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "denied");
    }
}
