//! Publishers: tell indexing services the sitemap changed.
//!
//! The run pipeline only sees the two capability traits, so it can be
//! exercised with in-memory fakes. Every failure here is fatal for the run.

mod indexnow;
mod search_console;

use crate::error::Result;

pub use indexnow::{IndexNowClient, IndexNowPayload};
pub use search_console::{SearchConsoleClient, ServiceAccountKey, WEBMASTERS_SCOPE};

/// Submits a sitemap feed URL for a search-console property.
pub trait SitemapSubmitter {
    fn submit(&self, site_url: &str, feed_url: &str) -> Result<()>;
}

/// Pushes changed URLs to an IndexNow endpoint.
pub trait IndexNowPinger {
    fn ping(&self, payload: &IndexNowPayload) -> Result<()>;
}
