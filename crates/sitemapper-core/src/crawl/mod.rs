//! Breadth-first crawl of the live site.
//!
//! A FIFO frontier plus a visited set; one blocking fetch at a time. Failed
//! pages are logged and dropped, never retried. The traversal stops when the
//! frontier runs dry or `max_urls` pages have been discovered.

mod fetcher;
mod links;

use std::collections::{HashSet, VecDeque};

use crate::http::HttpError;
use crate::url_model::BaseOrigin;

pub use fetcher::CurlFetcher;
pub use links::extract_links;

/// A fetched page.
#[derive(Debug, Clone)]
pub struct Page {
    pub body: String,
    /// False for PDFs, images and the like; their links are not followed.
    pub is_html: bool,
}

impl Page {
    pub fn html(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            is_html: true,
        }
    }
}

/// Source of page bodies for the crawler.
pub trait PageFetcher {
    fn fetch(&self, url: &str) -> Result<Page, HttpError>;
}

impl<F: PageFetcher + ?Sized> PageFetcher for &F {
    fn fetch(&self, url: &str) -> Result<Page, HttpError> {
        (**self).fetch(url)
    }
}

/// What a crawl produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlOutcome {
    /// Successfully fetched URLs, normalized, in breadth-first order.
    pub discovered: Vec<String>,
    /// Pages a fetch was attempted for.
    pub visited: usize,
    /// Fetches that failed and were skipped.
    pub failed: usize,
}

/// Crawls same-origin links starting at the base origin.
pub fn crawl<F: PageFetcher>(base: &BaseOrigin, fetcher: F, max_urls: usize) -> CrawlOutcome {
    let mut outcome = CrawlOutcome::default();
    let mut frontier: VecDeque<String> = VecDeque::new();
    let mut queued: HashSet<String> = HashSet::new();
    let mut visited: HashSet<String> = HashSet::new();
    let mut found: HashSet<String> = HashSet::new();

    frontier.push_back(base.as_str().to_string());
    queued.insert(base.as_str().to_string());

    while outcome.discovered.len() < max_urls {
        let Some(url) = frontier.pop_front() else {
            break;
        };
        if !visited.insert(url.clone()) {
            continue;
        }
        outcome.visited += 1;

        let page = match fetcher.fetch(&url) {
            Ok(page) => page,
            Err(e) => {
                tracing::warn!("crawl: skipping {}: {}", url, e);
                outcome.failed += 1;
                continue;
            }
        };

        if let Some(normalized) = base.normalize(&url) {
            if found.insert(normalized.clone()) {
                outcome.discovered.push(normalized);
            }
        }
        if !page.is_html {
            tracing::debug!("crawl: {} is not HTML, links not followed", url);
            continue;
        }

        for href in extract_links(&page.body) {
            if outcome.discovered.len() >= max_urls {
                break;
            }
            let href = href.split('#').next().unwrap_or_default();
            let Some(next) = base.normalize(href) else {
                continue;
            };
            if !base.contains(&next) || visited.contains(&next) || queued.contains(&next) {
                continue;
            }
            queued.insert(next.clone());
            frontier.push_back(next);
        }
    }

    tracing::info!(
        "crawl finished: {} discovered, {} visited, {} failed, {} left in frontier",
        outcome.discovered.len(),
        outcome.visited,
        outcome.failed,
        frontier.len()
    );
    outcome
}
