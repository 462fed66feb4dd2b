//! Sitemap assembly: merge producer output, score, serialize, write.

mod priority;
mod writer;

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::url_model::BaseOrigin;

pub use priority::{Priority, SECTION_MARKERS};
pub use writer::{render, temp_path, write_sitemap, SITEMAP_NS};

/// De-duplicated set of normalized URLs.
///
/// Iteration is lexicographic, which is the order entries are written in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlSet {
    urls: BTreeSet<String>,
}

impl UrlSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one URL; returns false if it was already present.
    pub fn insert(&mut self, url: impl Into<String>) -> bool {
        self.urls.insert(url.into())
    }

    /// Adds every URL, returning how many were new.
    pub fn extend<I>(&mut self, urls: I) -> usize
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut added = 0;
        for url in urls {
            if self.insert(url) {
                added += 1;
            }
        }
        added
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn contains(&self, url: &str) -> bool {
        self.urls.contains(url)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.urls.iter().map(String::as_str)
    }

    /// Builds the sitemap entries for a run dated `lastmod`.
    pub fn entries<'a>(&'a self, base: &'a BaseOrigin, lastmod: NaiveDate) -> Vec<SitemapEntry<'a>> {
        self.iter()
            .map(|loc| SitemapEntry {
                loc,
                lastmod,
                priority: Priority::for_url(loc, base),
            })
            .collect()
    }
}

/// One `<url>` element. `changefreq` is always `daily`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SitemapEntry<'a> {
    pub loc: &'a str,
    pub lastmod: NaiveDate,
    pub priority: Priority,
}

impl SitemapEntry<'_> {
    pub const CHANGEFREQ: &'static str = "daily";
}
