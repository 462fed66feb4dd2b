//! One sitemap run: collect, assemble, write, then optionally publish.

use std::path::PathBuf;

use chrono::{NaiveDate, Utc};

use crate::crawl::{self, CrawlOutcome, PageFetcher};
use crate::error::Result;
use crate::publish::{IndexNowPayload, IndexNowPinger, SitemapSubmitter};
use crate::sitemap::{self, UrlSet};
use crate::sources;
use crate::url_model::BaseOrigin;

/// Inputs for [`generate`].
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub base: BaseOrigin,
    /// Sitemap to write; its previous contents are read back first.
    pub output: PathBuf,
    pub overrides: Option<PathBuf>,
    /// Site-relative seed paths, normally [`sources::SEED_PATHS`].
    pub seed_paths: Vec<&'static str>,
    pub crawl: bool,
    pub max_urls: usize,
    /// `<lastmod>` for every entry.
    pub lastmod: NaiveDate,
}

impl RunOptions {
    pub fn new(base: BaseOrigin, output: impl Into<PathBuf>, lastmod: NaiveDate) -> Self {
        Self {
            base,
            output: output.into(),
            overrides: None,
            seed_paths: sources::SEED_PATHS.to_vec(),
            crawl: false,
            max_urls: crate::config::DEFAULT_MAX_URLS,
            lastmod,
        }
    }
}

/// How many URLs each producer contributed before de-duplication.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SourceCounts {
    pub seeds: usize,
    pub existing: usize,
    pub overrides: usize,
    pub crawled: usize,
}

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub output: PathBuf,
    pub urls: UrlSet,
    pub sources: SourceCounts,
    /// Present when a crawl ran.
    pub crawl: Option<CrawlOutcome>,
}

impl RunSummary {
    pub fn url_count(&self) -> usize {
        self.urls.len()
    }
}

/// Builds the URL set and writes the sitemap.
///
/// The override file is read before anything touches the output, so a
/// missing override file leaves the previous sitemap in place.
pub fn generate<F: PageFetcher>(opts: &RunOptions, fetcher: F) -> Result<RunSummary> {
    let base = &opts.base;
    let mut counts = SourceCounts::default();
    let mut urls = UrlSet::new();

    let overrides = match &opts.overrides {
        Some(path) => sources::load_overrides(path, base)?,
        None => Vec::new(),
    };

    let seeds = sources::seed_urls(base, &opts.seed_paths);
    counts.seeds = seeds.len();
    urls.extend(seeds);

    let existing = sources::load_existing_sitemap(&opts.output, base);
    counts.existing = existing.len();
    urls.extend(existing);

    counts.overrides = overrides.len();
    urls.extend(overrides);

    let crawl = if opts.crawl {
        let outcome = crawl::crawl(base, fetcher, opts.max_urls);
        counts.crawled = outcome.discovered.len();
        urls.extend(outcome.discovered.iter().cloned());
        Some(outcome)
    } else {
        None
    };

    tracing::info!(
        "assembled {} URLs (seeds {}, existing {}, overrides {}, crawled {})",
        urls.len(),
        counts.seeds,
        counts.existing,
        counts.overrides,
        counts.crawled
    );

    let xml = sitemap::render(&urls.entries(base, opts.lastmod))?;
    sitemap::write_sitemap(&opts.output, &xml)?;

    Ok(RunSummary {
        output: opts.output.clone(),
        urls,
        sources: counts,
        crawl,
    })
}

/// Current UTC calendar date, used as `<lastmod>`.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// `<origin>/`, the URL-prefix search-console property for the origin.
pub fn default_site_url(base: &BaseOrigin) -> String {
    format!("{}/", base)
}

/// `<origin>/sitemap.xml`.
pub fn default_sitemap_url(base: &BaseOrigin) -> String {
    format!("{}/sitemap.xml", base)
}

/// Which publishers to call after the sitemap is written.
pub struct Publication<'a> {
    pub site_url: String,
    pub sitemap_url: String,
    pub submitter: Option<&'a dyn SitemapSubmitter>,
    /// Pinger and the IndexNow key to send.
    pub indexnow: Option<(&'a dyn IndexNowPinger, String)>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PublishReport {
    pub submitted: bool,
    /// Number of URLs pinged, if IndexNow ran.
    pub pinged: Option<usize>,
}

/// Runs the requested publishers in order: search console, then IndexNow.
/// The first failure stops the run.
pub fn publish(base: &BaseOrigin, urls: &UrlSet, publication: &Publication<'_>) -> Result<PublishReport> {
    let mut report = PublishReport::default();

    if let Some(submitter) = publication.submitter {
        submitter.submit(&publication.site_url, &publication.sitemap_url)?;
        report.submitted = true;
    }

    if let Some((pinger, key)) = &publication.indexnow {
        let payload = IndexNowPayload::new(base, key, urls.iter());
        pinger.ping(&payload)?;
        report.pinged = Some(payload.url_list.len());
    }

    Ok(report)
}
