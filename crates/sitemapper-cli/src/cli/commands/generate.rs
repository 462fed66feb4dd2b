//! Assemble and write the sitemap.

use std::time::Duration;

use anyhow::{Context, Result};
use sitemapper_core::config::SitemapConfig;
use sitemapper_core::crawl::CurlFetcher;
use sitemapper_core::run::{self, RunOptions, RunSummary};

pub fn run_generate(cfg: &SitemapConfig, opts: &RunOptions) -> Result<RunSummary> {
    let fetcher = CurlFetcher::new(
        &cfg.user_agent,
        Duration::from_secs(cfg.fetch_timeout_secs),
    );
    if opts.crawl {
        println!("Crawling {} (up to {} pages)...", opts.base, opts.max_urls);
    }

    let summary = run::generate(opts, fetcher)
        .with_context(|| format!("generate sitemap for {}", opts.base))?;

    if let Some(crawl) = &summary.crawl {
        println!(
            "Crawled {} pages: {} found, {} failed",
            crawl.visited,
            crawl.discovered.len(),
            crawl.failed
        );
    }
    println!(
        "Wrote {} URLs to {}",
        summary.url_count(),
        summary.output.display()
    );
    tracing::info!(
        "sources: seeds {}, existing {}, overrides {}, crawled {}",
        summary.sources.seeds,
        summary.sources.existing,
        summary.sources.overrides,
        summary.sources.crawled
    );
    Ok(summary)
}
