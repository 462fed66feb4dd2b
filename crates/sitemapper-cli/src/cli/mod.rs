//! CLI for the sitemapper sitemap generator.

mod commands;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use sitemapper_core::config::{self, SitemapConfig};
use sitemapper_core::run::{self, RunOptions};
use sitemapper_core::BaseOrigin;

use commands::{run_generate, run_publish, PublishTargets};

/// Builds `sitemap.xml` for the site and optionally notifies indexing services.
#[derive(Debug, Parser)]
#[command(name = "sitemapper")]
#[command(
    about = "Generate the site's sitemap.xml and notify search engines",
    long_about = None
)]
pub struct Cli {
    /// Site origin every sitemap URL is bound to (config `base_url`).
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Search-console property to submit under [default: <origin>/].
    #[arg(long, value_name = "URL")]
    pub site_url: Option<String>,

    /// Public URL of the sitemap [default: <origin>/sitemap.xml].
    #[arg(long, value_name = "URL")]
    pub sitemap_url: Option<String>,

    /// Sitemap file to write (config `output`, default public/sitemap.xml).
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Extra URLs or paths, one per line. The file must exist.
    #[arg(long, value_name = "PATH")]
    pub overrides: Option<PathBuf>,

    /// Crawl the live site for additional pages.
    #[arg(long)]
    pub crawl: bool,

    /// Stop crawling after N discovered pages (config `max_urls`, default 150).
    #[arg(long, value_name = "N")]
    pub max_urls: Option<usize>,

    /// Service-account JSON for search-console submission (config `credentials`).
    #[arg(long, value_name = "PATH")]
    pub credentials: Option<PathBuf>,

    /// Submit the sitemap URL to search console after writing.
    #[arg(long)]
    pub submit: bool,

    /// Ping IndexNow with every sitemap URL using this key.
    #[arg(long, value_name = "KEY")]
    pub indexnow_key: Option<String>,

    /// IndexNow endpoint (config `indexnow_endpoint`).
    #[arg(long, value_name = "URL")]
    pub indexnow_endpoint: Option<String>,

    /// Config file to use instead of ~/.config/sitemapper/config.toml.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Base origin from the flag, else the config.
    pub fn base_origin(&self, cfg: &SitemapConfig) -> Result<BaseOrigin> {
        let raw = self.base_url.as_deref().unwrap_or(&cfg.base_url);
        Ok(BaseOrigin::parse(raw)?)
    }

    /// Generation settings with flags layered over the config.
    pub fn run_options(&self, cfg: &SitemapConfig, base: BaseOrigin) -> RunOptions {
        let output = self.output.clone().unwrap_or_else(|| cfg.output.clone());
        let mut opts = RunOptions::new(base, output, run::today());
        opts.overrides = self.overrides.clone();
        opts.crawl = self.crawl;
        opts.max_urls = self.max_urls.unwrap_or(cfg.max_urls);
        opts
    }

    /// Which publishers to run. Fails if `--submit` has no credential file.
    pub fn publish_targets(&self, cfg: &SitemapConfig, base: &BaseOrigin) -> Result<PublishTargets> {
        let credentials = if self.submit {
            let path = self
                .credentials
                .clone()
                .or_else(|| cfg.credentials.clone())
                .context("--submit needs --credentials or `credentials` in the config file")?;
            Some(path)
        } else {
            None
        };

        Ok(PublishTargets {
            site_url: self
                .site_url
                .clone()
                .unwrap_or_else(|| run::default_site_url(base)),
            sitemap_url: self
                .sitemap_url
                .clone()
                .unwrap_or_else(|| run::default_sitemap_url(base)),
            credentials,
            indexnow_key: self.indexnow_key.clone(),
            indexnow_endpoint: self
                .indexnow_endpoint
                .clone()
                .unwrap_or_else(|| cfg.indexnow_endpoint.clone()),
        })
    }
}

pub fn run_from_args() -> Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(cli.config.as_deref())?;
    tracing::debug!("loaded config: {:?}", cfg);

    let base = cli.base_origin(&cfg)?;
    // Validate publisher flags before writing anything.
    let targets = cli.publish_targets(&cfg, &base)?;
    let opts = cli.run_options(&cfg, base);

    let summary = run_generate(&cfg, &opts)?;
    run_publish(&cfg, &opts.base, &summary.urls, &targets)?;
    Ok(())
}

#[cfg(test)]
mod tests;
