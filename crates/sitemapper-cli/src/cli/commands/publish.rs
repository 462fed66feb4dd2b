//! Notify search console and IndexNow once the sitemap is on disk.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use sitemapper_core::config::SitemapConfig;
use sitemapper_core::http::HttpClient;
use sitemapper_core::publish::{
    IndexNowClient, IndexNowPinger, SearchConsoleClient, SitemapSubmitter,
};
use sitemapper_core::run::{self, Publication};
use sitemapper_core::sitemap::UrlSet;
use sitemapper_core::BaseOrigin;

/// Publisher settings resolved from flags and config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishTargets {
    pub site_url: String,
    pub sitemap_url: String,
    /// Set only when submission was requested.
    pub credentials: Option<PathBuf>,
    pub indexnow_key: Option<String>,
    pub indexnow_endpoint: String,
}

impl PublishTargets {
    pub fn is_empty(&self) -> bool {
        self.credentials.is_none() && self.indexnow_key.is_none()
    }
}

pub fn run_publish(
    cfg: &SitemapConfig,
    base: &BaseOrigin,
    urls: &UrlSet,
    targets: &PublishTargets,
) -> Result<()> {
    if targets.is_empty() {
        return Ok(());
    }
    let http = HttpClient::new(
        cfg.user_agent.clone(),
        Duration::from_secs(cfg.publish_timeout_secs),
    );

    let search_console = match &targets.credentials {
        Some(path) => Some(SearchConsoleClient::from_credentials_file(path, http.clone())?),
        None => None,
    };
    let indexnow = targets
        .indexnow_key
        .as_ref()
        .map(|key| {
            let client = IndexNowClient::new(targets.indexnow_endpoint.clone(), http.clone());
            (client, key.clone())
        });

    let publication = Publication {
        site_url: targets.site_url.clone(),
        sitemap_url: targets.sitemap_url.clone(),
        submitter: search_console.as_ref().map(|c| c as &dyn SitemapSubmitter),
        indexnow: indexnow
            .as_ref()
            .map(|(client, key)| (client as &dyn IndexNowPinger, key.clone())),
    };

    let report = run::publish(base, urls, &publication)?;
    if report.submitted {
        println!(
            "Submitted {} to search console for {}",
            publication.sitemap_url, publication.site_url
        );
    }
    if let Some(count) = report.pinged {
        println!("Pinged {} with {} URLs", targets.indexnow_endpoint, count);
    }
    Ok(())
}
