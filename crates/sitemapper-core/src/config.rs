use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, SitemapError};

pub const DEFAULT_BASE_URL: &str = "https://www.rechargetravels.com";
pub const DEFAULT_OUTPUT: &str = "public/sitemap.xml";
pub const DEFAULT_MAX_URLS: usize = 150;
pub const DEFAULT_INDEXNOW_ENDPOINT: &str = "https://api.indexnow.org/indexnow";

/// Settings loaded from `~/.config/sitemapper/config.toml`.
///
/// Every key is optional; command-line flags override whatever is set here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SitemapConfig {
    /// Origin all sitemap URLs are bound to.
    pub base_url: String,
    /// Where the sitemap XML is written.
    pub output: PathBuf,
    /// Crawl budget: stop once this many pages were discovered.
    pub max_urls: usize,
    /// Per-page timeout while crawling.
    pub fetch_timeout_secs: u64,
    /// Per-request timeout for the search-console and IndexNow calls.
    pub publish_timeout_secs: u64,
    /// User agent sent on every request.
    pub user_agent: String,
    pub indexnow_endpoint: String,
    /// Service-account JSON used for search-console submission.
    pub credentials: Option<PathBuf>,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            max_urls: DEFAULT_MAX_URLS,
            fetch_timeout_secs: 10,
            publish_timeout_secs: 30,
            user_agent: concat!("sitemapper/", env!("CARGO_PKG_VERSION")).to_string(),
            indexnow_endpoint: DEFAULT_INDEXNOW_ENDPOINT.to_string(),
            credentials: None,
        }
    }
}

/// Config file under the XDG config home, if one exists.
pub fn config_path() -> Option<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("sitemapper").ok()?;
    xdg_dirs.find_config_file("config.toml")
}

/// Loads configuration.
///
/// An explicit path must exist. Without one, the XDG config file is used when
/// present and built-in defaults otherwise.
pub fn load(explicit: Option<&Path>) -> Result<SitemapConfig> {
    let path = match explicit {
        Some(p) => {
            if !p.exists() {
                return Err(SitemapError::Config {
                    path: p.to_path_buf(),
                    reason: "file not found".to_string(),
                });
            }
            p.to_path_buf()
        }
        None => match config_path() {
            Some(p) => p,
            None => {
                tracing::debug!("no config file, using defaults");
                return Ok(SitemapConfig::default());
            }
        },
    };

    let data = fs::read_to_string(&path).map_err(|e| SitemapError::io("read", &path, e))?;
    let cfg: SitemapConfig = toml::from_str(&data).map_err(|e| SitemapError::Config {
        path: path.clone(),
        reason: e.message().to_string(),
    })?;
    tracing::info!("loaded config from {}", path.display());
    Ok(cfg)
}
