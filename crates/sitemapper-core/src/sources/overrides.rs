//! Hand-maintained list of extra URLs, one per line.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{Result, SitemapError};
use crate::url_model::BaseOrigin;

/// Reads the override file and normalizes each non-blank line.
///
/// Unlike the existing sitemap, an override file the caller asked for must
/// exist. Lines the normalizer rejects (including `# comments`) are skipped.
pub fn load_overrides(path: &Path, base: &BaseOrigin) -> Result<Vec<String>> {
    let data = fs::read_to_string(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            SitemapError::MissingOverrideFile(path.to_path_buf())
        } else {
            SitemapError::io("read", path, e)
        }
    })?;

    let mut urls = Vec::new();
    for line in data.lines().map(str::trim).filter(|l| !l.is_empty()) {
        match base.normalize(line) {
            Some(url) => urls.push(url),
            None => tracing::debug!("override line skipped: {:?}", line),
        }
    }
    tracing::debug!("{} override URLs from {}", urls.len(), path.display());
    Ok(urls)
}
