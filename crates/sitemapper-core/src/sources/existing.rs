//! Read back the previously published sitemap.
//!
//! The old file is an optional input: missing, unreadable or malformed files
//! all yield no URLs and the run carries on.

use anyhow::{bail, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::fs;
use std::io;
use std::path::Path;

use crate::url_model::BaseOrigin;

/// Loads `<url><loc>` values from a sitemap on disk, re-normalized against
/// `base` so a sitemap written for another domain migrates cleanly.
pub fn load_existing_sitemap(path: &Path, base: &BaseOrigin) -> Vec<String> {
    let data = match fs::read_to_string(path) {
        Ok(d) => d,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!("no existing sitemap at {}", path.display());
            return Vec::new();
        }
        Err(e) => {
            tracing::warn!("cannot read existing sitemap {}: {}", path.display(), e);
            return Vec::new();
        }
    };

    match parse_sitemap_locs(&data) {
        Ok(locs) => {
            let urls: Vec<String> = locs.iter().filter_map(|l| base.normalize(l)).collect();
            tracing::debug!(
                "existing sitemap {}: {} loc entries, {} kept",
                path.display(),
                locs.len(),
                urls.len()
            );
            urls
        }
        Err(e) => {
            tracing::warn!(
                "ignoring malformed sitemap {}: {:#}",
                path.display(),
                e
            );
            Vec::new()
        }
    }
}

/// Extracts the raw text of every `<loc>` inside a `<url>` element.
///
/// Namespace prefixes are ignored (`<sm:loc>` counts) and CDATA is accepted.
/// Any XML error fails the whole document, including a document that ends
/// with elements still open or has content after the root element.
pub fn parse_sitemap_locs(xml: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut locs = Vec::new();
    let mut in_url = false;
    let mut in_loc = false;
    let mut current = String::new();
    let mut depth: usize = 0;
    let mut root_closed = false;

    loop {
        let event = reader.read_event()?;
        let is_content = match &event {
            Event::Start(_) | Event::Empty(_) | Event::CData(_) => true,
            Event::Text(t) => !t.iter().all(u8::is_ascii_whitespace),
            _ => false,
        };
        if root_closed && is_content {
            bail!("content after root element at byte {}", reader.buffer_position());
        }

        match event {
            Event::Start(e) => {
                depth += 1;
                match e.local_name().as_ref() {
                    b"url" => in_url = true,
                    b"loc" if in_url => {
                        in_loc = true;
                        current.clear();
                    }
                    _ => {}
                }
            }
            Event::Empty(_) if depth == 0 => root_closed = true,
            Event::Text(e) if in_loc => current.push_str(&e.unescape()?),
            Event::CData(e) if in_loc => {
                current.push_str(&String::from_utf8_lossy(&e.into_inner()));
            }
            Event::End(e) => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    root_closed = true;
                }
                match e.local_name().as_ref() {
                    b"loc" if in_loc => {
                        in_loc = false;
                        let value = current.trim();
                        if !value.is_empty() {
                            locs.push(value.to_string());
                        }
                    }
                    b"url" => in_url = false,
                    _ => {}
                }
            }
            Event::Eof if depth > 0 => {
                bail!("document truncated: {} element(s) still open", depth);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(locs)
}
