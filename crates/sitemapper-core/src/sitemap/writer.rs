//! sitemaps.org XML rendering and the on-disk write.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use super::SitemapEntry;
use crate::error::{Result, SitemapError};

pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

fn render_err(e: impl fmt::Display) -> SitemapError {
    SitemapError::Render(e.to_string())
}

fn text_element(writer: &mut Writer<Vec<u8>>, name: &str, text: &str) -> Result<()> {
    writer
        .write_event(Event::Start(BytesStart::new(name)))
        .map_err(render_err)?;
    writer
        .write_event(Event::Text(BytesText::new(text)))
        .map_err(render_err)?;
    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(render_err)?;
    Ok(())
}

/// Renders entries, in the order given, as a `<urlset>` document.
pub fn render(entries: &[SitemapEntry<'_>]) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(render_err)?;
    writer
        .write_event(Event::Start(
            BytesStart::new("urlset").with_attributes([("xmlns", SITEMAP_NS)]),
        ))
        .map_err(render_err)?;

    for entry in entries {
        writer
            .write_event(Event::Start(BytesStart::new("url")))
            .map_err(render_err)?;
        text_element(&mut writer, "loc", entry.loc)?;
        text_element(
            &mut writer,
            "lastmod",
            &entry.lastmod.format("%Y-%m-%d").to_string(),
        )?;
        text_element(&mut writer, "changefreq", SitemapEntry::CHANGEFREQ)?;
        text_element(&mut writer, "priority", entry.priority.as_str())?;
        writer
            .write_event(Event::End(BytesEnd::new("url")))
            .map_err(render_err)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("urlset")))
        .map_err(render_err)?;

    let mut xml = String::from_utf8(writer.into_inner()).map_err(render_err)?;
    xml.push('\n');
    Ok(xml)
}

/// Sibling path the document is written to before the rename (`sitemap.xml.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(".part");
    PathBuf::from(o)
}

/// Writes `xml` to `path`, creating parent directories.
///
/// The document goes to a `.part` file first and is renamed into place, so a
/// reader never sees a half-written sitemap.
pub fn write_sitemap(path: &Path, xml: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| SitemapError::io("create directory", parent, e))?;
    }

    let tmp = temp_path(path);
    fs::write(&tmp, xml).map_err(|e| SitemapError::io("write", &tmp, e))?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(SitemapError::io("rename into", path, e));
    }
    tracing::debug!("wrote {} bytes to {}", xml.len(), path.display());
    Ok(())
}
