//! Canonical form for sitemap URLs.

use url::{ParseError, Url};

use super::{is_web_scheme, BaseOrigin};

impl BaseOrigin {
    /// Normalizes a URL, relative reference or bare path onto this origin.
    ///
    /// Returns `None` when the input should be discarded: blank,
    /// fragment-only, unparseable, or carrying a non-web scheme
    /// (`mailto:`, `javascript:`, `tel:` ...).
    ///
    /// Foreign hosts are rewritten onto the base origin; only path and query
    /// survive. Fragments are dropped and exactly one trailing slash is
    /// removed, so the site root comes out as the bare origin.
    ///
    /// # Examples
    ///
    /// - `"/tours/"` → `"https://example.com/tours"`
    /// - `"https://old-domain.com/tours/?page=2#reviews"` → `"https://example.com/tours?page=2"`
    /// - `"#top"` → `None`
    pub fn normalize(&self, input: &str) -> Option<String> {
        let input = input.trim();
        if input.is_empty() || input.starts_with('#') {
            return None;
        }

        let resolved = match Url::parse(input) {
            Ok(url) => url,
            Err(ParseError::RelativeUrlWithoutBase) => self.root.join(input).ok()?,
            Err(_) => return None,
        };
        if !is_web_scheme(resolved.scheme()) {
            return None;
        }

        Some(self.rebind(resolved.path(), resolved.query()))
    }

    /// Joins an already-resolved path and query onto the origin.
    fn rebind(&self, path: &str, query: Option<&str>) -> String {
        let path = path.strip_suffix('/').unwrap_or(path);
        let mut out = String::with_capacity(
            self.origin.len() + path.len() + query.map_or(0, |q| q.len() + 1),
        );
        out.push_str(&self.origin);
        out.push_str(path);
        if let Some(q) = query {
            out.push('?');
            out.push_str(q);
        }
        out
    }
}
