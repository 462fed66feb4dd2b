//! Hyperlink extraction from HTML.

use std::collections::HashSet;

use scraper::{Html, Selector};

/// Returns the distinct raw `href` values of `<a>` elements, in order of
/// first appearance.
///
/// Values are trimmed; empty ones are dropped. No resolution happens here.
/// The HTML parser may clone an unclosed anchor while repairing markup, so
/// the same element can be seen twice.
pub fn extract_links(html: &str) -> Vec<String> {
    let selector = match Selector::parse("a[href]") {
        Ok(s) => s,
        Err(_) => return Vec::new(),
    };
    let document = Html::parse_document(html);
    let mut seen: HashSet<&str> = HashSet::new();
    document
        .select(&selector)
        .filter_map(|el| el.value().attr("href"))
        .map(str::trim)
        .filter(|href| !href.is_empty() && seen.insert(*href))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_anchor_hrefs_in_order() {
        let html = r#"<html><body>
            <nav><a href="/tours">Tours</a> <a href=" /destinations/ ">Destinations</a></nav>
            <a>no href</a>
            <a href="">empty</a>
            <link rel="stylesheet" href="/style.css">
            <a href="https://example.com/blog#latest">Blog</a>
        </body></html>"#;
        assert_eq!(
            extract_links(html),
            vec!["/tours", "/destinations/", "https://example.com/blog#latest"]
        );
    }

    #[test]
    fn tolerates_broken_markup() {
        // The unclosed first anchor is reopened inside <p> by the parser.
        let html = r#"<div><a href="/hotels">Hotels<p><a href='/blog'>Blog"#;
        assert_eq!(extract_links(html), vec!["/hotels", "/blog"]);
    }

    #[test]
    fn repeated_hrefs_reported_once() {
        let html = r#"<a href="/tours">Tours</a><a href="/blog">Blog</a>
            <footer><a href=" /tours ">All tours</a></footer>"#;
        assert_eq!(extract_links(html), vec!["/tours", "/blog"]);
    }

    #[test]
    fn plain_text_has_no_links() {
        assert!(extract_links("just some text").is_empty());
    }
}
