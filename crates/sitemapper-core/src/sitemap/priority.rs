//! Priority scoring.

use std::fmt;

use crate::url_model::BaseOrigin;

/// Path fragments marking the site's content sections.
pub const SECTION_MARKERS: &[&str] = &["/tours", "/destinations", "/experiences", "/blog"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    /// The bare origin: 1.0.
    Home,
    /// Inside a content section: 0.9.
    Section,
    /// Everything else: 0.7.
    Standard,
}

impl Priority {
    /// Scores a normalized URL. First match wins: home, then section markers.
    pub fn for_url(url: &str, base: &BaseOrigin) -> Self {
        if url == base.as_str() {
            Priority::Home
        } else if SECTION_MARKERS.iter().any(|m| url.contains(m)) {
            Priority::Section
        } else {
            Priority::Standard
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Home => "1.0",
            Priority::Section => "0.9",
            Priority::Standard => "0.7",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
