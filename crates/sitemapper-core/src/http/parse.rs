//! Parse raw response header lines.

/// Response headers the crawler cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseHead {
    /// `Content-Type` of the final response, without parameters.
    pub content_type: Option<String>,
}

impl ResponseHead {
    /// True when the response is HTML or carries no content type at all.
    pub fn is_html(&self) -> bool {
        match self.content_type.as_deref() {
            None => true,
            Some(ct) => {
                ct.eq_ignore_ascii_case("text/html")
                    || ct.eq_ignore_ascii_case("application/xhtml+xml")
            }
        }
    }
}

/// Parse collected header lines into a ResponseHead.
///
/// When redirects are followed curl reports the headers of every hop; a new
/// status line resets what was collected so the final response wins.
pub(crate) fn parse_head(lines: &[String]) -> ResponseHead {
    let mut head = ResponseHead::default();

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with("HTTP/") {
            head = ResponseHead::default();
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("content-type") {
                let media = value.split(';').next().unwrap_or_default().trim();
                if !media.is_empty() {
                    head.content_type = Some(media.to_ascii_lowercase());
                }
            }
        }
    }

    head
}
