//! Blocking HTTP over libcurl.
//!
//! One `Easy` handle per request, no connection reuse, no retries. Used for
//! crawl fetches and the two publisher calls; each call blocks the current
//! thread until the response is complete or the timeout fires.

mod parse;

use std::fmt;
use std::str;
use std::time::Duration;

use thiserror::Error;

pub use parse::ResponseHead;

/// Longest response body excerpt carried in a status error.
const ERROR_BODY_EXCERPT: usize = 200;

#[derive(Debug, Error)]
pub enum HttpError {
    /// Transport failure reported by curl (DNS, connect, timeout ...).
    #[error(transparent)]
    Curl(#[from] curl::Error),
    /// The server answered with a non-2xx status.
    #[error("{method} {url} returned HTTP {status}{}", excerpt_suffix(.body))]
    Status {
        method: Method,
        url: String,
        status: u32,
        body: String,
    },
}

fn excerpt_suffix(body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        return String::new();
    }
    let mut end = body.len().min(ERROR_BODY_EXCERPT);
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!(": {}", body[..end].replace(['\r', '\n'], " "))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
        })
    }
}

/// A completed 2xx response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u32,
    pub head: ResponseHead,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Body decoded as UTF-8, replacing invalid sequences.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Request settings shared by every call of a run.
#[derive(Debug, Clone)]
pub struct HttpClient {
    user_agent: String,
    timeout: Duration,
    connect_timeout: Duration,
}

impl HttpClient {
    pub fn new(user_agent: impl Into<String>, timeout: Duration) -> Self {
        Self {
            user_agent: user_agent.into(),
            connect_timeout: timeout.min(Duration::from_secs(10)),
            timeout,
        }
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// GET following redirects.
    pub fn get(&self, url: &str) -> Result<HttpResponse, HttpError> {
        self.send(Method::Get, url, &[], None)
    }

    /// Performs one request and returns the response if the status is 2xx.
    ///
    /// `headers` are `(name, value)` pairs. For POST and PUT a missing body is
    /// sent as an empty one (`Content-Length: 0`).
    pub fn send(
        &self,
        method: Method,
        url: &str,
        headers: &[(&str, &str)],
        body: Option<&[u8]>,
    ) -> Result<HttpResponse, HttpError> {
        let mut header_lines: Vec<String> = Vec::new();
        let mut response_body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.useragent(&self.user_agent)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;

        match method {
            Method::Get => {
                easy.get(true)?;
                easy.follow_location(true)?;
                easy.max_redirections(10)?;
            }
            Method::Post => {
                easy.post(true)?;
                easy.post_fields_copy(body.unwrap_or_default())?;
            }
            Method::Put => {
                // PUT via the POST body path so an empty body still carries
                // Content-Length: 0.
                easy.post(true)?;
                easy.custom_request("PUT")?;
                easy.post_fields_copy(body.unwrap_or_default())?;
            }
        }

        if !headers.is_empty() {
            let mut list = curl::easy::List::new();
            for (name, value) in headers {
                list.append(&format!("{}: {}", name.trim(), value.trim()))?;
            }
            easy.http_headers(list)?;
        }

        {
            let mut transfer = easy.transfer();
            transfer.header_function(|data| {
                if let Ok(s) = str::from_utf8(data) {
                    header_lines.push(s.trim_end().to_string());
                }
                true
            })?;
            transfer.write_function(|data| {
                response_body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        if !(200..300).contains(&status) {
            return Err(HttpError::Status {
                method,
                url: url.to_string(),
                status,
                body: String::from_utf8_lossy(&response_body).into_owned(),
            });
        }

        Ok(HttpResponse {
            status,
            head: parse::parse_head(&header_lines),
            body: response_body,
        })
    }
}
