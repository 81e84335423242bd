//! HTTP request and response described as plain data.
//!
//! # Design
//! `JsonClient::build_post` produces an `HttpRequest` and
//! `JsonClient::parse_post` consumes an `HttpResponse`; neither touches the
//! network. A [`Transport`](crate::transport::Transport) sits between the two
//! and does the actual round trip, which keeps resolution and classification
//! deterministic and testable without a server.
//!
//! Only POST is ever issued, so the method is implied rather than stored.

use url::Url;

pub(crate) const CONTENT_TYPE: &str = "content-type";
pub(crate) const ACCEPT: &str = "accept";
pub(crate) const APPLICATION_JSON: &str = "application/json";

/// A POST request ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: Url,
    pub headers: Vec<(String, String)>,
    /// `None` sends an empty body.
    pub body: Option<String>,
}

impl HttpRequest {
    /// First header value matching `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}

/// A response as read back from the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// Plain 200 response with `body`, mostly useful with fake transports.
    pub fn ok(body: impl Into<String>) -> Self {
        Self::with_status(200, body)
    }

    pub fn with_status(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}

fn find_header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_range_is_2xx() {
        assert!(HttpResponse::with_status(200, "").is_success());
        assert!(HttpResponse::with_status(204, "").is_success());
        assert!(HttpResponse::with_status(299, "").is_success());
        assert!(!HttpResponse::with_status(199, "").is_success());
        assert!(!HttpResponse::with_status(300, "").is_success());
        assert!(!HttpResponse::with_status(404, "").is_success());
    }

    #[test]
    fn header_lookup_ignores_case() {
        let response = HttpResponse {
            status: 200,
            headers: vec![("Content-Type".to_string(), "text/plain".to_string())],
            body: String::new(),
        };
        assert_eq!(response.header("content-type"), Some("text/plain"));
        assert_eq!(response.header("x-missing"), None);
    }
}
