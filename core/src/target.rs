//! Where a request goes, and how that turns into an absolute URL.
//!
//! # Design
//! A target is either text, resolved against the configured base address
//! with ordinary relative-URL rules, or an explicit address that is used as
//! given and never combined with the base. Both must end up as an absolute
//! `http` or `https` URL before anything is sent.

use url::{ParseError, Url};

use crate::error::PostError;

/// The target of a POST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestTarget {
    /// Resolved against the base address when one is configured.
    Text(String),
    /// Used verbatim. Must carry its own scheme.
    Address(String),
}

impl RequestTarget {
    /// An explicit address that bypasses the base address.
    pub fn address(address: impl Into<String>) -> Self {
        RequestTarget::Address(address.into())
    }

    /// Resolve to an absolute URL, using `base` for text targets only.
    pub fn resolve(&self, base: Option<&Url>) -> Result<Url, PostError> {
        let (raw, parsed) = match (self, base) {
            (RequestTarget::Address(raw), _) => (raw, Url::parse(raw)),
            (RequestTarget::Text(raw), Some(base)) => (raw, base.join(raw)),
            (RequestTarget::Text(raw), None) => (raw, Url::parse(raw)),
        };
        let url = parsed.map_err(|e| match e {
            ParseError::RelativeUrlWithoutBase => PostError::invalid_address(
                raw.as_str(),
                "relative address has no scheme; an absolute address with an http or https scheme is required",
            ),
            other => PostError::invalid_address(raw.as_str(), other.to_string()),
        })?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(PostError::invalid_address(
                raw.as_str(),
                format!("unsupported scheme `{scheme}`, expected http or https"),
            )),
        }
    }
}

impl From<&str> for RequestTarget {
    fn from(text: &str) -> Self {
        RequestTarget::Text(text.to_string())
    }
}

impl From<String> for RequestTarget {
    fn from(text: String) -> Self {
        RequestTarget::Text(text)
    }
}

impl From<&String> for RequestTarget {
    fn from(text: &String) -> Self {
        RequestTarget::Text(text.clone())
    }
}

impl From<Url> for RequestTarget {
    fn from(url: Url) -> Self {
        RequestTarget::Address(url.into())
    }
}

impl From<&Url> for RequestTarget {
    fn from(url: &Url) -> Self {
        RequestTarget::Address(url.as_str().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://host/").unwrap()
    }

    fn reason(err: PostError) -> String {
        match err {
            PostError::InvalidAddress { reason, .. } => reason,
            other => panic!("expected InvalidAddress, got {other:?}"),
        }
    }

    #[test]
    fn text_is_resolved_against_base() {
        let url = RequestTarget::from("post?x=1").resolve(Some(&base())).unwrap();
        assert_eq!(url.as_str(), "https://host/post?x=1");
    }

    #[test]
    fn text_follows_relative_url_rules() {
        let base = Url::parse("https://host/api/v1/").unwrap();
        let url = RequestTarget::from("items").resolve(Some(&base)).unwrap();
        assert_eq!(url.as_str(), "https://host/api/v1/items");

        let url = RequestTarget::from("/root").resolve(Some(&base)).unwrap();
        assert_eq!(url.as_str(), "https://host/root");

        let no_slash = Url::parse("https://host/api/v1").unwrap();
        let url = RequestTarget::from("items").resolve(Some(&no_slash)).unwrap();
        assert_eq!(url.as_str(), "https://host/api/items");
    }

    #[test]
    fn absolute_text_ignores_base() {
        let url = RequestTarget::from("http://other:8080/post")
            .resolve(Some(&base()))
            .unwrap();
        assert_eq!(url.as_str(), "http://other:8080/post");
    }

    #[test]
    fn address_ignores_base() {
        let target = RequestTarget::from(Url::parse("https://elsewhere.test/post?a=b").unwrap());
        let url = target.resolve(Some(&base())).unwrap();
        assert_eq!(url.as_str(), "https://elsewhere.test/post?a=b");
    }

    #[test]
    fn relative_address_fails_mentioning_scheme() {
        let err = RequestTarget::address("/post?foo1=bar1")
            .resolve(Some(&base()))
            .unwrap_err();
        assert!(err.to_string().contains("scheme"));
        assert!(reason(err).contains("scheme"));
    }

    #[test]
    fn relative_text_without_base_fails_mentioning_scheme() {
        let err = RequestTarget::from("post").resolve(None).unwrap_err();
        assert!(err.to_string().contains("scheme"));
    }

    #[test]
    fn non_http_scheme_is_rejected() {
        let err = RequestTarget::from("ftp://files/x").resolve(None).unwrap_err();
        assert!(reason(err).contains("unsupported scheme `ftp`"));

        let err = RequestTarget::address("mailto:someone@example.com")
            .resolve(Some(&base()))
            .unwrap_err();
        assert!(err.to_string().contains("scheme"));
    }
}
