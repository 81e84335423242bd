//! Client configuration with defaults.

use std::num::NonZeroUsize;
use std::time::Duration;

use url::Url;

/// Default number of body characters kept in an HTTP failure message.
pub const DEFAULT_TRUNCATION_LIMIT: NonZeroUsize = match NonZeroUsize::new(1000) {
    Some(n) => n,
    None => unreachable!(),
};

/// Settings shared by every call made through one `JsonClient`.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Address that text targets are resolved against. Default: none.
    pub base_address: Option<Url>,
    /// Body characters kept in HTTP failure messages. Default: `1000`.
    pub truncation_limit: NonZeroUsize,
    /// Overall timeout handed to the transport. Default: none.
    pub timeout: Option<Duration>,
    /// Headers added to every request, replacing any built-in header of the
    /// same name (`accept`, `content-type`). Default: empty.
    pub default_headers: Vec<(String, String)>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_address: None,
            truncation_limit: DEFAULT_TRUNCATION_LIMIT,
            timeout: None,
            default_headers: Vec::new(),
        }
    }
}

impl ClientConfig {
    pub fn with_base_address(mut self, base: Url) -> Self {
        self.base_address = Some(base);
        self
    }

    pub fn with_truncation_limit(mut self, limit: NonZeroUsize) -> Self {
        self.truncation_limit = limit;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ClientConfig::default();
        assert!(config.base_address.is_none());
        assert_eq!(config.truncation_limit.get(), 1000);
        assert!(config.timeout.is_none());
        assert!(config.default_headers.is_empty());
    }

    #[test]
    fn builders_override_defaults() {
        let config = ClientConfig::default()
            .with_base_address(Url::parse("https://host/").unwrap())
            .with_truncation_limit(NonZeroUsize::new(5).unwrap())
            .with_timeout(Duration::from_secs(3))
            .with_header("x-trace", "abc");
        assert_eq!(config.base_address.unwrap().as_str(), "https://host/");
        assert_eq!(config.truncation_limit.get(), 5);
        assert_eq!(config.timeout, Some(Duration::from_secs(3)));
        assert_eq!(config.default_headers, vec![("x-trace".to_string(), "abc".to_string())]);
    }
}
