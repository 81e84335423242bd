//! JSON-over-HTTP POST helper.
//!
//! # Design
//! `JsonClient` holds only its configuration and a transport; it carries no
//! mutable state between calls. Each call is split into `build_post`, which
//! resolves the target and serializes the payload into an `HttpRequest`, and
//! `parse_post`, which classifies an `HttpResponse`. `post_with` runs the two
//! around a single `Transport::send`. Callers that do their own I/O can use
//! the build/parse pair directly.
//!
//! Classification:
//! - non-2xx: `PostError::Http` with the body truncated to the limit; the body
//!   is never parsed.
//! - 2xx with a body that does not decode: `PostError::Parse` with the full body.
//! - 2xx that decodes: the value.

use std::num::NonZeroUsize;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{ArgumentError, PostError};
use crate::http::{HttpRequest, HttpResponse, ACCEPT, APPLICATION_JSON, CONTENT_TYPE};
use crate::target::RequestTarget;
use crate::text::truncate_chars;
use crate::transport::{Transport, UreqTransport};

/// Request body for a POST.
///
/// `Empty` sends no body at all. `Json` sends serialized text, which may be the
/// literal `null` when the caller serialized a null value on purpose.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Payload {
    #[default]
    Empty,
    Json(String),
}

impl Payload {
    pub fn json<B: Serialize + ?Sized>(body: &B) -> Result<Self, PostError> {
        serde_json::to_string(body)
            .map(Payload::Json)
            .map_err(PostError::Serialize)
    }
}

/// Stateless POST-and-decode client.
#[derive(Debug, Clone)]
pub struct JsonClient<T = UreqTransport> {
    config: ClientConfig,
    transport: T,
}

impl JsonClient<UreqTransport> {
    /// Client with a ureq transport built from `config`.
    pub fn new(config: ClientConfig) -> Self {
        let transport = UreqTransport::new(config.timeout);
        Self { config, transport }
    }
}

impl Default for JsonClient<UreqTransport> {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

impl<T: Transport> JsonClient<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// POST with no body and decode the JSON response.
    pub fn post<R: DeserializeOwned>(&self, target: impl Into<RequestTarget>) -> Result<R, PostError> {
        self.post_with(target, Payload::Empty, None)
    }

    /// POST `body` as JSON and decode the JSON response.
    pub fn post_json<B, R>(&self, target: impl Into<RequestTarget>, body: &B) -> Result<R, PostError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.post_with(target, Payload::json(body)?, None)
    }

    /// General form. `truncation_limit` overrides the configured limit for this
    /// call and must be positive.
    pub fn post_with<R: DeserializeOwned>(
        &self,
        target: impl Into<RequestTarget>,
        payload: Payload,
        truncation_limit: Option<usize>,
    ) -> Result<R, PostError> {
        let request = self.build_post(target, payload, truncation_limit)?;
        debug!(url = %request.url, body_len = request.body.as_ref().map_or(0, String::len), "sending POST");
        let response = self.transport.send(&request).map_err(PostError::Transport)?;
        debug!(url = %request.url, status = response.status, body_len = response.body.len(), "received response");
        self.parse_post(request.url.as_str(), &response, truncation_limit)
    }

    /// Resolve `target` and assemble the request without sending it.
    ///
    /// Fails before any I/O on an unusable address or a zero truncation limit.
    pub fn build_post(
        &self,
        target: impl Into<RequestTarget>,
        payload: Payload,
        truncation_limit: Option<usize>,
    ) -> Result<HttpRequest, PostError> {
        self.effective_limit(truncation_limit)?;
        let url = target.into().resolve(self.config.base_address.as_ref())?;

        let mut headers = vec![(ACCEPT.to_string(), APPLICATION_JSON.to_string())];
        let body = match payload {
            Payload::Empty => None,
            Payload::Json(text) => {
                headers.push((CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string()));
                Some(text)
            }
        };
        for (name, value) in &self.config.default_headers {
            headers.retain(|(existing, _)| !existing.eq_ignore_ascii_case(name));
            headers.push((name.clone(), value.clone()));
        }

        Ok(HttpRequest { url, headers, body })
    }

    /// Classify a response received for `url`.
    pub fn parse_post<R: DeserializeOwned>(
        &self,
        url: &str,
        response: &HttpResponse,
        truncation_limit: Option<usize>,
    ) -> Result<R, PostError> {
        let limit = self.effective_limit(truncation_limit)?;
        classify(url, response, limit)
    }

    fn effective_limit(&self, truncation_limit: Option<usize>) -> Result<NonZeroUsize, ArgumentError> {
        match truncation_limit {
            None => Ok(self.config.truncation_limit),
            Some(n) => NonZeroUsize::new(n).ok_or(ArgumentError::OutOfRange {
                parameter: "maxLength",
                value: 0,
            }),
        }
    }
}

fn classify<R: DeserializeOwned>(url: &str, response: &HttpResponse, limit: NonZeroUsize) -> Result<R, PostError> {
    if !response.is_success() {
        return Err(PostError::Http {
            url: url.to_string(),
            status: response.status,
            body: truncate_chars(&response.body, limit.get()),
        });
    }
    serde_json::from_str(&response.body).map_err(|source| PostError::Parse {
        url: url.to_string(),
        body: response.body.clone(),
        source,
    })
}
