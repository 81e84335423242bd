//! The seam between request building and the network.
//!
//! # Design
//! `Transport` performs one round trip for an `HttpRequest`. Non-2xx statuses
//! are returned as data; only failures to complete the exchange (refused
//! connection, DNS, timeout, unreadable body) are errors. `UreqTransport` is the
//! blocking implementation used by default.

use std::time::Duration;

use crate::error::TransportError;
use crate::http::{HttpRequest, HttpResponse, APPLICATION_JSON, CONTENT_TYPE};

/// Executes an `HttpRequest` and returns the raw response.
pub trait Transport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).send(request)
    }
}

/// Blocking transport backed by a shared `ureq::Agent`.
///
/// Cloning is cheap and shares the agent's connection pool.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new(timeout: Option<Duration>) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(timeout)
            .build()
            .new_agent();
        Self { agent }
    }

    pub fn from_agent(agent: ureq::Agent) -> Self {
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Transport for UreqTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = self.agent.post(request.url.as_str());
        for (name, value) in &request.headers {
            // ureq sets the content type itself from `content_type` below.
            if name.eq_ignore_ascii_case(CONTENT_TYPE) {
                continue;
            }
            builder = builder.header(name.as_str(), value.as_str());
        }

        let result = match &request.body {
            Some(body) => {
                let content_type = request.header(CONTENT_TYPE).unwrap_or(APPLICATION_JSON);
                builder.content_type(content_type).send(body.as_bytes())
            }
            None => builder.send_empty(),
        };
        let mut response = result?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        // Error pages of any size must reach classification, so ureq's
        // default read limit is lifted.
        let body = response
            .body_mut()
            .with_config()
            .limit(u64::MAX)
            .read_to_string()?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
