//! Error types for the request helper and the text utilities.
//!
//! # Design
//! `PostError` separates the ways a call can end without a value. Address and
//! argument problems are raised before any I/O. `Transport` carries whatever
//! the transport reported, untouched. `Http` and `Parse` are the two
//! response-level failures: the first carries a truncated body, the second the
//! full body so the caller can see exactly what failed to decode.

use thiserror::Error;

/// Boxed error reported by a [`Transport`](crate::transport::Transport).
pub type TransportError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Invalid caller input to one of the text helpers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    /// `repeat` was asked to repeat zero or fewer times.
    #[error("count must be greater than zero, got {count}")]
    InvalidCount { count: i64 },

    /// `repeat` would produce more text than a `String` can hold.
    #[error("repeating {len} bytes {count} times exceeds the maximum string size")]
    TooLarge { len: usize, count: i64 },

    /// A length parameter was zero or negative.
    #[error("{parameter} must be greater than zero, got {value}")]
    OutOfRange { parameter: &'static str, value: i64 },
}

/// Errors returned by `JsonClient`.
#[derive(Debug, Error)]
pub enum PostError {
    /// The target could not be turned into an absolute http(s) address.
    #[error("invalid address `{address}`: {reason}")]
    InvalidAddress { address: String, reason: String },

    /// A per-call option was out of range.
    #[error(transparent)]
    Argument(#[from] ArgumentError),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The transport could not complete the exchange.
    #[error("transport error: {0}")]
    Transport(#[source] TransportError),

    /// The server answered with a non-2xx status. `body` is truncated.
    #[error("POST {url} failed with HTTP {status}: {body}")]
    Http { url: String, status: u16, body: String },

    /// The server answered 2xx but the body did not decode. `body` is complete.
    #[error("POST {url} returned a body that is not valid JSON for the requested type: {body}")]
    Parse {
        url: String,
        body: String,
        #[source]
        source: serde_json::Error,
    },
}

impl PostError {
    /// HTTP status of the response, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            PostError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub(crate) fn invalid_address(address: impl Into<String>, reason: impl Into<String>) -> Self {
        PostError::InvalidAddress {
            address: address.into(),
            reason: reason.into(),
        }
    }
}
