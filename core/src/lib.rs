//! Small helpers used across a codebase: a one-call JSON POST client, string
//! utilities, and single-value sequence adapters.
//!
//! # Overview
//! `JsonClient` resolves a target address, POSTs an optional JSON payload, and
//! either decodes the JSON response or returns a `PostError` describing what
//! went wrong. The `text` and `seq` modules are independent of it.
//!
//! # Design
//! - `JsonClient` is stateless; it holds a `ClientConfig` and a `Transport`.
//! - Requests and responses are plain data (`HttpRequest` / `HttpResponse`),
//!   so building and classifying are testable without a server.
//! - Failures are never retried or logged by the library; they are returned.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod seq;
pub mod target;
pub mod text;
pub mod transport;

pub use client::{JsonClient, Payload};
pub use config::{ClientConfig, DEFAULT_TRUNCATION_LIMIT};
pub use error::{ArgumentError, PostError, TransportError};
pub use http::{HttpRequest, HttpResponse};
pub use seq::{yield_one, yield_one_async, YieldExt};
pub use target::RequestTarget;
pub use text::{is_set, repeat, truncate, OptionTextExt, TextExt, ELLIPSIS};
pub use transport::{Transport, UreqTransport};
pub use url::Url;
