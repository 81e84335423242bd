use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query},
    http::{header, HeaderMap, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

/// What `/post` saw of the incoming request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Echo {
    pub path: String,
    pub args: BTreeMap<String, String>,
    pub headers: BTreeMap<String, String>,
    /// Raw request body, empty when none was sent.
    pub data: String,
    /// The body parsed as JSON, when it parses.
    pub json: Option<serde_json::Value>,
}

#[derive(Deserialize)]
pub struct LargeQuery {
    pub size: usize,
}

#[derive(Deserialize)]
pub struct CannedQuery {
    #[serde(default)]
    pub body: String,
    pub content_type: Option<String>,
}

pub fn app() -> Router {
    Router::new()
        .route("/post", post(echo))
        .route("/api/post", post(echo))
        .route("/status/{code}", post(canned))
        .route("/large/{code}", post(large))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn echo(
    uri: Uri,
    Query(args): Query<BTreeMap<String, String>>,
    headers: HeaderMap,
    data: String,
) -> Json<Echo> {
    let headers = headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), v.to_string()))
        })
        .collect();
    let json = serde_json::from_str(&data).ok();
    Json(Echo {
        path: uri.path().to_string(),
        args,
        headers,
        data,
        json,
    })
}

/// Answer with the status in the path and the `body` query parameter verbatim.
async fn canned(Path(code): Path<u16>, Query(query): Query<CannedQuery>) -> Response {
    let Ok(status) = StatusCode::from_u16(code) else {
        return StatusCode::BAD_REQUEST.into_response();
    };
    let content_type = query.content_type.unwrap_or_else(|| "text/plain".to_string());
    (status, [(header::CONTENT_TYPE, content_type)], query.body).into_response()
}

/// Answer with the status in the path and `size` bytes of `x`.
async fn large(Path(code): Path<u16>, Query(query): Query<LargeQuery>) -> Response {
    let Ok(status) = StatusCode::from_u16(code) else {
        return StatusCode::BAD_REQUEST.into_response();
    };
    (status, "x".repeat(query.size)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn echo_serializes_to_json() {
        let echo = Echo {
            path: "/post".to_string(),
            args: BTreeMap::from([("foo1".to_string(), "bar1".to_string())]),
            headers: BTreeMap::new(),
            data: String::new(),
            json: None,
        };
        let json = serde_json::to_value(&echo).unwrap();
        assert_eq!(json["path"], "/post");
        assert_eq!(json["args"]["foo1"], "bar1");
        assert_eq!(json["data"], "");
        assert!(json["json"].is_null());
    }

    #[test]
    fn canned_query_defaults_to_empty_body() {
        let query: CannedQuery = serde_json::from_str(r#"{}"#).unwrap();
        assert!(query.body.is_empty());
        assert!(query.content_type.is_none());
    }
}
