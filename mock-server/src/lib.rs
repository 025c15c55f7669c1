use std::collections::BTreeMap;

use axum::{
    body::Body,
    extract::Path,
    http::{self, header, HeaderMap, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{any, get},
    Json, Router,
};
use log::info;
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

pub const INDEX_BODY: &str = "<!doctype html><html><body>mock</body></html>";

/// What `/echo` reports back about the request it received.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Echo {
    pub method: String,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

pub fn app() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/echo", any(echo))
        .route("/status/{code}", any(status))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!("mock server listening on {addr}");
    }
    axum::serve(listener, app()).await
}

async fn index() -> impl IntoResponse {
    (
        [
            (header::CACHE_CONTROL, "private, max-age=0"),
            (header::CONTENT_TYPE, "text/html; charset=utf-8"),
        ],
        INDEX_BODY,
    )
}

async fn echo(method: Method, headers: HeaderMap, body: String) -> Json<Echo> {
    let headers = headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();
    Json(Echo {
        method: method.as_str().to_string(),
        headers,
        body,
    })
}

async fn status(Path(code): Path<u16>) -> Response {
    let status = match StatusCode::from_u16(code) {
        Ok(status) => status,
        Err(_) => return StatusCode::BAD_REQUEST.into_response(),
    };
    let body = status.canonical_reason().unwrap_or_default().to_string();
    http::Response::builder()
        .status(status)
        .header("X-Mock-Status", code.to_string())
        .body(Body::from(body))
        .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
}
