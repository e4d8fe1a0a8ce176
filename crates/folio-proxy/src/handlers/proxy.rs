//! Forwards `/api/*` to the BFF, the way the console's dev server rewrites it.

use std::sync::Arc;

use axum::{
    Json,
    body::{Body, to_bytes},
    extract::State,
    http::{HeaderMap, HeaderName, Method, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use folio::log;
use serde::Serialize;

use crate::AppState;

/// Largest request body forwarded upstream.
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Connection-scoped headers that must not be forwarded.
const HOP_BY_HOP: [&str; 8] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

/// Same body shape the BFF uses for its own errors.
#[derive(Serialize)]
struct ErrorBody {
    errors: Vec<String>,
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(ErrorBody { errors: vec![message] })).into_response()
}

fn forwardable(headers: &HeaderMap, extra: &[HeaderName]) -> HeaderMap {
    headers
        .iter()
        .filter(|(name, _)| !HOP_BY_HOP.contains(&name.as_str()) && !extra.contains(*name))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

pub async fn forward(
    State(state): State<Arc<AppState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Body,
) -> Response {
    let path_and_query = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());
    let target = format!("{}{}", state.config.bff_base_url, path_and_query);

    let body = match to_bytes(body, MAX_BODY_BYTES).await {
        Ok(body) => body,
        Err(err) => {
            log::warn!("Rejected {method} {path_and_query}: {err}");
            return error_response(
                StatusCode::PAYLOAD_TOO_LARGE,
                format!("Request body rejected: {err}"),
            );
        }
    };

    let request_headers = forwardable(&headers, &[header::HOST, header::CONTENT_LENGTH]);
    log::debug!("Proxying {method} {path_and_query} -> {target}");

    let upstream = match state
        .http
        .request(method.clone(), &target)
        .headers(request_headers)
        .body(body)
        .send()
        .await
    {
        Ok(upstream) => upstream,
        Err(err) => {
            log::warn!("BFF unreachable for {method} {path_and_query}: {err}");
            return error_response(
                StatusCode::BAD_GATEWAY,
                format!("Upstream BFF at {} is unreachable: {err}", state.config.bff_base_url),
            );
        }
    };

    let status = upstream.status();
    let response_headers = forwardable(upstream.headers(), &[header::CONTENT_LENGTH]);
    match upstream.bytes().await {
        Ok(bytes) => (status, response_headers, bytes).into_response(),
        Err(err) => {
            log::warn!("Failed to read BFF response for {method} {path_and_query}: {err}");
            error_response(
                StatusCode::BAD_GATEWAY,
                format!("Upstream BFF response could not be read: {err}"),
            )
        }
    }
}
