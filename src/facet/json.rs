//! Built-in JSON → HTTP facets.
//!
//! # Responsibilities
//! - Serialize an abstract JSON value into an HTTP response
//! - Optionally derive the status code from a tagged field in the value
//!
//! # Design Decisions
//! - Content type is always `application/json`
//! - Status-from-tag is a lookup with a default, not validation: a missing
//!   field, a non-integer field, an out-of-range code, or a non-object
//!   value all silently resolve to 200

use crate::facet::Facet;
use axum::body::Body;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::Response;
use serde_json::Value;

fn json_response(status: StatusCode, value: &Value) -> Response {
    let mut response = Response::new(Body::from(value.to_string()));
    *response.status_mut() = status;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    response
}

/// Serialize a JSON value into a 200 response.
pub fn to_http() -> Facet<Value, Response> {
    Facet::of(|value: Value| json_response(StatusCode::OK, &value))
}

/// Serialize a JSON value into a response whose status comes from the
/// integer field named `tag`, when the value is an object carrying one;
/// anything else defaults to 200.
pub fn to_http_with_status_from_tag(tag: &str) -> Facet<Value, Response> {
    let tag = tag.to_owned();
    Facet::of(move |value: Value| {
        let status = value
            .as_object()
            .and_then(|object| object.get(&tag))
            .and_then(Value::as_u64)
            .and_then(|code| u16::try_from(code).ok())
            .and_then(|code| StatusCode::from_u16(code).ok())
            .unwrap_or(StatusCode::OK);
        json_response(status, &value)
    })
}
