//! Dispatch and exposure.
//!
//! # Responsibilities
//! - Tie one top-level resource to a runnable endpoint
//! - In-process dispatch (loopback) for embedding and tests
//! - Bind a listener and serve external traffic
//!
//! # Design Decisions
//! - The caller's transform runs exactly once at startup, never per request
//! - Loopback surfaces a miss as an explicit error; server mode converts it
//!   to 404 at the transport edge
//! - The dispatcher is a plain axum `Router`, buildable without a socket

pub mod names;

use crate::routing::{Path, Resource, RouteKey};
use crate::service::{BoxError, Service};
use axum::body::Body;
use axum::extract::State;
use axum::http::{Method, Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use axum::Router;
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Errors surfaced by the unchecked dispatch path.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The request's (method, path) matches no entry in the route table.
    #[error("no route matches {method} {path}")]
    RouteNotFound { method: Method, path: Path },

    /// The matched handler's future failed.
    #[error("handler failed: {0}")]
    Handler(BoxError),
}

/// One top-level resource tied to a runnable endpoint.
pub struct Api<Rep> {
    name: String,
    resource: Resource<Rep>,
}

impl<Rep> Api<Rep>
where
    Rep: Send + 'static,
{
    /// Wrap a resource under a random diagnostic name.
    pub fn new(resource: Resource<Rep>) -> Self {
        Self {
            name: names::random_name(),
            resource,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn resource(&self) -> &Resource<Rep> {
        &self.resource
    }

    /// Dispatch a request in-process, with no transport involved.
    ///
    /// A miss is an error here, never an empty success.
    pub async fn loopback(&self, request: Request<Body>) -> Result<Rep, DispatchError> {
        let key = RouteKey::of(&request);
        let service =
            self.resource
                .route()
                .lookup(&key)
                .ok_or_else(|| DispatchError::RouteNotFound {
                    method: key.method.clone(),
                    path: key.path.clone(),
                })?;

        tracing::debug!(api = %self.name, key = %key, "loopback dispatch");
        service.call(request).await.map_err(DispatchError::Handler)
    }

    /// Serve the resource on `port`. `transform` composes the resource down
    /// to HTTP responses and runs exactly once, before the listener binds.
    pub async fn expose<F>(self, port: u16, transform: F) -> std::io::Result<()>
    where
        F: FnOnce(Resource<Rep>) -> Resource<Response>,
    {
        let name = self.name;
        let router = dispatcher(transform(self.resource));

        let listener = TcpListener::bind(("0.0.0.0", port)).await?;
        tracing::info!(
            api = %name,
            address = %listener.local_addr()?,
            "serving"
        );

        axum::serve(listener, router.into_make_service())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!(api = %name, "stopped");
        Ok(())
    }
}

/// Build the serving pipeline for an HTTP-ready resource: a catch-all
/// router running the same key-lookup-and-invoke algorithm as loopback.
pub fn dispatcher(resource: Resource<Response>) -> Router {
    let resource = Arc::new(resource);
    Router::new()
        .route("/{*path}", any(dispatch))
        .route("/", any(dispatch))
        .with_state(resource)
        .layer(TraceLayer::new_for_http())
}

async fn dispatch(
    State(resource): State<Arc<Resource<Response>>>,
    request: Request<Body>,
) -> Response {
    let key = RouteKey::of(&request);

    let service = match resource.route().lookup(&key) {
        Some(service) => service,
        None => {
            tracing::warn!(resource = %resource.name(), key = %key, "no route matched");
            return (StatusCode::NOT_FOUND, "No matching route found").into_response();
        }
    };

    match service.call(request).await {
        Ok(response) => response,
        Err(error) => {
            tracing::error!(resource = %resource.name(), key = %key, error = %error, "handler failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Handler failed").into_response()
        }
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %error, "failed to install Ctrl+C handler");
        return;
    }
    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facet::json;
    use crate::service::{service_fn, BoxError};
    use serde_json::{json, Value};

    fn sample() -> Resource<Value> {
        Resource::named("sample")
            .at_shared(
                Method::GET,
                "/hello",
                service_fn(|_req: Request<Body>| async {
                    Ok::<_, BoxError>(json!({"msg": "hello"}))
                }),
            )
            .at_shared(
                Method::POST,
                "/things",
                service_fn(|_req: Request<Body>| async {
                    Ok::<_, BoxError>(json!({"status": 201, "msg": "created"}))
                }),
            )
    }

    fn request(method: Method, path: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(path)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_loopback_matched() {
        let api = Api::new(sample());
        let rep = api.loopback(request(Method::GET, "/hello")).await.unwrap();
        assert_eq!(rep, json!({"msg": "hello"}));
    }

    #[tokio::test]
    async fn test_loopback_unmatched_is_an_error() {
        let api = Api::new(sample());
        let err = api
            .loopback(request(Method::DELETE, "/hello"))
            .await
            .unwrap_err();
        assert!(matches!(err, DispatchError::RouteNotFound { .. }));
        assert_eq!(err.to_string(), "no route matches DELETE /hello");
    }

    #[tokio::test]
    async fn test_loopback_propagates_handler_failure() {
        let failing = Resource::named("failing").at_shared(
            Method::GET,
            "/boom",
            service_fn(|_req: Request<Body>| async { Err::<Value, BoxError>("boom".into()) }),
        );
        let api = Api::new(failing);

        let err = api.loopback(request(Method::GET, "/boom")).await.unwrap_err();
        assert!(matches!(err, DispatchError::Handler(_)));
    }

    #[tokio::test]
    async fn test_dispatcher_not_found() {
        use tower::ServiceExt;

        let router = dispatcher(sample().after_that(json::to_http()));
        let response = router
            .oneshot(request(Method::GET, "/missing"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_dispatcher_matched() {
        use tower::ServiceExt;

        let router = dispatcher(sample().after_that(json::to_http_with_status_from_tag("status")));
        let response = router
            .oneshot(request(Method::POST, "/things"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[test]
    fn test_random_name_assigned() {
        let api = Api::new(sample());
        assert!(!api.name().is_empty());
    }
}
