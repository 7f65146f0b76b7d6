//! Request-handler abstraction.
//!
//! # Responsibilities
//! - Define the async request → response calling convention
//! - Allow plain async closures to act as handlers
//! - Share handlers cheaply across route tables
//!
//! # Design Decisions
//! - Object-safe trait returning a boxed future (handlers live in trait
//!   objects inside the route table)
//! - `Arc<dyn Service>` sharing; composition clones pointers, not handlers
//! - Opaque boxed errors for downstream failures, converted at the edge

use axum::body::Body;
use axum::http::Request;
use futures_util::future::BoxFuture;
use std::future::Future;
use std::sync::Arc;

/// Opaque error produced by a handler's future.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// The future a handler returns.
pub type ServiceFuture<Rep> = BoxFuture<'static, Result<Rep, BoxError>>;

/// An asynchronous request handler producing a response of type `Rep`.
///
/// The transport layer supplies concrete implementations; the routing core
/// only consumes this calling convention.
pub trait Service<Rep>: Send + Sync {
    /// Handle one request. The returned future owns everything it needs.
    fn call(&self, request: Request<Body>) -> ServiceFuture<Rep>;
}

/// A handler shared across route tables.
pub type SharedService<Rep> = Arc<dyn Service<Rep>>;

/// Any `Fn(Request) -> Future` closure is a handler.
impl<Rep, F, Fut> Service<Rep> for F
where
    F: Fn(Request<Body>) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Rep, BoxError>> + Send + 'static,
{
    fn call(&self, request: Request<Body>) -> ServiceFuture<Rep> {
        Box::pin((self)(request))
    }
}

/// Wrap an async closure as a shareable handler.
pub fn service_fn<Rep, F, Fut>(f: F) -> SharedService<Rep>
where
    F: Fn(Request<Body>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Rep, BoxError>> + Send + 'static,
    Rep: 'static,
{
    Arc::new(f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_closure_as_service() {
        let svc = service_fn(|req: Request<Body>| async move {
            Ok::<_, BoxError>(req.uri().path().to_string())
        });

        let req = Request::builder()
            .uri("/ping")
            .body(Body::empty())
            .unwrap();
        let rep = svc.call(req).await.unwrap();
        assert_eq!(rep, "/ping");
    }

    #[tokio::test]
    async fn test_service_failure_is_opaque() {
        let svc = service_fn(|_req: Request<Body>| async move {
            Err::<String, BoxError>("boom".into())
        });

        let req = Request::builder().body(Body::empty()).unwrap();
        let err = svc.call(req).await.unwrap_err();
        assert_eq!(err.to_string(), "boom");
    }
}
