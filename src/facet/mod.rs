//! Response-type conversion.
//!
//! # Responsibilities
//! - Convert a handler's response type after the handler completes
//! - Wrap a handler so the conversion is part of its calling convention
//! - Carry configuration captured at construction, nothing else
//!
//! # Design Decisions
//! - A facet is a typed conversion plus one generic "apply after downstream"
//!   combinator, not a general filter interface
//! - Conversion runs only on downstream success; failures pass through
//!   unchanged
//! - Chained facets read left to right and execute left to right

pub mod json;

use crate::service::{BoxError, Service, ServiceFuture, SharedService};
use axum::body::Body;
use axum::http::Request;
use futures_util::future::BoxFuture;
use std::future::Future;
use std::sync::Arc;

type ConvertFn<In, Out> =
    Arc<dyn Fn(In) -> BoxFuture<'static, Result<Out, BoxError>> + Send + Sync>;

/// A pure asynchronous conversion from `In` to `Out`, applied to a
/// downstream handler's successful result.
pub struct Facet<In, Out> {
    convert: ConvertFn<In, Out>,
}

impl<In, Out> Facet<In, Out>
where
    In: Send + 'static,
    Out: Send + 'static,
{
    /// A facet from an async conversion.
    pub fn new<F, Fut>(convert: F) -> Self
    where
        F: Fn(In) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Out, BoxError>> + Send + 'static,
    {
        Self {
            convert: Arc::new(move |input| Box::pin(convert(input))),
        }
    }

    /// A facet from an infallible synchronous conversion.
    pub fn of<F>(convert: F) -> Self
    where
        F: Fn(In) -> Out + Send + Sync + 'static,
    {
        Self {
            convert: Arc::new(move |input| {
                let out = convert(input);
                Box::pin(std::future::ready(Ok(out)))
            }),
        }
    }

    /// Wrap `inner` so its successful result is converted before the caller
    /// sees it. A failed inner future is returned as-is.
    pub fn wraps(&self, inner: SharedService<In>) -> SharedService<Out> {
        Arc::new(FacetService {
            inner,
            convert: self.convert.clone(),
        })
    }
}

impl<In, Out> Clone for Facet<In, Out> {
    fn clone(&self) -> Self {
        Self {
            convert: self.convert.clone(),
        }
    }
}

/// A handler with a facet's conversion applied after it.
struct FacetService<In, Out> {
    inner: SharedService<In>,
    convert: ConvertFn<In, Out>,
}

impl<In, Out> Service<Out> for FacetService<In, Out>
where
    In: Send + 'static,
    Out: Send + 'static,
{
    fn call(&self, request: Request<Body>) -> ServiceFuture<Out> {
        let inner = self.inner.clone();
        let convert = self.convert.clone();
        Box::pin(async move {
            let rep = inner.call(request).await?;
            convert(rep).await
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::service_fn;

    fn request() -> Request<Body> {
        Request::builder().uri("/").body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_conversion_after_success() {
        let facet: Facet<u32, String> = Facet::of(|n| format!("n={n}"));
        let inner = service_fn(|_req: Request<Body>| async { Ok::<_, BoxError>(7u32) });

        let rep = facet.wraps(inner).call(request()).await.unwrap();
        assert_eq!(rep, "n=7");
    }

    #[tokio::test]
    async fn test_downstream_failure_passes_through() {
        let facet: Facet<u32, String> = Facet::of(|n| format!("n={n}"));
        let inner =
            service_fn(|_req: Request<Body>| async { Err::<u32, BoxError>("downstream".into()) });

        let err = facet.wraps(inner).call(request()).await.unwrap_err();
        assert_eq!(err.to_string(), "downstream");
    }

    #[tokio::test]
    async fn test_chained_facets_run_left_to_right() {
        let first: Facet<String, String> = Facet::of(|s| format!("{s}+first"));
        let second: Facet<String, String> = Facet::of(|s| format!("{s}+second"));

        let inner =
            service_fn(|_req: Request<Body>| async { Ok::<_, BoxError>("base".to_string()) });
        let wrapped = second.wraps(first.wraps(inner));

        let rep = wrapped.call(request()).await.unwrap();
        assert_eq!(rep, "base+first+second");
    }
}
