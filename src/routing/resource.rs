//! Composable resources.
//!
//! # Responsibilities
//! - Wrap one route table under a diagnostic name
//! - Compose resources: ordered union, per-key transformation, facet wrap
//! - Keep composition pure; operands are consumed, never mutated
//!
//! # Design Decisions
//! - `or_else` is first-match-wins: the left operand shadows the right on
//!   overlapping keys
//! - `and_then` rebuilds the table key-for-key, so the domain of definition
//!   never changes under transformation
//! - `after_that` is plain sugar over `and_then`; no separate machinery

use crate::facet::Facet;
use crate::routing::path::RouteKey;
use crate::routing::route::Route;
use crate::service::{Service, SharedService};
use axum::http::Method;
use std::sync::Arc;

/// A named, composable wrapper around one route table.
pub struct Resource<Rep> {
    name: String,
    route: Route<Rep>,
}

impl<Rep> Resource<Rep> {
    /// An empty resource; add entries with [`at`](Self::at).
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            route: Route::empty(),
        }
    }

    /// Define a handler at `(method, path)`. Later entries never shadow
    /// earlier ones.
    pub fn at<S>(self, method: Method, path: &str, service: S) -> Self
    where
        S: Service<Rep> + 'static,
    {
        self.at_shared(method, path, Arc::new(service))
    }

    /// `at` for an already-shared handler.
    pub fn at_shared(self, method: Method, path: &str, service: SharedService<Rep>) -> Self {
        let mut entries = self.route.into_entries();
        entries.push((RouteKey::new(method, path), service));
        Self {
            name: self.name,
            route: Route::from_entries(entries),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn route(&self) -> &Route<Rep> {
        &self.route
    }

    /// Ordered union. The result is defined wherever either operand is;
    /// where both are, `self` wins and `other` is never consulted.
    pub fn or_else(self, other: Resource<Rep>) -> Resource<Rep> {
        let name = format!("{}|{}", self.name, other.name);
        tracing::debug!(resource = %name, "composing union");
        let mut entries = self.route.into_entries();
        entries.extend(other.route.into_entries());
        Resource {
            name,
            route: Route::from_entries(entries),
        }
    }

    /// Transform every handler, keeping the domain of definition intact.
    /// This is the general hook; facet application is a special case.
    pub fn and_then<A, F>(self, transform: F) -> Resource<A>
    where
        F: Fn(SharedService<Rep>) -> SharedService<A>,
    {
        let entries = self
            .route
            .into_entries()
            .into_iter()
            .map(|(key, service)| (key, transform(service)))
            .collect();
        Resource {
            name: self.name,
            route: Route::from_entries(entries),
        }
    }

    /// Convert every handler's response through `facet`, after the handler
    /// completes. Chained applications run left to right: in
    /// `r.after_that(f1).after_that(f2)`, `f1` sees the handler's output and
    /// `f2` sees `f1`'s.
    pub fn after_that<Out>(self, facet: Facet<Rep, Out>) -> Resource<Out>
    where
        Rep: Send + 'static,
        Out: Send + 'static,
    {
        self.and_then(move |service| facet.wraps(service))
    }
}

impl<Rep> Clone for Resource<Rep> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            route: self.route.clone(),
        }
    }
}

impl<Rep> std::fmt::Debug for Resource<Rep> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resource")
            .field("name", &self.name)
            .field("route", &self.route)
            .finish()
    }
}
