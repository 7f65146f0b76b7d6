//! HTTP routing combinator library.
//!
//! # Architecture Overview
//!
//! ```text
//!   Api ── holds one ──▶ Resource ── owns one ──▶ Route
//!    │                      │                       │
//!    │ loopback / expose    │ or_else / and_then    │ lookup (first match)
//!    ▼                      │ after_that            ▼
//!  dispatch: compute key ───┴──────────────▶ SharedService ──▶ future Rep
//!                                                 ▲
//!                                    Facet::wraps converts Rep after
//!                                    the downstream completes
//! ```
//!
//! A [`Route`](routing::Route) is a partial mapping from (method, path) to a
//! handler; a [`Resource`](routing::Resource) composes routes with ordered,
//! first-match-wins union; a [`Facet`](facet::Facet) converts a handler's
//! response type after it completes; an [`Api`](api::Api) turns a resource
//! into a runnable endpoint, in-process or over a bound socket.

pub mod api;
pub mod config;
pub mod facet;
pub mod routing;
pub mod service;

pub use api::{Api, DispatchError};
pub use config::ServerConfig;
pub use facet::Facet;
pub use routing::{Path, Resource, Route, RouteKey};
pub use service::{service_fn, BoxError, Service, SharedService};
