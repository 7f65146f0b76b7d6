//! Route key types.
//!
//! # Responsibilities
//! - Represent a URL path as an immutable segment sequence
//! - Pair a path with an HTTP method to form a lookup key
//! - Derive the key from an incoming request
//!
//! # Design Decisions
//! - Structural equality on segments (case-sensitive, like the HTTP path)
//! - Empty segments collapse, so `/a/b/` and `/a/b` are the same path
//! - No pattern syntax; keys are exact

use axum::http::{Method, Request};
use std::fmt;

/// An immutable sequence of path segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<String>,
}

impl Path {
    /// Parse a raw URL path into segments. Query strings are not expected
    /// here; callers pass `uri.path()`.
    pub fn parse(raw: &str) -> Self {
        let segments = raw
            .split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
            .collect();
        Self { segments }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return write!(f, "/");
        }
        for segment in &self.segments {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}

impl From<&str> for Path {
    fn from(raw: &str) -> Self {
        Path::parse(raw)
    }
}

/// The lookup key for a route table: HTTP method plus path.
///
/// No uniqueness is enforced; overlapping definitions are resolved by
/// composition order at lookup time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteKey {
    pub method: Method,
    pub path: Path,
}

impl RouteKey {
    pub fn new(method: Method, path: impl Into<Path>) -> Self {
        Self {
            method,
            path: path.into(),
        }
    }

    /// Compute the key for an incoming request.
    pub fn of<B>(request: &Request<B>) -> Self {
        Self {
            method: request.method().clone(),
            path: Path::parse(request.uri().path()),
        }
    }
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}
