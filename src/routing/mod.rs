//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (method, path)
//!     → path.rs (compute RouteKey)
//!     → route.rs (ordered table lookup)
//!     → Return: matched handler or None
//!
//! Table Construction (at composition time):
//!     Resource builders + combinators (or_else / and_then / after_that)
//!     → Concatenate entries in composition order
//!     → Freeze as immutable Route
//! ```
//!
//! # Design Decisions
//! - Tables built at composition time, immutable at dispatch time
//! - Exact (method, path) keys, no pattern syntax
//! - Deterministic: same key always matches same entry
//! - First match wins (ordered by composition)

pub mod path;
pub mod resource;
pub mod route;

pub use path::{Path, RouteKey};
pub use resource::Resource;
pub use route::Route;
