//! Route lookup.
//!
//! # Responsibilities
//! - Store the compiled route table
//! - Look up the handler for a key
//! - Report membership separately from lookup
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - Ordered O(n) scan; first match wins on overlapping keys
//! - Lookup returns an `Option` rather than panicking on a miss, so an
//!   unchecked-apply misuse cannot exist; only the dispatch layer turns a
//!   miss into an error

use crate::routing::path::RouteKey;
use crate::service::SharedService;

/// A partial mapping from route keys to handlers.
pub struct Route<Rep> {
    entries: Vec<(RouteKey, SharedService<Rep>)>,
}

impl<Rep> Route<Rep> {
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub(crate) fn from_entries(entries: Vec<(RouteKey, SharedService<Rep>)>) -> Self {
        Self { entries }
    }

    pub(crate) fn into_entries(self) -> Vec<(RouteKey, SharedService<Rep>)> {
        self.entries
    }

    /// The handler for `key`, if the route is defined there. With
    /// overlapping definitions the earliest entry wins.
    pub fn lookup(&self, key: &RouteKey) -> Option<&SharedService<Rep>> {
        self.entries
            .iter()
            .find(|(entry_key, _)| entry_key == key)
            .map(|(_, service)| service)
    }

    /// Whether the route is defined at `key`.
    pub fn is_defined_at(&self, key: &RouteKey) -> bool {
        self.entries.iter().any(|(entry_key, _)| entry_key == key)
    }

    /// The keys this route is defined at, in match order.
    pub fn keys(&self) -> impl Iterator<Item = &RouteKey> {
        self.entries.iter().map(|(key, _)| key)
    }
}

impl<Rep> Clone for Route<Rep> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<Rep> std::fmt::Debug for Route<Rep> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.keys()).finish()
    }
}
