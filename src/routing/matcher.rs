//! Route lookup.
//!
//! # Responsibilities
//! - Scan the table once, front to back
//! - Gate entries on method (wildcard, exact, HEAD → GET)
//! - Run candidate patterns and merge their parameters
//! - Accumulate handlers from every matching entry
//!
//! # Design Decisions
//! - Every match contributes, nothing short-circuits: middleware registered
//!   before a route runs before it
//! - No match is an empty result, never an error
//! - Read-only: lookups never touch the table

use crate::routing::entry::Params;
use crate::routing::method;
use crate::routing::table::RouteTable;

/// Result of a lookup.
#[derive(Debug, PartialEq, Eq)]
pub struct Match<'a, H> {
    pub params: Params,
    /// Handlers of every matching entry, in registration order.
    pub handlers: Vec<&'a H>,
}

impl<H> Match<'_, H> {
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<H> RouteTable<H> {
    /// Find every handler registered for `method` that matches `url`.
    ///
    /// `url` is a bare path; query strings are not stripped.
    pub fn find(&self, method: &str, url: &str) -> Match<'_, H> {
        let mut params = Params::new();
        let mut handlers: Vec<&H> = Vec::new();
        let mut matched = 0usize;

        for entry in self.entries() {
            if !method::accepts(entry.method(), method) {
                continue;
            }
            if !entry.pattern().bind(url, &mut params) {
                continue;
            }
            matched += 1;
            handlers.extend(entry.handlers());
        }

        tracing::trace!(
            method = %method,
            url = %url,
            entries = matched,
            handlers = handlers.len(),
            "Route lookup"
        );

        Match { params, handlers }
    }
}
