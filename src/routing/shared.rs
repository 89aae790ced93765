//! Lock-free shared route table.
//!
//! Readers take a snapshot and run `find` on it; writers publish a whole new
//! table. A snapshot stays valid (and unchanged) for as long as it is held.

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::routing::table::{RouteError, RouteTable};

/// Copy-on-write handle around a [`RouteTable`].
#[derive(Debug)]
pub struct SharedRouteTable<H> {
    current: ArcSwap<RouteTable<H>>,
}

impl<H> SharedRouteTable<H> {
    pub fn new(table: RouteTable<H>) -> Self {
        Self {
            current: ArcSwap::from_pointee(table),
        }
    }

    /// Current table. Later swaps do not affect the returned snapshot.
    pub fn snapshot(&self) -> Arc<RouteTable<H>> {
        self.current.load_full()
    }

    /// Publish `table`, returning the one it replaced.
    pub fn replace(&self, table: RouteTable<H>) -> Arc<RouteTable<H>> {
        let routes = table.len();
        let previous = self.current.swap(Arc::new(table));
        tracing::info!(
            routes,
            previous = previous.len(),
            "Route table replaced"
        );
        previous
    }
}

impl<H: Clone> SharedRouteTable<H> {
    /// Register more routes on a copy of the current table and publish it.
    ///
    /// Concurrent updates are retried against the newer table, so none is
    /// lost. If `register` fails nothing is published.
    pub fn update<F>(&self, register: F) -> Result<(), RouteError>
    where
        F: Fn(&mut RouteTable<H>) -> Result<(), RouteError>,
    {
        loop {
            let current = self.current.load_full();
            let mut next = RouteTable::clone(&current);
            register(&mut next)?;

            let previous = self.current.compare_and_swap(&current, Arc::new(next));
            if Arc::ptr_eq(&*previous, &current) {
                return Ok(());
            }
        }
    }
}

impl<H> Default for SharedRouteTable<H> {
    fn default() -> Self {
        Self::new(RouteTable::new())
    }
}
