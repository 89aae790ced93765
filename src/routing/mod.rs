//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Registration (setup phase):
//!     add / use_ / all / get / post / ...
//!     → table.rs (compile template, append RouteEntry)
//!
//! Lookup (per request):
//!     (method, path)
//!     → matcher.rs (linear scan, method gate, pattern test)
//!     → Match { params, handlers }
//!
//! Live updates:
//!     new RouteTable
//!     → shared.rs (atomic swap, readers keep their snapshot)
//! ```
//!
//! # Design Decisions
//! - Registration order is lookup order and handler order
//! - All matches accumulate; there is no "first match wins"
//! - HEAD falls back to GET; an empty method matches everything
//! - Deterministic: same table and input always give the same result

pub mod entry;
pub mod matcher;
pub mod method;
pub mod shared;
pub mod table;

pub use entry::{Params, Pattern, RouteEntry, Template};
pub use matcher::Match;
pub use shared::SharedRouteTable;
pub use table::{RouteError, RouteTable};
