//! Ordered HTTP route table.
//!
//! Register handlers against method + path patterns, then look up every
//! handler that applies to a request, in registration order, together with
//! the parameters captured from the path.
//!
//! ```
//! use trouter::RouteTable;
//!
//! let mut routes = RouteTable::new();
//! routes
//!     .use_("/", ["log"])?
//!     .get("/users/:id", ["load_user", "show_user"])?;
//!
//! let found = routes.find("HEAD", "/users/42");
//! assert_eq!(found.handlers, [&"log", &"load_user", &"show_user"]);
//! assert_eq!(found.params["id"], "42");
//! # Ok::<(), trouter::RouteError>(())
//! ```

pub mod config;
pub mod observability;
pub mod pattern;
pub mod routing;

pub use config::RouterConfig;
pub use routing::{Match, Params, RouteError, RouteTable, SharedRouteTable, Template};
