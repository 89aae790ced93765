//! Path-pattern compilation subsystem.
//!
//! # Data Flow
//! ```text
//! Route template ("/users/:id/books/:title?")
//!     → compiler.rs (split segments, collect keys, emit regex source)
//!     → CompiledPattern { keys, regex }
//!     → stored on a route entry, executed by the matcher
//!
//! Native regex (regex::Regex)
//!     → stored as-is, named groups become parameter names
//! ```
//!
//! # Design Decisions
//! - Compiled once at registration, never at lookup
//! - Case-insensitive matching on the path
//! - Literal segments are escaped; only `:param` and `*` are special

pub mod compiler;

pub use compiler::{compile, static_prefix, CompiledPattern, PatternError};
