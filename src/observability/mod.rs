//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! routing / config produce:
//!     → tracing events (registration, lookup, reload)
//!
//! Consumers:
//!     → logging.rs subscriber (stderr)
//! ```
//!
//! # Design Decisions
//! - Library code only emits events; the binary installs the subscriber
//! - Lookup events are trace level so they cost nothing when filtered out

pub mod logging;
