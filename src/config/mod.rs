//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! route file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RouterConfig::build_table (compile routes in file order)
//!     → RouteTable<String> (handler names)
//!
//! On file change:
//!     watcher.rs detects change
//!     → loader.rs loads new config
//!     → validation.rs validates
//!     → SharedRouteTable::reload (compile, then atomic swap)
//! ```
//!
//! # Design Decisions
//! - A bad reload never replaces a working table
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_config, load_table, parse_config, ConfigError};
pub use schema::{ObservabilityConfig, RouteConfig, RouteKind, RouterConfig};
pub use watcher::ConfigWatcher;
