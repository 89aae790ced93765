//! Configuration schema definitions.
//!
//! A route file declares the routes of one table, in registration order,
//! plus a few settings for the process that serves it. All types derive Serde
//! traits for deserialization from TOML.

use serde::{Deserialize, Serialize};

/// Root configuration for a route table.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RouterConfig {
    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Route definitions, registered top to bottom.
    pub routes: Vec<RouteConfig>,
}

/// Which registration call a route maps to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteKind {
    /// `add(method, path, ...)`: one method, exact match.
    #[default]
    Add,
    /// `use_(path, ...)`: every method, prefix match.
    Use,
    /// `all(path, ...)`: every method, exact match.
    All,
}

/// One route.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteConfig {
    #[serde(default)]
    pub kind: RouteKind,

    /// Method token. Required for `add`, must be absent otherwise.
    #[serde(default)]
    pub method: Option<String>,

    /// Path template, or regex source when `regex` is set.
    pub path: String,

    /// Treat `path` as a native regular expression.
    #[serde(default)]
    pub regex: bool,

    /// Handler names, in call order.
    #[serde(default)]
    pub handlers: Vec<String>,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
