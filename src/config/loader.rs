//! Configuration loading from disk and route table construction.

use std::fs;
use std::path::Path;

use regex::Regex;
use thiserror::Error;

use crate::config::schema::{RouteKind, RouterConfig};
use crate::config::validation::{validate_config, ValidationError};
use crate::pattern::PatternError;
use crate::routing::{RouteError, RouteTable, Template};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),

    #[error("Route error: {0}")]
    Route(#[from] RouteError),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<RouterConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<RouterConfig, ConfigError> {
    let config: RouterConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Load a route file and compile it in one step.
pub fn load_table(path: &Path) -> Result<(RouterConfig, RouteTable<String>), ConfigError> {
    let config = load_config(path)?;
    let table = config.build_table()?;
    tracing::info!(path = ?path, routes = table.len(), "Route table loaded");
    Ok((config, table))
}

impl RouterConfig {
    /// Compile the configured routes, in order, into a table of handler names.
    pub fn build_table(&self) -> Result<RouteTable<String>, RouteError> {
        let mut table = RouteTable::new();

        for route in &self.routes {
            let template = if route.regex {
                let regex = Regex::new(&route.path).map_err(|source| PatternError::Regex {
                    template: route.path.clone(),
                    source,
                })?;
                Template::Regex(regex)
            } else {
                Template::from(route.path.as_str())
            };
            let handlers = route.handlers.iter().cloned();

            match route.kind {
                RouteKind::Add => {
                    let method = route.method.as_deref().unwrap_or_default();
                    table.add(method, template, handlers)?;
                }
                RouteKind::Use => {
                    table.use_(template, handlers)?;
                }
                RouteKind::All => {
                    table.all(template, handlers)?;
                }
            }
        }

        Ok(table)
    }
}
