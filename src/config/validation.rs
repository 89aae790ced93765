//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check each route has a path and at least one handler
//! - Check the method is present exactly when the route kind needs one
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouterConfig → Result<(), Vec<ValidationError>>
//! - Pattern syntax is checked later, when the table is built

use thiserror::Error;

use crate::config::schema::{RouteConfig, RouteKind, RouterConfig};

/// A single semantic problem in a route file. `route` is the 0-based index.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("route #{route}: path is empty")]
    EmptyPath { route: usize },

    #[error("route #{route} ({path}): no handlers")]
    NoHandlers { route: usize, path: String },

    #[error("route #{route} ({path}): `add` routes need a method")]
    MissingMethod { route: usize, path: String },

    #[error("route #{route} ({path}): `{kind:?}` routes match every method, drop `method`")]
    UnexpectedMethod {
        route: usize,
        path: String,
        kind: RouteKind,
    },
}

/// Validate a parsed configuration.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let errors: Vec<ValidationError> = config
        .routes
        .iter()
        .enumerate()
        .flat_map(|(i, route)| validate_route(i, route))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_route(route: usize, config: &RouteConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let path = config.path.clone();

    if config.path.is_empty() {
        errors.push(ValidationError::EmptyPath { route });
    }
    if config.handlers.is_empty() {
        errors.push(ValidationError::NoHandlers {
            route,
            path: path.clone(),
        });
    }

    let has_method = config.method.as_deref().is_some_and(|m| !m.is_empty());
    match config.kind {
        RouteKind::Add if !has_method => {
            errors.push(ValidationError::MissingMethod { route, path });
        }
        RouteKind::Use | RouteKind::All if config.method.is_some() => {
            errors.push(ValidationError::UnexpectedMethod {
                route,
                path,
                kind: config.kind,
            });
        }
        _ => {}
    }

    errors
}
