//! Route registration.
//!
//! # Responsibilities
//! - Compile templates and append route entries
//! - Provide `add`, `use_` and `all` (method aliases live in `method.rs`)
//! - Expose entries for introspection
//!
//! # Design Decisions
//! - Append-only: entries are never reordered or removed
//! - A failed registration leaves the table untouched
//! - Duplicate (method, template) pairs are kept; both may match

use thiserror::Error;

use crate::pattern::{self, PatternError};
use crate::routing::entry::{Pattern, RouteEntry, Template};
use crate::routing::method::WILDCARD;

/// Errors raised while registering a route.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error(transparent)]
    Pattern(#[from] PatternError),

    /// Every route needs at least one handler.
    #[error("route {template:?} registered without handlers")]
    NoHandlers { template: String },
}

/// Ordered, append-only table of routes.
#[derive(Debug, Clone)]
pub struct RouteTable<H> {
    entries: Vec<RouteEntry<H>>,
}

impl<H> Default for RouteTable<H> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<H> RouteTable<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handlers` for `method` on an exact-match template.
    pub fn add<'t, I>(
        &mut self,
        method: &str,
        template: impl Into<Template<'t>>,
        handlers: I,
    ) -> Result<&mut Self, RouteError>
    where
        I: IntoIterator<Item = H>,
    {
        self.register(method, template.into(), false, handlers)
    }

    /// Register middleware-style handlers: every method, prefix match.
    pub fn use_<'t, I>(
        &mut self,
        template: impl Into<Template<'t>>,
        handlers: I,
    ) -> Result<&mut Self, RouteError>
    where
        I: IntoIterator<Item = H>,
    {
        self.register(WILDCARD, template.into(), true, handlers)
    }

    /// Register handlers for every method on an exact-match template.
    pub fn all<'t, I>(
        &mut self,
        template: impl Into<Template<'t>>,
        handlers: I,
    ) -> Result<&mut Self, RouteError>
    where
        I: IntoIterator<Item = H>,
    {
        self.register(WILDCARD, template.into(), false, handlers)
    }

    fn register<I>(
        &mut self,
        method: &str,
        template: Template<'_>,
        loose: bool,
        handlers: I,
    ) -> Result<&mut Self, RouteError>
    where
        I: IntoIterator<Item = H>,
    {
        let (source, prefix, pattern) = match template {
            Template::Path(path) => {
                let compiled = pattern::compile(&path, loose)?;
                let prefix = pattern::static_prefix(&path);
                let pattern = Pattern::Template {
                    keys: compiled.keys,
                    regex: compiled.regex,
                };
                (path.into_owned(), Some(prefix), pattern)
            }
            Template::Regex(regex) => (regex.as_str().to_string(), None, Pattern::from_regex(regex)),
        };

        let handlers: Vec<H> = handlers.into_iter().collect();
        if handlers.is_empty() {
            return Err(RouteError::NoHandlers { template: source });
        }

        tracing::debug!(
            method = %method,
            template = %source,
            loose,
            params = pattern.keys().len(),
            handlers = handlers.len(),
            "Route registered"
        );

        self.entries.push(RouteEntry {
            method: method.to_string(),
            template: source,
            prefix,
            pattern,
            handlers,
        });
        Ok(self)
    }

    /// Entries in registration order.
    pub fn entries(&self) -> &[RouteEntry<H>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn test_add_appends_in_order() {
        let mut table = RouteTable::new();
        table
            .add("GET", "/a", [1])
            .unwrap()
            .add("POST", "/b", [2, 3])
            .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.entries()[0].method(), "GET");
        assert_eq!(table.entries()[0].template(), "/a");
        assert_eq!(table.entries()[1].handlers(), [2, 3]);
    }

    #[test]
    fn test_use_and_all_are_wildcards() {
        let mut table = RouteTable::new();
        table.use_("/api", ["mw"]).unwrap();
        table.all("/x", ["any"]).unwrap();

        assert!(table.entries().iter().all(RouteEntry::is_wildcard));
        assert_eq!(table.entries()[0].prefix(), Some("/api"));
    }

    #[test]
    fn test_duplicates_persist() {
        let mut table = RouteTable::new();
        table.add("GET", "/a", [1]).unwrap();
        table.add("GET", "/a", [2]).unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_bad_template_leaves_table_untouched() {
        let mut table = RouteTable::new();
        table.add("GET", "/ok", [1]).unwrap();

        let err = table.add("GET", "/users/:", [2]).unwrap_err();
        assert!(matches!(err, RouteError::Pattern(_)));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_no_handlers_rejected() {
        let mut table: RouteTable<u8> = RouteTable::new();
        let err = table.add("GET", "/a", []).unwrap_err();
        assert!(matches!(err, RouteError::NoHandlers { .. }));
        assert!(table.is_empty());
    }

    #[test]
    fn test_nested_handlers_flattened() {
        let mut table = RouteTable::new();
        let groups = vec![vec![1, 2], vec![], vec![3]];
        table.use_("/", groups.into_iter().flatten()).unwrap();
        assert_eq!(table.entries()[0].handlers(), [1, 2, 3]);
    }

    #[test]
    fn test_regex_entry() {
        let mut table = RouteTable::new();
        table
            .add("GET", Regex::new(r"^/(?P<slug>[a-z]+)$").unwrap(), [1])
            .unwrap();

        let entry = &table.entries()[0];
        assert_eq!(entry.template(), r"^/(?P<slug>[a-z]+)$");
        assert_eq!(entry.prefix(), None);
        assert_eq!(entry.pattern().keys(), ["slug"]);
    }
}
