//! Route entries and their patterns.
//!
//! # Responsibilities
//! - Hold one registered (method, pattern, handlers) tuple
//! - Test a path against the entry's pattern
//! - Merge captured parameters into a shared map
//!
//! # Design Decisions
//! - Pattern is a tagged variant: compiled template vs. native regex
//! - Entries are immutable once built
//! - Parameters merge with last-writer-wins; a group that did not take part
//!   in the match clears the name

use std::borrow::Cow;
use std::collections::HashMap;

use regex::Regex;

/// Parameters extracted from a path.
pub type Params = HashMap<String, String>;

/// What a route is registered against: a path template or a native regex.
#[derive(Debug, Clone)]
pub enum Template<'a> {
    Path(Cow<'a, str>),
    Regex(Regex),
}

impl<'a> From<&'a str> for Template<'a> {
    fn from(path: &'a str) -> Self {
        Template::Path(Cow::Borrowed(path))
    }
}

impl From<String> for Template<'_> {
    fn from(path: String) -> Self {
        Template::Path(Cow::Owned(path))
    }
}

impl<'a> From<&'a String> for Template<'a> {
    fn from(path: &'a String) -> Self {
        Template::Path(Cow::Borrowed(path.as_str()))
    }
}

impl From<Regex> for Template<'_> {
    fn from(regex: Regex) -> Self {
        Template::Regex(regex)
    }
}

/// Matchable part of a route entry.
#[derive(Debug, Clone)]
pub enum Pattern {
    /// Compiled path template; `keys` map to capture groups 1..=n.
    Template { keys: Vec<String>, regex: Regex },
    /// Native regex; `named` lists its named groups (possibly none).
    Regex { regex: Regex, named: Vec<String> },
}

impl Pattern {
    /// Wrap a native regex, collecting its named capture groups.
    pub fn from_regex(regex: Regex) -> Self {
        let named = regex
            .capture_names()
            .flatten()
            .map(str::to_string)
            .collect();
        Pattern::Regex { regex, named }
    }

    pub fn regex(&self) -> &Regex {
        match self {
            Pattern::Template { regex, .. } | Pattern::Regex { regex, .. } => regex,
        }
    }

    /// Parameter names this pattern can bind.
    pub fn keys(&self) -> &[String] {
        match self {
            Pattern::Template { keys, .. } => keys,
            Pattern::Regex { named, .. } => named,
        }
    }

    /// Test `url`, binding captured parameters into `params` on success.
    ///
    /// Nothing is written when the pattern does not match.
    pub(crate) fn bind(&self, url: &str, params: &mut Params) -> bool {
        match self {
            Pattern::Template { keys, regex } if !keys.is_empty() => {
                let Some(caps) = regex.captures(url) else {
                    return false;
                };
                for (i, key) in keys.iter().enumerate() {
                    assign(params, key, caps.get(i + 1));
                }
                true
            }
            Pattern::Regex { regex, named } if !named.is_empty() => {
                let Some(caps) = regex.captures(url) else {
                    return false;
                };
                for name in named {
                    assign(params, name, caps.name(name));
                }
                true
            }
            _ => self.regex().is_match(url),
        }
    }
}

fn assign(params: &mut Params, key: &str, value: Option<regex::Match<'_>>) {
    match value {
        Some(m) => {
            params.insert(key.to_string(), m.as_str().to_string());
        }
        None => {
            params.remove(key);
        }
    }
}

/// One registered route.
#[derive(Debug, Clone)]
pub struct RouteEntry<H> {
    pub(crate) method: String,
    pub(crate) template: String,
    pub(crate) prefix: Option<String>,
    pub(crate) pattern: Pattern,
    pub(crate) handlers: Vec<H>,
}

impl<H> RouteEntry<H> {
    /// Method token; empty for entries that accept every method.
    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn is_wildcard(&self) -> bool {
        self.method.is_empty()
    }

    /// Source the entry was compiled from (template text or regex source).
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Static prefix of a path template. `None` for regex entries.
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn handlers(&self) -> &[H] {
        &self.handlers
    }
}
