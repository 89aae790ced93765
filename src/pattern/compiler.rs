//! Route template compiler.
//!
//! # Responsibilities
//! - Turn a template like `/users/:id/books/:title?` into a regex
//! - Record the parameter names in capture-group order
//! - Derive the static prefix of a template
//!
//! # Template Grammar
//! - `*` → key `wild`, matches the rest of the path
//! - `:name` → required segment
//! - `:name?` → optional segment
//! - `:name.ext` / `:name?.ext` → segment followed by a literal suffix
//! - anything else → literal segment
//!
//! Strict patterns must consume the whole path. Loose patterns only need to
//! stop on a segment boundary, which makes them behave like mount prefixes.

use regex::{Regex, RegexBuilder};
use thiserror::Error;

/// Key bound to the `*` wildcard segment.
pub const WILDCARD_KEY: &str = "wild";

/// Errors raised while compiling a route template.
#[derive(Debug, Error)]
pub enum PatternError {
    /// A `:` segment without a name, e.g. `/users/:`.
    #[error("empty parameter name in segment {segment:?} of {template:?}")]
    EmptyParam { template: String, segment: String },

    /// The generated regex was rejected by the regex engine.
    #[error("invalid route pattern {template:?}: {source}")]
    Regex {
        template: String,
        #[source]
        source: regex::Error,
    },
}

/// Output of [`compile`]: the parameter names and the regex that captures them.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    /// Parameter names, in capture-group order.
    pub keys: Vec<String>,
    pub regex: Regex,
}

/// Compile a route template.
///
/// `loose` allows trailing path segments after the template (mount-style).
pub fn compile(template: &str, loose: bool) -> Result<CompiledPattern, PatternError> {
    let mut keys = Vec::new();
    let mut source = String::from("^");

    let mut segments = template.split('/');
    if template.starts_with('/') {
        segments.next();
    }

    // An empty segment ends the template, so "/a//b" and "/a/" both stop at "a".
    for segment in segments.take_while(|s| !s.is_empty()) {
        if segment.starts_with('*') {
            keys.push(WILDCARD_KEY.to_string());
            source.push_str("/(.*)");
        } else if let Some(rest) = segment.strip_prefix(':') {
            let optional = rest.find('?');
            let suffix = rest.find('.');

            let name_end = optional.or(suffix).unwrap_or(rest.len());
            let name = &rest[..name_end];
            if name.is_empty() {
                return Err(PatternError::EmptyParam {
                    template: template.to_string(),
                    segment: segment.to_string(),
                });
            }
            keys.push(name.to_string());

            match (optional, suffix) {
                (Some(_), None) => source.push_str("(?:/([^/]+?))?"),
                _ => source.push_str("/([^/]+?)"),
            }
            if let Some(at) = suffix {
                if optional.is_some() {
                    source.push('?');
                }
                source.push_str(&regex::escape(&rest[at..]));
            }
        } else {
            source.push('/');
            source.push_str(&regex::escape(segment));
        }
    }

    if loose {
        source.push_str("(?:$|/)");
    } else if keys.is_empty() && source.len() == 1 {
        source.push_str("/$");
    } else {
        source.push('$');
    }

    let regex = RegexBuilder::new(&source)
        .case_insensitive(true)
        .build()
        .map_err(|source| PatternError::Regex {
            template: template.to_string(),
            source,
        })?;

    Ok(CompiledPattern { keys, regex })
}

/// Static part of a template before its first `:` or `*`.
///
/// Always starts with `/` and never ends with one (except the root itself).
pub fn static_prefix(template: &str) -> String {
    let body = template.strip_prefix('/').unwrap_or(template);
    let head = match body.find([':', '*']) {
        Some(at) => &body[..at],
        None => body,
    };
    let head = head.strip_suffix('/').unwrap_or(head);
    format!("/{}", head)
}
