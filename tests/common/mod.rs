//! Shared utilities for integration tests.

use std::io::Write;

use tempfile::NamedTempFile;
use trouter::Match;

/// Handler labels of a match, in order.
#[allow(dead_code)]
pub fn labels(found: &Match<'_, &'static str>) -> Vec<&'static str> {
    found.handlers.iter().map(|h| **h).collect()
}

/// Handler names of a match built from a route file.
#[allow(dead_code)]
pub fn names(found: &Match<'_, String>) -> Vec<String> {
    found.handlers.iter().map(|h| h.to_string()).collect()
}

/// Write a route file to a temporary path.
#[allow(dead_code)]
pub fn route_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("create temp route file");
    file.write_all(contents.as_bytes())
        .expect("write temp route file");
    file.flush().expect("flush temp route file");
    file
}
