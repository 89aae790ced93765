//! Route files: loading, compiling, swapping tables and following edits.

mod common;

use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use common::{names, route_file};
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::{timeout, timeout_at, Instant};
use trouter::config::{load_table, ConfigError, ConfigWatcher};
use trouter::{RouterConfig, SharedRouteTable};

const ROUTES: &str = r#"
[observability]
log_level = "debug"

[[routes]]
kind = "use"
path = "/"
handlers = ["request_log"]

[[routes]]
kind = "use"
path = "/api/:version"
handlers = ["auth"]

[[routes]]
method = "GET"
path = "/api/:version/users/:id"
handlers = ["load_user", "show_user"]

[[routes]]
method = "PUT"
path = "/api/:version/users/:id/books/:title?"
handlers = ["save_book"]

[[routes]]
kind = "all"
path = "/health"
handlers = ["health"]
"#;

#[test]
fn test_load_table_from_file() {
    let file = route_file(ROUTES);
    let (config, table) = load_table(file.path()).unwrap();

    assert_eq!(config.observability.log_level, "debug");
    assert_eq!(table.len(), 5);

    let found = table.find("HEAD", "/api/v2/users/7");
    assert_eq!(
        names(&found),
        ["request_log", "auth", "load_user", "show_user"]
    );
    assert_eq!(found.params["version"], "v2");
    assert_eq!(found.params["id"], "7");

    let found = table.find("PUT", "/api/v1/users/7/books");
    assert_eq!(names(&found), ["request_log", "auth", "save_book"]);
    assert!(!found.params.contains_key("title"));

    let found = table.find("OPTIONS", "/health");
    assert_eq!(names(&found), ["request_log", "health"]);
}

#[test]
fn test_missing_file() {
    let err = load_table(Path::new("/definitely/not/here.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_invalid_file_reports_all_problems() {
    let file = route_file(
        r#"
        [[routes]]
        path = "/a"
        handlers = []

        [[routes]]
        kind = "all"
        method = "GET"
        path = "/b"
        handlers = ["b"]
        "#,
    );

    match load_table(file.path()) {
        Err(ConfigError::Validation(errors)) => assert_eq!(errors.len(), 3),
        other => panic!("expected validation errors, got {:?}", other.map(|(c, _)| c)),
    }
}

#[test]
fn test_bad_template_in_file() {
    let file = route_file(
        r#"
        [[routes]]
        method = "GET"
        path = "/users/:"
        handlers = ["u"]
        "#,
    );

    let err = load_table(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Route(_)));
}

#[test]
fn test_reload_keeps_old_snapshots() {
    let file = route_file(ROUTES);
    let (_, table) = load_table(file.path()).unwrap();
    let shared = Arc::new(SharedRouteTable::new(table));

    let before = shared.snapshot();

    let next = trouter::config::parse_config(
        r#"
        [[routes]]
        method = "GET"
        path = "/health"
        handlers = ["new_health"]
        "#,
    )
    .unwrap();
    let routes = shared.reload(&next).unwrap();
    assert_eq!(routes, 1);

    assert_eq!(names(&shared.snapshot().find("GET", "/health")), ["new_health"]);
    assert_eq!(names(&before.find("GET", "/health")), ["request_log", "health"]);
}

const RELOAD_BUDGET: Duration = Duration::from_secs(5);
const QUIET_PERIOD: Duration = Duration::from_millis(750);

fn watched_routes(handler: &str) -> String {
    format!(
        "[[routes]]\nmethod = \"GET\"\npath = \"/watched\"\nhandlers = [\"{}\"]\n",
        handler
    )
}

/// Write a sibling file and rename it over `path`.
fn replace_atomically(path: &Path, contents: &str) {
    let staged = path.with_extension("toml.tmp");
    fs::write(&staged, contents).unwrap();
    fs::rename(&staged, path).unwrap();
}

fn first_handler(config: &RouterConfig) -> Option<&str> {
    config.routes.first()?.handlers.first().map(String::as_str)
}

/// Receive until a config with `expected` as its first handler shows up.
/// Earlier configs from the same edit are skipped.
async fn wait_for_reload(updates: &mut UnboundedReceiver<RouterConfig>, expected: &str) {
    let deadline = Instant::now() + RELOAD_BUDGET;
    loop {
        let config = timeout_at(deadline, updates.recv())
            .await
            .unwrap_or_else(|_| panic!("no reload with handler {:?}", expected))
            .expect("watcher channel closed");
        if first_handler(&config) == Some(expected) {
            return;
        }
    }
}

#[tokio::test]
async fn test_watcher_follows_file_replacements() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("routes.toml");
    fs::write(&path, watched_routes("initial")).unwrap();

    let (watcher, mut updates) = ConfigWatcher::new(&path);
    let _guard = watcher.run().unwrap();

    fs::write(&path, watched_routes("in_place")).unwrap();
    wait_for_reload(&mut updates, "in_place").await;

    replace_atomically(&path, &watched_routes("renamed"));
    wait_for_reload(&mut updates, "renamed").await;

    // A route file that fails validation is never sent.
    replace_atomically(
        &path,
        "[[routes]]\npath = \"/watched\"\nhandlers = [\"no_method\"]\n",
    );
    let quiet = timeout(QUIET_PERIOD, async {
        while let Some(config) = updates.recv().await {
            assert_eq!(first_handler(&config), Some("renamed"));
        }
    })
    .await;
    assert!(quiet.is_err(), "watcher channel closed");

    // The watch survived both renames.
    fs::write(&path, watched_routes("after_reject")).unwrap();
    wait_for_reload(&mut updates, "after_reject").await;
}

#[tokio::test]
async fn test_watcher_ignores_sibling_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("routes.toml");
    fs::write(&path, watched_routes("initial")).unwrap();

    let (watcher, mut updates) = ConfigWatcher::new(&path);
    let _guard = watcher.run().unwrap();

    fs::write(dir.path().join("other.toml"), watched_routes("other")).unwrap();
    let quiet = timeout(QUIET_PERIOD, updates.recv()).await;
    assert!(quiet.is_err(), "unexpected reload: {:?}", quiet.ok().flatten().map(|c| c.routes));
}
