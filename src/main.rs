//! Route table CLI.
//!
//! Loads a TOML route file and answers lookups against it.
//!
//! ```text
//! trouter --config routes.toml find GET /users/42
//! trouter --config routes.toml routes
//! echo "GET /users/42" | trouter --config routes.toml watch
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};

use trouter::config::{self, watcher, ConfigWatcher};
use trouter::observability::logging;
use trouter::{RouteTable, SharedRouteTable};

#[derive(Parser)]
#[command(name = "trouter")]
#[command(about = "Look up handlers in an ordered HTTP route table", long_about = None)]
struct Cli {
    /// Route file (TOML)
    #[arg(short, long, default_value = "routes.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print params and handlers for one request
    Find { method: String, url: String },
    /// List the registered routes in lookup order
    Routes,
    /// Answer "METHOD URL" lines from stdin, reloading the file on change
    Watch,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let route_config = config::load_config(&cli.config)?;
    logging::init(&route_config.observability)?;
    let table = route_config.build_table()?;

    tracing::debug!(
        path = ?cli.config,
        routes = table.len(),
        "Route table loaded"
    );

    match cli.command {
        Commands::Find { method, url } => {
            print_match(&table, &method, &url)?;
        }
        Commands::Routes => {
            for (i, entry) in table.entries().iter().enumerate() {
                let method = if entry.is_wildcard() { "*" } else { entry.method() };
                println!(
                    "{:>3}  {:<8} {:<32} prefix={:<16} handlers={}",
                    i,
                    method,
                    entry.template(),
                    entry.prefix().unwrap_or("-"),
                    entry.handlers().join(",")
                );
            }
        }
        Commands::Watch => {
            let shared = Arc::new(SharedRouteTable::new(table));

            let (route_watcher, updates) = ConfigWatcher::new(&cli.config);
            let _watch_guard = route_watcher.run()?;
            tokio::spawn(watcher::apply_updates(Arc::clone(&shared), updates));

            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            while let Some(line) = lines.next_line().await? {
                let mut parts = line.split_whitespace();
                let (Some(method), Some(url)) = (parts.next(), parts.next()) else {
                    if !line.trim().is_empty() {
                        eprintln!("expected \"METHOD URL\", got {:?}", line);
                    }
                    continue;
                };
                print_match(&shared.snapshot(), method, url)?;
            }
        }
    }

    Ok(())
}

fn print_match(
    table: &RouteTable<String>,
    method: &str,
    url: &str,
) -> Result<(), serde_json::Error> {
    let found = table.find(method, url);
    let out = serde_json::json!({
        "params": found.params,
        "handlers": found.handlers,
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
