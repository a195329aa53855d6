//! route-compiler command line tool.
//!
//! ```text
//! routes.toml ──▶ config::load_table ──▶ RouteTable::flat_routes
//!                                                │
//!                                      FlatRouteCompiler
//!                                     ┌──────────┴──────────┐
//!                                     ▼                     ▼
//!                              ListingCompiler      RequestLineCompiler
//!                                     │                     │
//!                               `list` output      `match` per request line
//! ```

use std::io::BufRead;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use route_compiler::config::load_table;
use route_compiler::routing::{
    FlatRouteCompiler, ListingCompiler, Match, RequestLine, RequestLineCompiler, RequestMatcher,
};

#[derive(Parser)]
#[command(name = "route-compiler")]
#[command(about = "Compile a route table and resolve request lines against it", long_about = None)]
struct Cli {
    /// Route table file (TOML)
    #[arg(short, long, default_value = "routes.toml")]
    routes: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every resolved route
    List {
        /// Print the listing as JSON
        #[arg(long)]
        json: bool,
    },
    /// Resolve request lines against the compiled routes
    Match {
        /// Request method, e.g. GET
        #[arg(required_unless_present = "stdin", requires = "path")]
        method: Option<String>,

        /// Request path, e.g. /users/1337
        path: Option<String>,

        /// Read one "<METHOD> <PATH>" request line per line of stdin
        #[arg(long, conflicts_with = "method")]
        stdin: bool,
    },
}

#[derive(Serialize)]
struct Resolved<'a> {
    request: &'a RequestLine,
    #[serde(flatten)]
    matched: Match<String>,
}

fn init_tracing(default_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("route_compiler={}", default_level.to_ascii_lowercase()).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let table = load_table(&cli.routes);
    init_tracing(
        table
            .as_ref()
            .map(|table| table.observability.log_level.as_str())
            .unwrap_or("info"),
    );
    let table = table.inspect_err(|e| {
        tracing::error!(path = %cli.routes.display(), error = %e, "Failed to load route table");
    })?;

    tracing::info!(
        path = %cli.routes.display(),
        routes = table.routes.len(),
        missing = %table.missing,
        "Route table loaded"
    );

    let routes = table.flat_routes()?;

    match cli.command {
        Commands::List { json } => {
            let listing = FlatRouteCompiler::new(ListingCompiler).root(table.missing.clone(), routes)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&listing)?);
            } else {
                for route in &listing.routes {
                    println!("{}", route);
                }
                println!("* -> {}", listing.missing);
            }
        }
        Commands::Match { method, path, stdin } => {
            let matcher =
                FlatRouteCompiler::new(RequestLineCompiler).root(table.missing.clone(), routes)?;
            match (method, path) {
                (Some(method), Some(path)) if !stdin => {
                    print_match(&matcher, &RequestLine::new(method, path))?;
                }
                _ => {
                    for line in std::io::stdin().lock().lines() {
                        let line = line?;
                        if line.trim().is_empty() {
                            continue;
                        }
                        match line.parse::<RequestLine>() {
                            Ok(request) => print_match(&matcher, &request)?,
                            Err(e) => tracing::warn!(error = %e, "Skipping request line"),
                        }
                    }
                }
            }
        }
    }

    Ok(())
}

fn print_match(
    matcher: &RequestMatcher<String>,
    request: &RequestLine,
) -> Result<(), Box<dyn std::error::Error>> {
    let resolved = Resolved {
        request,
        matched: matcher.matches(request),
    };
    println!("{}", serde_json::to_string(&resolved)?);
    Ok(())
}
