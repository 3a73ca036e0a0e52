//! view-router
//!
//! Inspects the editor application's route table from the command line.
//!
//! # Architecture Overview
//!
//! ```text
//!   --config / BASE_URL
//!          │
//!          ▼
//!   ┌─────────────┐    ┌──────────────┐    ┌──────────────────────┐
//!   │   config    │───▶│  validation  │───▶│       Router         │
//!   │ load + env  │    │ unique keys  │    │ path → view          │
//!   └─────────────┘    └──────────────┘    │ name → path          │
//!                                          │ history (web/memory) │
//!                                          └──────────┬───────────┘
//!                                                     │
//!                                                     ▼
//!                                          resolve / href / routes
//!                                               (JSON on stdout)
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde_json::{json, Value};

use view_router::lifecycle::startup;
use view_router::observability::logging::init_logging;
use view_router::{Router, RouterError};

#[derive(Parser)]
#[command(name = "view-router")]
#[command(about = "Resolve paths and names against the application route table", long_about = None)]
struct Cli {
    /// TOML configuration file; the built-in table is used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Base URL, overriding both the file and BASE_URL
    #[arg(short, long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve environment locations to views
    Resolve {
        #[arg(required = true)]
        locations: Vec<String>,
    },
    /// Build addresses for named routes
    Href {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// List the route table
    Routes,
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = startup::load(cli.config.as_deref())?;
    if let Some(base_url) = cli.base_url {
        config.history.base_url = base_url;
    }

    init_logging(&config.observability.log_level);
    tracing::info!("view-router v{} starting", env!("CARGO_PKG_VERSION"));

    let router = startup::build_router(&config)?;

    let (output, misses) = match cli.command {
        Commands::Resolve { locations } => run_all(&locations, |location| {
            router.resolve_location(location).map(|route| {
                json!({
                    "location": location,
                    "name": route.name,
                    "path": route.path,
                    "view": route.target,
                })
            })
        }),
        Commands::Href { names } => run_all(&names, |name| {
            router.href(name).map(|href| json!({ "name": name, "href": href }))
        }),
        Commands::Routes => (list_routes(&router), 0),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(if misses == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(2)
    })
}

fn run_all<F>(inputs: &[String], f: F) -> (Value, usize)
where
    F: Fn(&str) -> Result<Value, RouterError>,
{
    let mut misses = 0;
    let results = inputs
        .iter()
        .map(|input| match f(input) {
            Ok(value) => value,
            Err(err) => {
                misses += 1;
                json!({ "input": input, "error": err.to_string() })
            }
        })
        .collect();
    (Value::Array(results), misses)
}

fn list_routes(router: &Router) -> Value {
    Value::Array(
        router
            .routes()
            .map(|route| {
                json!({
                    "name": route.name,
                    "path": route.path,
                    "view": route.target,
                    "href": router.history().create_href(&route.path),
                })
            })
            .collect(),
    )
}
