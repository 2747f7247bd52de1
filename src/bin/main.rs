//! promptchart CLI - Resolve chart requests against a dataset catalog
//!
//! Usage:
//!   promptchart serve [--host <host>] [--port <port>]
//!   promptchart datasets
//!   promptchart render <intent.json>
//!   promptchart ask <prompt>
//!
//! Examples:
//!   promptchart ask "monthly revenue as a line chart"
//!   promptchart render intents/sales_by_region.json
//!   promptchart --catalog data/catalog.json serve --port 8080

use clap::{Parser, Subcommand};
use promptchart::catalog::{DatasetCatalog, InMemoryCatalog};
use promptchart::config::Settings;
use promptchart::intent::{IntentSource, OpenAiIntentSource, StaticIntentSource};
use promptchart::model::{ChartIntent, ChartResponse};
use promptchart::resolver::IntentResolver;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "promptchart")]
#[command(about = "promptchart - Turn chart requests into chart-ready data")]
#[command(version)]
struct Cli {
    /// Path to a promptchart.toml (default search order otherwise)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Path to a JSON dataset catalog (overrides the config file)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API
    #[cfg(feature = "server")]
    Serve {
        /// Address to bind (overrides the config file)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides the config file)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// List datasets with their metric and dimension fields
    Datasets,

    /// Resolve a structured intent file and print the response
    Render {
        /// Path to the intent JSON file
        file: PathBuf,
    },

    /// Resolve a natural-language prompt through the configured model
    Ask {
        /// The chart request
        prompt: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::from_file(path),
        None => Settings::load(),
    };
    let settings = match settings {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    promptchart::logging::init(&settings.logging);

    let catalog = match load_catalog(cli.catalog, &settings) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Catalog error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        #[cfg(feature = "server")]
        Commands::Serve { host, port } => cmd_serve(settings, catalog, host, port).await,
        Commands::Datasets => cmd_datasets(catalog.as_ref()),
        Commands::Render { file } => cmd_render(file, catalog),
        Commands::Ask { prompt } => cmd_ask(prompt, settings, catalog).await,
    }
}

fn load_catalog(
    cli_path: Option<PathBuf>,
    settings: &Settings,
) -> Result<Arc<dyn DatasetCatalog>, Box<dyn std::error::Error>> {
    let path = match cli_path {
        Some(p) => Some(p),
        None => settings.catalog.resolved_path()?,
    };

    let catalog = match path {
        Some(p) => InMemoryCatalog::from_file(&p)?,
        None => InMemoryCatalog::sample()?,
    };
    Ok(Arc::new(catalog))
}

fn intent_source(settings: &Settings) -> Result<Arc<dyn IntentSource>, ExitCode> {
    match settings.llm.to_openai_config() {
        Ok(config) => Ok(Arc::new(OpenAiIntentSource::new(config))),
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            Err(ExitCode::FAILURE)
        }
    }
}

fn print_response(response: &ChartResponse) -> ExitCode {
    match serde_json::to_string_pretty(response) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error serializing response: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(feature = "server")]
async fn cmd_serve(
    mut settings: Settings,
    catalog: Arc<dyn DatasetCatalog>,
    host: Option<String>,
    port: Option<u16>,
) -> ExitCode {
    use promptchart::web::{serve, AppState};

    if let Some(host) = host {
        settings.server.host = host;
    }
    if let Some(port) = port {
        settings.server.port = port;
    }

    let source = match intent_source(&settings) {
        Ok(s) => s,
        Err(code) => return code,
    };
    let state = Arc::new(AppState::new(IntentResolver::new(source, catalog)));

    match serve(&settings.server, state).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Server error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn cmd_datasets(catalog: &dyn DatasetCatalog) -> ExitCode {
    let summaries = catalog.summaries();
    if summaries.is_empty() {
        println!("No datasets found.");
        return ExitCode::SUCCESS;
    }

    println!("Datasets:");
    for summary in summaries {
        println!("  {}", summary.name);
        println!("    metrics:    {}", summary.metrics.join(", "));
        println!("    dimensions: {}", summary.dimensions.join(", "));
    }
    ExitCode::SUCCESS
}

fn cmd_render(file: PathBuf, catalog: Arc<dyn DatasetCatalog>) -> ExitCode {
    let source = match fs::read_to_string(&file) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error reading file '{}': {}", file.display(), e);
            return ExitCode::FAILURE;
        }
    };

    let intent: ChartIntent = match serde_json::from_str(&source) {
        Ok(i) => i,
        Err(e) => {
            eprintln!("Error parsing intent '{}': {}", file.display(), e);
            return ExitCode::FAILURE;
        }
    };

    // Structured intents never reach the model.
    let resolver = IntentResolver::new(StaticIntentSource::new(intent.clone()), catalog);

    match resolver.resolve_intent(intent) {
        Ok(response) => print_response(&response),
        Err(e) => {
            eprintln!("Resolution error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn cmd_ask(prompt: String, settings: Settings, catalog: Arc<dyn DatasetCatalog>) -> ExitCode {
    let source = match intent_source(&settings) {
        Ok(s) => s,
        Err(code) => return code,
    };
    let resolver = IntentResolver::new(source, catalog);

    match resolver.resolve(&prompt).await {
        Ok(response) => print_response(&response),
        Err(e) => {
            eprintln!("Resolution error: {}", e);
            ExitCode::FAILURE
        }
    }
}
