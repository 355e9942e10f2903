use clap::{Parser, Subcommand};
use std::str::FromStr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use helpdesk_search::config::Config;
use helpdesk_search::error::AppError;
use helpdesk_search::search::{field_names, EntityKind, SearchService};
use helpdesk_search::store::FsReader;

#[derive(Parser)]
#[command(name = "helpdesk-search")]
#[command(about = "Search help desk users, organizations, and tickets", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the searchable fields for an entity kind
    ListFields {
        /// Entity kind: users, organizations, or tickets
        #[arg(value_name = "KIND")]
        kind: String,
    },

    /// Search one field of an entity kind for a value
    Search {
        /// Entity kind: users, organizations, or tickets
        #[arg(short, long)]
        kind: String,

        /// Field to match against
        #[arg(short, long)]
        field: String,

        /// Value to search for
        #[arg(short, long)]
        value: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration first so logging can honor it
    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {}", e);
        eprintln!("Using default configuration");
        Config::default()
    });

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("helpdesk_search={}", config.observability.log_level).into()
    });
    if config.observability.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    let cli = Cli::parse();

    match cli.command {
        Commands::ListFields { kind } => {
            let kind = parse_kind(&kind)?;
            println!("{}", serde_json::to_string_pretty(&field_names(kind))?);
        }

        Commands::Search { kind, field, value } => {
            let kind = parse_kind(&kind)?;
            let service = SearchService::initialize(kind, &FsReader, &config).await?;
            let results = service.search(&field, &value).await?;

            tracing::info!(hits = results.len(), "Search complete");
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
    }

    Ok(())
}

fn parse_kind(kind: &str) -> Result<EntityKind, AppError> {
    EntityKind::from_str(kind).map_err(|_| {
        AppError::Schema(format!(
            "unknown entity kind {:?} (expected users, organizations, or tickets)",
            kind
        ))
    })
}
