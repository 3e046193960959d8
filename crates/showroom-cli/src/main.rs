mod commands;
mod render;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "showroom")]
#[command(about = "Dealership catalog with enriched images, articles and AI descriptions")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Load and enrich the catalog, then print every card
    Catalog {
        /// Print `{catalog, warnings}` as JSON instead of cards
        #[arg(long)]
        json: bool,
    },
    /// Open detail views: gallery, specs, AI description and article
    Detail {
        /// Catalog item ids, e.g. `brio-rs`
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Print the wa.me chat link for an item
    Contact {
        /// Catalog item id
        id: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = showroom_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Catalog { json }) => commands::run_catalog(&config, json).await?,
        Some(Commands::Detail { ids }) => commands::run_detail(&config, &ids).await?,
        Some(Commands::Contact { id }) => commands::run_contact(&config, &id)?,
        None => commands::run_catalog(&config, false).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests;
