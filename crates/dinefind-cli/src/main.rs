mod browse;
mod list;
mod notify;
mod render;

use clap::{CommandFactory, Parser, Subcommand};
use dinefind_core::CityFilter;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "dinefind")]
#[command(about = "Discover restaurants by city from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the supported cities and their coordinates
    Cities,
    /// Fetch listings once and print a single page
    List {
        /// City to search around, or "All" for the default catalog
        #[arg(long, default_value = "All")]
        city: CityFilter,
        /// Case-insensitive name filter
        #[arg(long)]
        query: Option<String>,
        /// 1-based page number (clamped to the available pages)
        #[arg(long, default_value_t = 1)]
        page: usize,
        /// Emit the page as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Interactive session: switch cities, search, and page through results
    Browse {
        /// City to start with, or "All" for the default catalog
        #[arg(long, default_value = "All")]
        city: CityFilter,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = dinefind_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(env = %config.env, "configuration loaded");

    match cli.command {
        Some(Commands::Cities) => print!("{}", render::render_cities()),
        Some(Commands::List {
            city,
            query,
            page,
            json,
        }) => {
            list::run_list(&config, city, query.as_deref().unwrap_or_default(), page, json).await?;
        }
        Some(Commands::Browse { city }) => browse::run_browse(&config, city).await?,
        None => Cli::command().print_help()?,
    }

    Ok(())
}

#[cfg(test)]
mod tests;
