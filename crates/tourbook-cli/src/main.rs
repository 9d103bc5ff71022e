use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use tourbook_fetch::Config;

mod commands;
mod logging;

#[derive(Debug, Parser)]
#[command(name = "tourbook", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Root of the tour API (default: https://groupietrackers.herokuapp.com/api)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Load the catalogue from a directory of JSON files instead of the API
    #[arg(long, global = true)]
    from_dir: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Search artists, members, albums and concert locations at once
    ///
    /// Runs one query against every category and prints labelled
    /// suggestions, grouped as artist names, then members, then first
    /// albums, then concert locations. Matching is case-insensitive.
    ///
    /// Each (category, value, artist) combination is listed once, so a
    /// band that played the same city twice produces a single location
    /// suggestion.
    Search {
        /// Text to look for
        query: String,

        /// Maximum number of suggestions (default: suggestion_limit from config)
        #[arg(long)]
        limit: Option<usize>,

        /// Print every hit instead of truncating to the limit
        #[arg(long, conflicts_with = "limit")]
        all: bool,
    },
    /// List artists, optionally narrowed by composable filters
    Artists {
        /// Artist name contains (case-insensitive)
        #[arg(long)]
        name: Option<String>,

        /// Any member name contains (case-insensitive)
        #[arg(long)]
        member: Option<String>,

        /// First-album label contains (case-sensitive)
        #[arg(long)]
        album: Option<String>,

        /// Exact creation year
        #[arg(long)]
        year: Option<i32>,

        /// Creation year range, inclusive (e.g. 1980..1999)
        #[arg(long, value_name = "MIN..MAX")]
        founded: Option<String>,

        /// Member count range, inclusive (e.g. 1..3)
        #[arg(long, value_name = "MIN..MAX")]
        members: Option<String>,
    },
    /// Show the concerts of one artist
    Concerts {
        /// Artist id
        id: i64,

        /// Join relations on artist id instead of position
        #[arg(long)]
        by_id: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Find concerts whose location contains a query
    Locations {
        /// Location text, e.g. "japan" or "los_angeles"
        query: String,
    },
    /// Show tours grouped by location
    Tour {
        /// Artist name or member filter
        #[arg(long, default_value = "")]
        artist: String,

        /// Keep only stops at this location (raw slug or formatted)
        #[arg(long)]
        location: Option<String>,
    },
    /// Show catalogue-wide concert statistics
    Stats {
        /// Number of countries to rank (default: top_countries from config)
        #[arg(long)]
        top: Option<usize>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Simulate song recognition with a live history
    ///
    /// Picks a random artist on every tick and records it. A refresher
    /// prints the most recent recognitions once a second while the
    /// producer runs. A per-artist summary is printed at the end.
    Recognize {
        /// Number of recognitions to simulate
        #[arg(long, default_value_t = 5)]
        count: usize,

        /// Delay between recognitions in milliseconds
        #[arg(long, default_value_t = 1500)]
        interval_ms: u64,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Print the config file path
    Path,
    /// Print an example config file
    Example,
    /// Create the config file with defaults if it doesn't exist
    Init,
    /// Print one config value, or the whole file when no key is given
    Get {
        key: Option<String>,
    },
    /// Set one config value in the config file
    Set {
        key: String,
        value: String,
    },
}

impl Cli {
    /// Apply command-line overrides on top of the loaded configuration.
    fn apply_overrides(&self, config: &mut Config) {
        if let Some(base_url) = &self.base_url {
            config.api_base_url.clone_from(base_url);
        }
        if let Some(dir) = &self.from_dir {
            config.data_dir = Some(dir.clone());
        }
        if self.verbose {
            config.log_level = String::from("debug");
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load()?;
    cli.apply_overrides(&mut config);

    logging::setup(&config)?;

    match cli.command {
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show_config(&config)?,
            ConfigAction::Path => commands::config::show_path()?,
            ConfigAction::Example => commands::config::show_example()?,
            ConfigAction::Init => commands::config::init_config()?,
            ConfigAction::Get { key } => commands::config::get_config(&config, key)?,
            ConfigAction::Set { key, value } => commands::config::set_config(&key, &value)?,
        },
        Commands::Search { query, limit, all } => {
            let dataset = commands::load(&config).await?;
            let limit = if all {
                None
            } else {
                Some(limit.unwrap_or(config.suggestion_limit))
            };
            commands::search::run(&dataset, &query, limit);
        }
        Commands::Artists {
            name,
            member,
            album,
            year,
            founded,
            members,
        } => {
            let filters = commands::artists::Filters {
                name,
                member,
                album,
                year,
                founded: founded.as_deref().map(commands::artists::parse_range).transpose()?,
                members: members.as_deref().map(commands::artists::parse_range).transpose()?,
            };
            let dataset = commands::load(&config).await?;
            commands::artists::run(&dataset, &filters);
        }
        Commands::Concerts { id, by_id, json } => {
            let dataset = commands::load(&config).await?;
            commands::concerts::run(&dataset, id, by_id, json)?;
        }
        Commands::Locations { query } => {
            let dataset = commands::load(&config).await?;
            commands::locations::run(&dataset, &query);
        }
        Commands::Tour { artist, location } => {
            let dataset = commands::load(&config).await?;
            commands::tour::run(&dataset, &artist, location.as_deref());
        }
        Commands::Stats { top, json } => {
            let dataset = commands::load(&config).await?;
            commands::stats::run(&dataset, top.unwrap_or(config.top_countries), json)?;
        }
        Commands::Recognize { count, interval_ms } => {
            let dataset = commands::load(&config).await?;
            commands::recognize::run(dataset, count, interval_ms, config.history_size).await?;
        }
    }

    Ok(())
}
