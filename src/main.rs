// src/main.rs

//! feedwatch CLI
//!
//! One-shot feed scanner meant to be run from cron or a similar trigger.
//! Prints the match report to stdout only when there is something to report.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use feedwatch::{
    config::Config,
    error::{AppError, Result},
    feed::HttpFetcher,
    pipeline,
    store::LinkStore,
};

/// feedwatch - report new feed items matching configured patterns
#[derive(Parser, Debug)]
#[command(name = "feedwatch", version, about = "Watches feeds for pattern matches")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "feedwatch.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scan all configured feeds and print new matches
    Scan {
        /// Override the seen-link store path from the config
        #[arg(long)]
        store: Option<PathBuf>,
    },

    /// Validate the configuration file
    Validate,

    /// Show seen-link store info
    Info {
        /// Override the seen-link store path from the config
        #[arg(long)]
        store: Option<PathBuf>,
    },
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if !cli.config.exists() {
        return Err(AppError::config(format!(
            "{} doesn't exist. Create it.",
            cli.config.display()
        )));
    }
    let config = Config::load(&cli.config)?;

    match cli.command {
        Command::Scan { store } => {
            config.validate()?;
            let store_path = store.unwrap_or_else(|| config.store.path.clone());

            let fetcher = HttpFetcher::new(&config.fetch)?;
            let report = pipeline::run_scan(&config, &store_path, &fetcher).await?;

            if !report.is_empty() {
                print!("{report}");
            }
        }

        Command::Validate => {
            config.validate()?;
            log::info!("Configuration OK: {} watch(es)", config.watches.len());
            println!("OK");
        }

        Command::Info { store } => {
            let store_path = store.unwrap_or_else(|| config.store.path.clone());
            let store = LinkStore::load(&store_path)?;
            println!("Store: {}", store_path.display());
            println!("Live links: {}", store.len());
            if store.skipped() > 0 {
                println!("Malformed lines skipped: {}", store.skipped());
            }
        }
    }

    Ok(())
}
