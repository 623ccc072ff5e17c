//! Katadeck CLI
//!
//! Thin wrapper around katadeck-core functions for command-line usage.
//!
//! ## Usage
//!
//! ```bash
//! # List the challenges in a deck
//! katadeck --content-dir ./content list
//!
//! # Print a challenge's markdown source
//! katadeck --content-dir ./content show two-sum
//!
//! # Print a challenge rendered to HTML
//! katadeck --content-dir ./content render two-sum
//!
//! # Print the deck overview document rendered to HTML
//! katadeck --content-dir ./content overview
//!
//! # Read or set the persisted theme preference
//! katadeck theme get
//! katadeck theme set dark
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use katadeck_core::{ChallengeLibrary, ContentSource, PreferenceStore, Theme};

/// Katadeck - challenge deck browser
#[derive(Parser)]
#[command(name = "katadeck")]
#[command(version = "0.1.0")]
#[command(about = "Katadeck - browse a deck of markdown coding challenges")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Local content directory holding challenges.json (default: ./content)
    #[arg(short, long, global = true)]
    content_dir: Option<PathBuf>,

    /// Fetch content over HTTP from this base URL instead of a local directory
    #[arg(short, long, global = true, conflicts_with = "content_dir")]
    base_url: Option<String>,

    /// Data directory for preference storage (default: platform data dir)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List challenges with their link slugs
    List,

    /// Print a challenge's markdown source
    Show {
        /// Challenge slug (as shown by `list`)
        slug: String,
    },

    /// Print a challenge rendered to HTML
    Render {
        /// Challenge slug (as shown by `list`)
        slug: String,
    },

    /// Print the deck overview document rendered to HTML
    Overview,

    /// Theme preference management
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
}

#[derive(Subcommand)]
enum ThemeAction {
    /// Show the stored theme preference
    Get,
    /// Persist a theme preference
    Set {
        /// Theme name: light or dark
        theme: String,
    },
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

/// Get the default data directory (platform data dir + "katadeck")
fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("katadeck")
}

/// Build the content source from the shared CLI flags
fn content_source(content_dir: Option<PathBuf>, base_url: Option<String>) -> ContentSource {
    match base_url {
        Some(url) => ContentSource::http(url),
        None => ContentSource::dir(content_dir.unwrap_or_else(|| PathBuf::from("content"))),
    }
}

/// Parse a theme name
fn parse_theme(s: &str) -> Result<Theme> {
    Theme::parse(&s.to_lowercase())
        .ok_or_else(|| anyhow::anyhow!("Invalid theme '{}'. Must be one of: light, dark", s))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let data_dir = cli.data_dir.unwrap_or_else(default_data_dir);
    let source = content_source(cli.content_dir, cli.base_url);

    match cli.command {
        Commands::List => {
            let library = ChallengeLibrary::open(source).await?;

            println!("Challenges ({}):", library.entries().len());
            for challenge in library.entries() {
                println!("  {}", challenge.name);
                println!("    slug: {}", challenge.slug());
                println!("    file: {}", challenge.file);
            }
        }

        Commands::Show { slug } => {
            let library = ChallengeLibrary::open(source).await?;
            let challenge = library
                .resolve(&slug)
                .ok_or_else(|| anyhow::anyhow!("No challenge matches slug '{}'", slug))?;
            let markdown = library.raw(&challenge.file).await?;
            print!("{}", markdown);
        }

        Commands::Render { slug } => {
            let library = ChallengeLibrary::open(source).await?;
            let html = library.content_for_slug(&slug).await?;
            print!("{}", html);
        }

        Commands::Overview => {
            let library = ChallengeLibrary::open(source).await?;
            let html = library.default_document().await?;
            print!("{}", html);
        }

        Commands::Theme { action } => {
            let prefs = PreferenceStore::open(data_dir.join("prefs.redb"))?;
            match action {
                ThemeAction::Get => match prefs.theme()? {
                    Some(theme) => println!("{}", theme),
                    None => println!("No theme preference recorded."),
                },
                ThemeAction::Set { theme } => {
                    let theme = parse_theme(&theme)?;
                    prefs.set_theme(theme)?;
                    println!("Theme set to {}.", theme);
                }
            }
        }
    }

    Ok(())
}
