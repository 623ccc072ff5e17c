#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use katadeck_core::ContentSource;

/// Global content source, set from command line
static CONTENT_SOURCE: OnceLock<ContentSource> = OnceLock::new();

/// Global data directory, set from command line
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Get the content source (set from command line or default)
pub fn content_source() -> ContentSource {
    CONTENT_SOURCE
        .get()
        .cloned()
        .unwrap_or_else(|| ContentSource::dir("content"))
}

/// Get the data directory (set from command line or default)
pub fn get_data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("katadeck")
    })
}

/// Katadeck - coding challenge deck browser
#[derive(Parser, Debug)]
#[command(name = "katadeck-desktop")]
#[command(about = "Katadeck - browse a deck of markdown coding challenges")]
struct Args {
    /// Local content directory holding challenges.json and the markdown files
    #[arg(short, long)]
    content_dir: Option<PathBuf>,

    /// Fetch content over HTTP from this base URL instead of a local directory
    #[arg(short, long, conflicts_with = "content_dir")]
    base_url: Option<String>,

    /// Data directory for preference storage (use different dirs for multiple instances)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let source = if let Some(url) = args.base_url {
        ContentSource::http(url)
    } else {
        let dir = args.content_dir.unwrap_or_else(|| PathBuf::from("content"));
        ContentSource::dir(dir)
    };
    let _ = CONTENT_SOURCE.set(source);

    let data_dir = args.data_dir.unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("katadeck")
    });
    let _ = DATA_DIR.set(data_dir.clone());

    tracing::info!("Starting katadeck with data dir: {:?}", data_dir);

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Katadeck")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 800.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
