#![allow(non_snake_case)]

mod app;
mod camera;
mod components;
mod context;
mod desktop;
mod drag_bridge;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Global data directory, set from command line
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Get the data directory (set from command line or default)
pub fn get_data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(default_data_dir)
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("linkdeck")
}

/// LinkDeck - local-first link organizer
#[derive(Parser, Debug)]
#[command(name = "linkdeck-desktop")]
#[command(about = "LinkDeck - save, scan, and share links")]
struct Args {
    /// Data directory for the library file
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    linkdeck_core::logging::init(args.verbose.max(1));

    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);
    let _ = DATA_DIR.set(data_dir.clone());

    tracing::info!("Starting LinkDeck with data dir: {:?}", data_dir);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("LinkDeck")
            .with_inner_size(dioxus::desktop::LogicalSize::new(960.0, 780.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
