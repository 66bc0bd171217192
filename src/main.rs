#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod scroll_lock;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::anyhow;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use multiverse_core::AppConfig;

use crate::context::AppServices;

/// Global services, built from command line before launch
static SERVICES: OnceLock<AppServices> = OnceLock::new();

/// Get the application services (built from command line or defaults)
pub fn get_services() -> AppServices {
    SERVICES
        .get()
        .cloned()
        .unwrap_or_else(|| AppServices::from_config(&AppConfig::default()))
}

/// Multiverse Explorer - Rick and Morty character cards
#[derive(Parser, Debug)]
#[command(name = "multiverse-desktop")]
#[command(about = "Multiverse Explorer - browse Rick and Morty characters")]
struct Args {
    /// Data directory for the session flag
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Instance name (creates data dir: multiverse-<name>)
    #[arg(short, long)]
    name: Option<String>,

    /// Character endpoint to fetch from
    #[arg(short, long)]
    endpoint: Option<String>,
}

fn main() -> anyhow::Result<()> {
    multiverse_core::logging::init("info");

    let args = Args::parse();
    let config = AppConfig::resolve(args.data_dir, args.name, args.endpoint);

    tracing::info!(
        data_dir = ?config.data_dir,
        endpoint = %config.endpoint,
        "Starting Multiverse Explorer"
    );

    SERVICES
        .set(AppServices::from_config(&config))
        .map_err(|_| anyhow!("services initialised twice"))?;

    let window_width = 1200.0;
    let window_height = 900.0;

    let desktop_config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(config.window_title())
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(desktop_config)
        .launch(app::App);

    Ok(())
}
