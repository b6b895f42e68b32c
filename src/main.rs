mod app;
mod color;
mod content;
mod contribute;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use app::McmcAtlasApp;
use clap::Parser;
use data::loader::DataSource;
use eframe::egui;

/// Published catalog location. Overridable for forks and local work.
const DEFAULT_DATA_URL: &str = "https://mcmcatlas.github.io/data";

/// Desktop browser for the MCMC Atlas algorithm and package catalog.
#[derive(Parser, Debug)]
#[command(name = "mcmc-atlas", version, about)]
struct Args {
    /// Base URL the catalog documents are fetched from.
    #[arg(long, default_value = DEFAULT_DATA_URL)]
    data_url: String,

    /// Read algorithms.json and packages.json from this directory instead
    /// of fetching over HTTP.
    #[arg(long, conflicts_with = "data_url")]
    data_dir: Option<PathBuf>,
}

fn main() -> eframe::Result {
    env_logger::init();

    let args = Args::parse();
    let source = match args.data_dir {
        Some(dir) => DataSource::Local { dir },
        None => DataSource::Remote {
            base_url: args.data_url,
        },
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([700.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "MCMC Atlas – Algorithm Catalog",
        options,
        Box::new(|_cc| Ok(Box::new(McmcAtlasApp::new(source)))),
    )
}
