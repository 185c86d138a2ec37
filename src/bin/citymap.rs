//! CLI entry point for the `citymap` interactive road-map editor.

use std::io;
use std::process;

use clap::Parser;

use citymap::cli::Menu;
use citymap::graph::CityMap;

#[derive(Parser)]
#[command(
    name = "citymap",
    version,
    about = "Interactive editor for a map of intersections and roads"
)]
struct Cli {
    /// Treat roads as one-way (default: two-way)
    #[arg(long)]
    directed: bool,

    /// Output format for map display and queries: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    log::debug!(
        "starting session (directed: {}, format: {})",
        cli.directed,
        cli.format
    );

    let stdin = io::stdin();
    let mut menu = Menu::new(
        CityMap::new(cli.directed),
        stdin.lock(),
        io::stdout().lock(),
        json,
    );

    if let Err(e) = menu.run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
