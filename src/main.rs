use clap::Parser;
use log::{error, warn};
use roster::SortColumn;
use roster::core::catalog::load_catalog;
use roster::core::config::{self, CliOverrides, RosterConfig};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "roster", about = "Pick a team of heroes and see which perks it unlocks")]
struct Args {
    /// Hero catalog file (TOML, or JSON with a .json extension)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Column to sort by on startup
    #[arg(short, long, value_enum)]
    sort: Option<SortColumn>,

    /// Start with a descending sort
    #[arg(short, long)]
    descending: bool,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to roster.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("roster.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("Roster starting up");

    let file_config = config::load_config().unwrap_or_else(|e| {
        warn!("{}, using defaults", e);
        RosterConfig::default()
    });
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            catalog: args.catalog,
            sort: args.sort,
            descending: args.descending,
        },
    );
    log::info!(
        "Sort: {} {}, catalog: {}",
        resolved.sort.column,
        resolved.sort.indicator(),
        resolved
            .catalog_path
            .as_deref()
            .map_or_else(|| "built-in".to_string(), |p| p.display().to_string())
    );

    let catalog = match load_catalog(resolved.catalog_path.as_deref()) {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("Failed to load catalog: {}", e);
            eprintln!("roster: {e}");
            return Err(std::io::Error::other(e));
        }
    };

    roster::tui::run(resolved, Arc::new(catalog))
}
