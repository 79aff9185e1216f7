mod advice;
mod config;
mod dashboard;
mod import;
mod input;
mod metrics;
mod models;
mod run;
mod store;
mod ui;

use anyhow::{Context, Result};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use config::Config;
use dashboard::Dashboard;
use run::Options;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let opts = Options::parse(&args)?;

    init_logging(&opts)?;

    let mut config = Config::load(opts.config.as_deref())?;
    opts.apply_overrides(&mut config.budget);

    let seed = if opts.empty {
        Vec::new()
    } else if let Some(ref path) = opts.file {
        import::CsvImporter::from_path(path)?
    } else {
        import::sample_transactions()?
    };

    let dashboard = Dashboard::new(seed, config);

    match opts.command.as_deref() {
        None => run::as_tui(dashboard),
        Some(cmd) => run::as_cli(cmd, &dashboard),
    }
}

/// Priority: RUST_LOG env var > --verbose flag > default.
/// The TUI owns the terminal, so it logs to a file instead of stderr.
fn init_logging(opts: &Options) -> Result<()> {
    let default_level = if opts.is_tui() { "info" } else { "warn" };
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if opts.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new(default_level)
    };

    if opts.is_tui() {
        let path = get_log_path()?;
        let file = File::create(&path)
            .with_context(|| format!("Failed to create log file: {}", path.display()))?;
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .compact()
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    Ok(())
}

fn get_log_path() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "budgetdash", "BudgetDash")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
    Ok(data_dir.join("budgetdash.log"))
}
