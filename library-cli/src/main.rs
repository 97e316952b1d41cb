use std::{fs::OpenOptions, io, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use library_cli::{Menu, load_catalog_file};
use library_engine::{JsonLinesObserver, LibraryEngine, TracingObserver};
use tracing_subscriber::EnvFilter;

/// Command-line arguments for the library menu
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log every engine operation at debug level
    #[arg(short, long)]
    verbose: bool,

    /// Disable coloured output
    #[arg(long)]
    no_color: bool,

    /// Seed the catalog from a JSON file before the menu starts
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Append every engine event as a JSON line to this file
    #[arg(long, value_name = "FILE")]
    event_log: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);
    if args.no_color {
        colored::control::set_override(false);
    }
    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "starting library menu");

    let mut engine = LibraryEngine::new();
    engine.register_observer(Box::new(TracingObserver));
    if let Some(path) = &args.event_log {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open event log {}", path.display()))?;
        engine.register_observer(Box::new(JsonLinesObserver::new(file)));
    }
    if let Some(path) = &args.catalog {
        load_catalog_file(&mut engine, path)?;
    }

    let mut menu = Menu::new(io::stdin().lock(), io::stdout().lock());
    menu.run(&mut engine).context("menu I/O failed")?;
    Ok(())
}

/// Logs go to stderr so they never mix with the menu on stdout. `RUST_LOG`
/// takes precedence over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        format!("{}=debug,library_engine=debug", env!("CARGO_CRATE_NAME"))
    } else {
        "warn".to_string()
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}
