//! recgraph: interactive driver for recgraph-core.

mod cli;
mod config;
mod demo;
mod render;
mod session;

use clap::Parser;
use recgraph_core::GraphStore;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::CliArgs;
use crate::config::AppConfig;
use crate::session::Session;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose, args.quiet);

    let mut config = AppConfig::load(args.config.as_deref())?;
    config.apply_overrides(&args);

    let graph = if config.seed_demo {
        demo::demo_graph()?
    } else {
        GraphStore::new()
    };
    info!(
        data_file = %config.data_file.display(),
        "{}",
        session::capacity_banner(&graph)
    );

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), graph, config.data_file);
    session.run()?;
    info!(
        nodes = session.graph().node_count(),
        array_len = session.array().len(),
        "session ended"
    );
    Ok(())
}

/// Uses `RUST_LOG` if set, otherwise defaults based on verbosity flags.
/// Logs go to stderr; stdout carries the menu.
fn init_logging(verbose: bool, quiet: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if quiet {
        EnvFilter::new("warn")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
