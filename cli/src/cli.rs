//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

/// Interactive record graph: build, flatten, sort, inspect, save, load.
#[derive(Parser, Debug)]
#[command(name = "recgraph", author, version, about, long_about = None)]
pub struct CliArgs {
    /// Path to a TOML configuration file.
    #[arg(short, long, env = "RECGRAPH_CONFIG")]
    pub config: Option<PathBuf>,

    /// File used by the save and load menu options.
    #[arg(long, env = "RECGRAPH_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// Start with an empty graph instead of the demo records.
    #[arg(long)]
    pub no_seed: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Only log warnings and errors.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}
