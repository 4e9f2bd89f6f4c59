//! Configuration for the recgraph driver.
//!
//! # Loading Priority
//!
//! 1. `--config <path>` flag, or the `RECGRAPH_CONFIG` env var
//! 2. Built-in defaults
//!
//! Command-line flags are applied on top by [`AppConfig::apply_overrides`].

use std::path::{Path, PathBuf};

use anyhow::Context;
use recgraph_core::DEFAULT_FILE_NAME;
use serde::{Deserialize, Serialize};

use crate::cli::CliArgs;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Path used by save and load.
    pub data_file: PathBuf,

    /// Preload the demo graph at startup.
    pub seed_demo: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_FILE_NAME),
            seed_demo: true,
        }
    }
}

impl AppConfig {
    /// Load from `path` if given, else defaults. A named file must exist.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::from_toml_str(&text)
            .with_context(|| format!("parsing config file {}", path.display()))
    }

    pub fn from_toml_str(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn apply_overrides(&mut self, args: &CliArgs) {
        if let Some(path) = &args.data_file {
            self.data_file = path.clone();
        }
        if args.no_seed {
            self.seed_demo = false;
        }
    }
}
