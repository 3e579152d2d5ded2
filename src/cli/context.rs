//! Command execution context

use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

use crate::cli::args::Cli;
use crate::model::{Config, ExportMode};
use crate::scanner::ScanOptions;
use crate::utils::path::expand_tilde;

/// Resolved invocation state, computed once from the CLI and the config
/// file and passed down; nothing below this layer reads flags or config.
pub struct Context {
    pub dir: PathBuf,
    pub mode: ExportMode,
    pub scan_options: ScanOptions,
    pub verbose: bool,
}

impl Context {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = crate::config::load_or_default()?;
        Ok(Self::resolve(cli, &config))
    }

    /// Resolution rules: flags beat config, config beats built-in defaults.
    pub fn resolve(cli: &Cli, config: &Config) -> Self {
        let dir = match &cli.dir {
            Some(dir) => dir.clone(),
            None => expand_tilde(&config.output.default_dir),
        };
        let mode = ExportMode::resolve(cli.export_override(), &dir);
        let scan_options = ScanOptions {
            include_hidden: cli.hidden || config.scan.include_hidden,
        };
        Self {
            dir,
            mode,
            scan_options,
            verbose: cli.verbose,
        }
    }

    /// Print a warning message to stderr
    pub fn print_warning(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print an error message to stderr
    pub fn print_error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }
}
