//! envout - Environment Directory Loader
//!
//! Reads a directory of files and prints one POSIX shell statement per file,
//! assigning an environment variable named after the file with the file's
//! content as value.
//!
//! # Features
//!
//! - One file per variable: filename is the name, content is the value
//! - `export NAME='...'` or plain `NAME='...'` depending on flags and
//!   directory naming (`*rc` directories default to plain assignments)
//! - Executable entries are run and their stdout becomes the value
//! - Values are single-quoted so the output survives `eval` in any
//!   POSIX-compatible shell
//!
//! Intended use:
//!
//! ```sh
//! eval "$(envout ~/.envdir)"
//! ```

pub mod cli;
pub mod config;
pub mod emitter;
pub mod error;
pub mod model;
pub mod scanner;
pub mod utils;

pub use emitter::{quote_sh, render};
pub use error::ScanError;
pub use model::{Config, EnvEntry, ExportMode, ScanResult, SkipReason};
pub use scanner::{scan_dir, ScanOptions};
