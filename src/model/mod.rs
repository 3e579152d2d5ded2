//! Data model: scanned entries, skip reporting, export mode, configuration

mod config;
mod entry;
mod export;

pub use config::{Config, OutputConfig, ScanConfig};
pub use entry::{EnvEntry, ScanResult, ScanSkip, Severity, SkipReason};
pub use export::ExportMode;
