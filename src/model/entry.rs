//! Entry data structures for scanned environment directories

use std::io;
use std::path::PathBuf;

/// One validated, fully read entry: a variable name and its value.
///
/// `name` is guaranteed by the scanner to be a legal environment variable
/// identifier. `value` is the file content (or program output) with at most
/// one trailing newline removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvEntry {
    pub name: String,
    pub value: String,
}

impl EnvEntry {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Result of scanning one environment directory.
///
/// Per-entry failures are collected here instead of aborting the scan, so one
/// bad file never blocks the rest of the directory.
#[derive(Debug, Default)]
pub struct ScanResult {
    pub entries: Vec<EnvEntry>,
    pub skips: Vec<ScanSkip>,
}

impl ScanResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_entry(&mut self, entry: EnvEntry) {
        self.entries.push(entry);
    }

    pub fn add_skip(&mut self, skip: ScanSkip) {
        self.skips.push(skip);
    }

    /// True if any skip should force a nonzero exit status.
    pub fn has_failures(&self) -> bool {
        self.skips
            .iter()
            .any(|s| s.reason.severity() == Severity::Failure)
    }
}

/// Skip severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Ignored without comment unless verbose output is requested.
    Silent,
    /// Tolerated: warn on stderr, exit status unaffected.
    Soft,
    /// Reported and marks the whole run as failed.
    Failure,
}

/// Why an entry was skipped
#[derive(Debug)]
pub enum SkipReason {
    /// Hidden (dotfile) entry, and hidden entries were not requested.
    Hidden,
    /// Not a regular file: subdirectory, socket, device node, ...
    NotRegular,
    /// Filename is not a legal environment variable identifier.
    InvalidName,
    /// The file could not be read.
    Unreadable(io::Error),
    /// Content (or program output) was not valid UTF-8.
    NotUtf8,
    /// An executable entry could not be run, or exited nonzero.
    Program(String),
}

impl SkipReason {
    /// Stray files with odd names (editor swap files and the like) are
    /// tolerated; anything that should have produced a value but didn't
    /// marks the run as failed.
    pub fn severity(&self) -> Severity {
        match self {
            SkipReason::Hidden | SkipReason::NotRegular => Severity::Silent,
            SkipReason::InvalidName => Severity::Soft,
            SkipReason::Unreadable(_) | SkipReason::NotUtf8 | SkipReason::Program(_) => {
                Severity::Failure
            }
        }
    }
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::Hidden => write!(f, "hidden entry"),
            SkipReason::NotRegular => write!(f, "not a regular file"),
            SkipReason::InvalidName => write!(f, "not a valid variable name"),
            SkipReason::Unreadable(err) => write!(f, "unreadable: {}", err),
            SkipReason::NotUtf8 => write!(f, "content is not valid UTF-8"),
            SkipReason::Program(msg) => write!(f, "program failed: {}", msg),
        }
    }
}

/// A skipped entry with its reason, for stderr reporting
#[derive(Debug)]
pub struct ScanSkip {
    pub path: PathBuf,
    pub reason: SkipReason,
}

impl ScanSkip {
    pub fn new(path: impl Into<PathBuf>, reason: SkipReason) -> Self {
        Self {
            path: path.into(),
            reason,
        }
    }
}
