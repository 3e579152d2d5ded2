//! Environment directory scanning
//!
//! Walks the direct children of one directory and turns each eligible
//! regular file into an [`EnvEntry`]. Per-entry problems are collected as
//! skips; only directory-level problems abort the scan.

use lazy_static::lazy_static;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::process::Command;

use crate::error::ScanError;
use crate::model::{EnvEntry, ScanResult, ScanSkip, SkipReason};

lazy_static! {
    /// Legal environment variable identifier: letters, digits, underscore,
    /// not starting with a digit.
    static ref IDENT_RE: Regex = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap();
}

/// Scan options
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanOptions {
    /// Include hidden (dotfile) entries. Off by default: dotfiles in an
    /// environment directory are almost always editor or tooling droppings.
    pub include_hidden: bool,
}

/// True if `name` is usable as an environment variable name.
pub fn is_valid_name(name: &str) -> bool {
    IDENT_RE.is_match(name)
}

/// Scan `dir` and return its entries, sorted by name, plus any skips.
///
/// Subdirectories and other non-regular files (symlinks are followed first)
/// and hidden entries (unless `include_hidden` is set) are recorded as
/// silent skips. Entries whose name is not a valid identifier are skipped
/// with a warning. Read and program failures are skipped too, but mark the
/// run as failed. How loudly each skip is reported is the caller's call,
/// via [`SkipReason::severity`].
pub fn scan_dir(dir: &Path, options: ScanOptions) -> Result<ScanResult, ScanError> {
    let meta = fs::metadata(dir).map_err(|e| ScanError::from_io(dir, e))?;
    if !meta.is_dir() {
        return Err(ScanError::NotADirectory(dir.to_path_buf()));
    }

    let mut names: Vec<std::ffi::OsString> = Vec::new();
    let read_dir = fs::read_dir(dir).map_err(|e| ScanError::from_io(dir, e))?;
    for dir_entry in read_dir {
        let dir_entry = dir_entry.map_err(|e| ScanError::from_io(dir, e))?;
        names.push(dir_entry.file_name());
    }
    names.sort();

    let mut result = ScanResult::new();
    for os_name in names {
        let path = dir.join(&os_name);

        // Hidden entries are decided on before anything else, including
        // name validation, so a stray dotfile never draws a warning
        if os_name.as_encoded_bytes().starts_with(b".") && !options.include_hidden {
            result.add_skip(ScanSkip::new(path, SkipReason::Hidden));
            continue;
        }

        let name = match os_name.to_str() {
            Some(name) => name,
            None => {
                // Non-UTF-8 filename can never be a valid identifier
                result.add_skip(ScanSkip::new(path, SkipReason::InvalidName));
                continue;
            }
        };

        // Follows symlinks, so a symlink to a regular file counts
        let meta = match fs::metadata(&path) {
            Ok(meta) => meta,
            Err(err) => {
                result.add_skip(ScanSkip::new(path, SkipReason::Unreadable(err)));
                continue;
            }
        };
        if !meta.is_file() {
            result.add_skip(ScanSkip::new(path, SkipReason::NotRegular));
            continue;
        }

        if !is_valid_name(name) {
            result.add_skip(ScanSkip::new(path, SkipReason::InvalidName));
            continue;
        }

        match read_value(&path, &meta) {
            Ok(value) => result.add_entry(EnvEntry::new(name, value)),
            Err(reason) => result.add_skip(ScanSkip::new(path, reason)),
        }
    }

    Ok(result)
}

/// Read the value for one entry: run it if executable, read it otherwise.
/// Either way, one trailing newline is stripped.
fn read_value(path: &Path, meta: &fs::Metadata) -> Result<String, SkipReason> {
    let bytes = if is_executable(meta) {
        run_program(path)?
    } else {
        fs::read(path).map_err(SkipReason::Unreadable)?
    };
    let value = String::from_utf8(bytes).map_err(|_| SkipReason::NotUtf8)?;
    Ok(strip_trailing_newline(value))
}

/// Run an executable entry with the current environment and capture stdout.
/// Its stderr is inherited so diagnostics still reach the user.
fn run_program(path: &Path) -> Result<Vec<u8>, SkipReason> {
    let output = Command::new(path)
        .stderr(std::process::Stdio::inherit())
        .output()
        .map_err(|err| SkipReason::Program(err.to_string()))?;
    if !output.status.success() {
        return Err(SkipReason::Program(output.status.to_string()));
    }
    Ok(output.stdout)
}

#[cfg(unix)]
fn is_executable(meta: &fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    meta.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
fn is_executable(_meta: &fs::Metadata) -> bool {
    false
}

/// Strip exactly one trailing newline (`\n` or `\r\n`), if present.
fn strip_trailing_newline(mut value: String) -> String {
    if value.ends_with('\n') {
        value.pop();
        if value.ends_with('\r') {
            value.pop();
        }
    }
    value
}
