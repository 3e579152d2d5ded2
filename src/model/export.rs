//! Export mode and its resolution rules

use std::path::Path;

/// Whether emitted assignments are exported to subprocesses or stay
/// shell-local.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportMode {
    /// `export NAME='value'`
    Export,
    /// `NAME='value'`
    Local,
}

impl ExportMode {
    /// Resolve the effective mode for one invocation.
    ///
    /// An explicit `--export` / `--no-export` flag wins. Otherwise the
    /// directory's final path component decides: a name ending in `rc`
    /// (`.envdir.rc`, `promptrc`, ...) selects plain assignments, matching
    /// the shell-rc naming convention; everything else exports.
    pub fn resolve(flag_override: Option<ExportMode>, dir: &Path) -> Self {
        if let Some(mode) = flag_override {
            return mode;
        }
        match dir.file_name().and_then(|n| n.to_str()) {
            Some(name) if name.ends_with("rc") => ExportMode::Local,
            _ => ExportMode::Export,
        }
    }
}
