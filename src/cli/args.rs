//! CLI argument definitions using Clap

use clap::Parser;
use std::path::PathBuf;

use crate::model::ExportMode;

#[derive(Parser)]
#[command(name = "envout")]
#[command(about = "Emit shell variable assignments from a directory of files")]
#[command(
    long_about = "For each regular file in DIR, print a shell statement that sets an \
environment variable named after the file, with the file content as value. \
Executable entries are run and their output is used instead. Intended use:\n\n    \
eval \"$(envout [DIR])\""
)]
#[command(version)]
pub struct Cli {
    /// Environment directory [default: ~/.envdir]
    pub dir: Option<PathBuf>,

    /// Emit `export NAME=...` statements, even for *rc directories
    #[arg(long, conflicts_with = "no_export")]
    pub export: bool,

    /// Emit plain `NAME=...` assignments
    #[arg(long)]
    pub no_export: bool,

    /// Include hidden (dotfile) entries
    #[arg(long)]
    pub hidden: bool,

    /// Also report entries that are ignored silently (hidden files,
    /// subdirectories) on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// The explicit export-mode override, if either flag was given.
    pub fn export_override(&self) -> Option<ExportMode> {
        if self.export {
            Some(ExportMode::Export)
        } else if self.no_export {
            Some(ExportMode::Local)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parses() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_export_override() {
        let cli = Cli::parse_from(["envout", "--export"]);
        assert_eq!(cli.export_override(), Some(ExportMode::Export));

        let cli = Cli::parse_from(["envout", "--no-export"]);
        assert_eq!(cli.export_override(), Some(ExportMode::Local));

        let cli = Cli::parse_from(["envout"]);
        assert_eq!(cli.export_override(), None);
    }

    #[test]
    fn test_export_flags_conflict() {
        let result = Cli::try_parse_from(["envout", "--export", "--no-export"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_positional_dir() {
        let cli = Cli::parse_from(["envout", "/tmp/vars"]);
        assert_eq!(cli.dir, Some(PathBuf::from("/tmp/vars")));
    }

    #[test]
    fn test_verbose_flag() {
        let cli = Cli::parse_from(["envout", "--verbose", "/tmp/vars"]);
        assert!(cli.verbose);

        let cli = Cli::parse_from(["envout", "/tmp/vars"]);
        assert!(!cli.verbose);
    }
}
