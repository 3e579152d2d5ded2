//! envout - Environment Directory Loader

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use envout::cli::{Cli, Context};
use envout::model::Severity;
use envout::{emitter, scanner};

// Exit codes: 0 clean (soft skips allowed), 1 one or more entries failed,
// 2 the directory itself could not be scanned (nothing written to stdout).
fn main() -> ExitCode {
    let cli = Cli::parse();

    let ctx = match Context::from_cli(&cli) {
        Ok(ctx) => ctx,
        Err(err) => {
            eprintln!("{} {:#}", "✗".red(), err);
            return ExitCode::from(2);
        }
    };

    match run(&ctx) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            ctx.print_error(&format!("{:#}", err));
            ExitCode::from(2)
        }
    }
}

/// Scan, emit, report. Returns `Ok(false)` when an entry failed to read or
/// run; those are warned about individually but don't stop the others.
fn run(ctx: &Context) -> anyhow::Result<bool> {
    let result = scanner::scan_dir(&ctx.dir, ctx.scan_options)?;

    // Statements on stdout only; every diagnostic goes to stderr
    let mut stdout = std::io::stdout().lock();
    for entry in &result.entries {
        writeln!(stdout, "{}", emitter::render(entry, ctx.mode))?;
    }

    let mut clean = true;
    for skip in &result.skips {
        // Silent skips surface only under --verbose; warnings and failures
        // are always reported
        if skip.reason.severity() != Severity::Silent || ctx.verbose {
            ctx.print_warning(&format!(
                "skipping {}: {}",
                skip.path.display(),
                skip.reason
            ));
        }
        if skip.reason.severity() == Severity::Failure {
            clean = false;
        }
    }
    Ok(clean)
}
