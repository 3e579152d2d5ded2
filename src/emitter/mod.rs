//! Shell statement emission
//!
//! Pure string transformation: no filesystem access, no execution. The
//! generated lines are meant to be consumed via `eval "$(envout ...)"`.

use crate::model::{EnvEntry, ExportMode};

/// Quote `value` for a POSIX shell.
///
/// The value is wrapped in single quotes; an embedded single quote becomes
/// `'\''` (close the quote, emit an escaped quote, reopen). This round-trips
/// any string, including newlines, `$`, backticks and backslashes.
pub fn quote_sh(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for ch in value.chars() {
        if ch == '\'' {
            quoted.push_str(r"'\''");
        } else {
            quoted.push(ch);
        }
    }
    quoted.push('\'');
    quoted
}

/// Render one entry as a shell statement, without a trailing newline.
pub fn render(entry: &EnvEntry, mode: ExportMode) -> String {
    match mode {
        ExportMode::Export => format!("export {}={}", entry.name, quote_sh(&entry.value)),
        ExportMode::Local => format!("{}={}", entry.name, quote_sh(&entry.value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_plain() {
        assert_eq!(quote_sh("abc"), "'abc'");
        assert_eq!(quote_sh(""), "''");
    }

    #[test]
    fn test_quote_metacharacters_inert() {
        assert_eq!(quote_sh("$HOME `id` \"x\" \\"), "'$HOME `id` \"x\" \\'");
        assert_eq!(quote_sh("a b\nc"), "'a b\nc'");
    }

    #[test]
    fn test_quote_embedded_single_quote() {
        assert_eq!(quote_sh("it's"), r"'it'\''s'");
        assert_eq!(quote_sh("'"), r"''\'''");
        assert_eq!(quote_sh("''"), r"''\'''\'''");
    }

    #[test]
    fn test_render_export() {
        let entry = EnvEntry::new("API_TOKEN", "abc");
        assert_eq!(
            render(&entry, ExportMode::Export),
            "export API_TOKEN='abc'"
        );
    }

    #[test]
    fn test_render_local() {
        let entry = EnvEntry::new("PROMPT_COLOR", "blue");
        assert_eq!(render(&entry, ExportMode::Local), "PROMPT_COLOR='blue'");
    }

    #[test]
    fn test_render_quotes_value_with_spaces() {
        let entry = EnvEntry::new("GREETING", "hello world");
        assert_eq!(
            render(&entry, ExportMode::Export),
            "export GREETING='hello world'"
        );
    }
}
