//! Terminal utilities for colored output and formatting.

use colored::Colorize;
use std::io::{self, IsTerminal};

/// Check if we're running in a controlling terminal.
pub fn in_controlling_terminal() -> bool {
    io::stdout().is_terminal()
}

/// Turn colors off when stdout is piped or `NO_COLOR` is set.
pub fn init_color() {
    if !in_controlling_terminal() || std::env::var_os("NO_COLOR").is_some() {
        colored::control::set_override(false);
    }
}

/// Quote a value for POSIX shells using single quotes.
pub fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}

/// Status marker: a green check or a dim dash.
pub fn marker(ok: bool) -> String {
    if ok {
        "✓".green().bold().to_string()
    } else {
        "-".dimmed().to_string()
    }
}
