//! clusterpw CLI entry point.

use clap::Parser;
use colored::Colorize;

mod cli;
mod commands;

use cli::Cli;

fn main() {
    clusterpw_core::term::init_color();

    let cli = Cli::parse();

    if let Err(e) = cli.execute() {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}
