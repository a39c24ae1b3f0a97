//! Show version information.

use anyhow::Result;
use colored::Colorize;

pub fn execute(verbose: bool) -> Result<()> {
    println!("{} {}", clusterpw_core::APP_NAME.cyan().bold(), clusterpw_core::VERSION);

    if verbose {
        println!("\nBuild Information:");
        println!("  Version: {}", clusterpw_core::VERSION);
        println!("  Target: {}", std::env::consts::ARCH);
        println!("  OS: {}", std::env::consts::OS);
        println!("  Rust Version: {}", env!("CARGO_PKG_RUST_VERSION"));
        println!("  Default config: {}", clusterpw_core::CONFIG_FILE);
    }

    Ok(())
}
