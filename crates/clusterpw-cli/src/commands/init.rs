//! Write a default configuration file.

use anyhow::{bail, Result};
use clusterpw_core::util::save_yaml_file;
use clusterpw_types::ProvisionConfig;
use colored::Colorize;
use std::path::Path;

pub fn execute(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }

    save_yaml_file(path, &ProvisionConfig::default())?;

    println!("{} {}", "Wrote".green().bold(), path.display());
    println!();
    println!("Next steps:");
    println!("  1. Enable the passwords your cluster needs (fence_agent, secure_vagrant_user_pwd)");
    println!("  2. Provision: {}", "clusterpw provision".cyan());

    Ok(())
}
