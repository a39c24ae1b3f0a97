//! Password commands.

use anyhow::{bail, Context, Result};
use clusterpw_core::term::{marker, shell_quote};
use clusterpw_secrets::Provisioner;
use clusterpw_types::{ProvisionConfig, SecretKind};
use colored::Colorize;
use dialoguer::Confirm;
use std::io::IsTerminal;

pub fn provision(config: &ProvisionConfig, export: bool) -> Result<()> {
    let report = Provisioner::from_config(config.clone())
        .run()
        .context("Failed to provision passwords")?;

    // With --export stdout is meant for `eval`, so notices move to stderr
    for secret in report.created() {
        if export {
            eprintln!("{}", secret.notice());
        } else {
            println!("{}", secret.notice());
        }
    }

    if export {
        for secret in &report.secrets {
            println!("export {}={}", secret.kind.env_var(), shell_quote(&secret.value));
        }
    }

    Ok(())
}

pub fn status(config: &ProvisionConfig) -> Result<()> {
    let provisioner = Provisioner::from_config(config.clone());

    println!("{} in {}", "Passwords".cyan().bold(), config.directory.display());

    for status in provisioner.status()? {
        let state = match (status.enabled, status.cached) {
            (true, true) => "cached".green(),
            (true, false) => "missing".yellow(),
            (false, true) => "cached (disabled)".dimmed(),
            (false, false) => "disabled".dimmed(),
        };
        println!(
            "  {} {:<18} {:<20} {}",
            marker(status.cached),
            status.kind.name(),
            state,
            status.location.display()
        );
    }

    if config.always_change_all_password {
        println!(
            "\n{} always_change_all_password is set: the next provision regenerates everything",
            "!".yellow()
        );
    }

    Ok(())
}

pub fn show(config: &ProvisionConfig, secret: &str) -> Result<()> {
    let kind: SecretKind = secret.parse()?;
    let value = Provisioner::from_config(config.clone()).show(kind)?;
    println!("{}", value);
    Ok(())
}

pub fn reset(config: &ProvisionConfig, names: &[String], yes: bool) -> Result<()> {
    let kinds = names
        .iter()
        .map(|name| name.parse::<SecretKind>())
        .collect::<Result<Vec<_>, _>>()?;

    let targets = if kinds.is_empty() {
        "all passwords".to_string()
    } else {
        kinds.iter().map(|k| k.name()).collect::<Vec<_>>().join(", ")
    };

    if !yes {
        if !std::io::stdin().is_terminal() {
            bail!("Refusing to reset {} without --yes in a non-interactive session", targets);
        }
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete {} in '{}'?", targets, config.directory.display()))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("Cancelled");
            return Ok(());
        }
    }

    let removed = Provisioner::from_config(config.clone()).reset(&kinds)?;

    if removed.is_empty() {
        println!("{} Nothing to reset", "!".yellow());
    } else {
        for kind in &removed {
            println!("{} Removed {}", "✓".green().bold(), kind.name());
        }
    }

    Ok(())
}
