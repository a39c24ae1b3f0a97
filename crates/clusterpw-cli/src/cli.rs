//! CLI structure and command definitions.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use clusterpw_core::{config::Config, CONFIG_FILE};
use clusterpw_types::{LogLevel, ProvisionConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "clusterpw")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate and cache the passwords of a vagrant cluster", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file
    #[arg(short, long, global = true, env = "CLUSTERPW_CONFIG", default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load or create every enabled password
    Provision(ProvisionArgs),

    /// Show which passwords are enabled and cached
    Status,

    /// Print a cached password
    Show {
        /// Secret name (hacluster, fence, vagrant)
        secret: String,
    },

    /// Delete cached passwords so they are regenerated
    Reset {
        /// Secret names (all if not specified)
        secrets: Vec<String>,

        /// Skip confirmation
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Show version information (detailed with --verbose)
    Version,
}

#[derive(Args, Debug, Default)]
pub struct ProvisionArgs {
    /// Delete every cached password first
    #[arg(long)]
    pub reset: bool,

    /// Also provision the fence agent password
    #[arg(long)]
    pub fence_agent: bool,

    /// Also provision the vagrant user password
    #[arg(long)]
    pub secure_vagrant_user: bool,

    /// Password directory
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Nominal password length
    #[arg(long)]
    pub length: Option<usize>,

    /// Generate exactly --length characters
    #[arg(long)]
    pub exact_length: bool,

    /// Print shell export lines for every password
    #[arg(long)]
    pub export: bool,
}

impl ProvisionArgs {
    /// Flags only ever switch options on; absent flags leave lower layers alone.
    fn apply(&self, config: &mut Config) -> clusterpw_types::Result<()> {
        if self.reset {
            config.set("always_change_all_password", true)?;
        }
        if self.fence_agent {
            config.set("fence_agent", true)?;
        }
        if self.secure_vagrant_user {
            config.set("secure_vagrant_user_pwd", true)?;
        }
        if let Some(dir) = &self.dir {
            config.set("directory", dir)?;
        }
        if let Some(length) = self.length {
            config.set("password.length", length)?;
        }
        if self.exact_length {
            config.set("password.exact_length", true)?;
        }
        Ok(())
    }
}

impl Cli {
    /// Log level requested on the command line, if any.
    fn log_level_override(&self) -> Option<LogLevel> {
        if self.quiet {
            Some(LogLevel::Error)
        } else if self.debug {
            Some(LogLevel::Debug)
        } else if self.verbose {
            Some(LogLevel::Info)
        } else {
            None
        }
    }

    /// Resolve configuration from file, environment and flags.
    fn settings(&self) -> Result<ProvisionConfig> {
        let mut config = Config::load(&self.config)?.with_env(std::env::vars())?;

        if let Some(level) = self.log_level_override() {
            config.set("log.level", level)?;
        }
        if let Commands::Provision(args) = &self.command {
            args.apply(&mut config)?;
        }

        Ok(config.resolve()?)
    }

    pub fn execute(&self) -> Result<()> {
        use crate::commands::*;

        // These never read the configuration
        match &self.command {
            Commands::Init { force } => return init::execute(&self.config, *force),
            Commands::Version => return version::execute(self.verbose),
            _ => {}
        }

        let settings = self.settings()?;
        clusterpw_core::log::init(&settings.log)?;
        tracing::debug!("Using password directory {}", settings.directory.display());

        match &self.command {
            Commands::Provision(args) => {
                secrets::provision(&settings, args.export)
            }
            Commands::Status => {
                secrets::status(&settings)
            }
            Commands::Show { secret } => {
                secrets::show(&settings, secret)
            }
            Commands::Reset { secrets: names, yes } => {
                secrets::reset(&settings, names, *yes)
            }
            Commands::Init { .. } | Commands::Version => Ok(()),
        }
    }
}
