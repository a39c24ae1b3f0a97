//! # clusterpw core
//!
//! Core utilities, configuration management, logging, and common functionality
//! for the cluster password provisioner.
//!
//! This crate provides:
//!
//! - **Configuration**: Layered configuration (defaults, YAML file, environment, overrides)
//! - **Logging**: `tracing` subscriber setup driven by configuration
//! - **Terminal**: Color control and small formatting helpers
//! - **File Operations**: YAML handling, path expansion, secret file primitives
//!
//! ## Example
//!
//! ```no_run
//! use clusterpw_core::config::Config;
//!
//! let config = Config::load("clusterpw.yml")?
//!     .with_env(std::env::vars())?
//!     .resolve()?;
//!
//! clusterpw_core::log::init(&config.log)?;
//! # Ok::<(), clusterpw_types::ProvisionError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod log;
pub mod term;
pub mod util;

// Re-export commonly used items
pub use config::{Config, ConfigLayer};
pub use clusterpw_types::{ProvisionError, Result};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "clusterpw";

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "clusterpw.yml";
