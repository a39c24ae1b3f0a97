//! Configuration types and structures.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use crate::{LogLevel, SecretKind};

/// Password generation policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordPolicy {
    /// Nominal password length
    #[serde(default = "default_length")]
    pub length: usize,
    /// Generate exactly `length` characters instead of `length + 1`
    #[serde(default)]
    pub exact_length: bool,
}

fn default_length() -> usize {
    12
}

impl PasswordPolicy {
    /// Number of characters a generated password will have.
    ///
    /// Historical deployments draw one character more than the nominal
    /// length; `exact_length` opts out of that.
    pub fn output_len(&self) -> usize {
        if self.exact_length {
            self.length
        } else {
            self.length.saturating_add(1)
        }
    }
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            length: default_length(),
            exact_length: false,
        }
    }
}

/// Log configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level for stderr output
    #[serde(default = "default_log_level")]
    pub level: LogLevel,
    /// Log format (pretty, json, compact)
    #[serde(default = "default_log_format")]
    pub format: LogFormat,
}

fn default_log_level() -> LogLevel {
    LogLevel::Warn
}

fn default_log_format() -> LogFormat {
    LogFormat::Pretty
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable format with colors
    Pretty,
    /// JSON format for machine parsing
    Json,
    /// Compact single-line format
    Compact,
}

/// Everything a provisioning run needs, passed in explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvisionConfig {
    /// Directory holding the cached password files
    #[serde(default = "default_directory")]
    pub directory: PathBuf,

    /// Delete every cached password before reading, forcing regeneration
    #[serde(default)]
    pub always_change_all_password: bool,

    /// Provision the fence agent password
    #[serde(default)]
    pub fence_agent: bool,

    /// Provision a password for the vagrant user
    #[serde(default)]
    pub secure_vagrant_user_pwd: bool,

    /// Password generation policy
    #[serde(default)]
    pub password: PasswordPolicy,

    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

fn default_directory() -> PathBuf {
    PathBuf::from("vagrant_pwd")
}

impl ProvisionConfig {
    /// Whether this configuration asks for the given secret.
    pub fn is_enabled(&self, kind: SecretKind) -> bool {
        match kind {
            SecretKind::HaCluster => true,
            SecretKind::FenceCluster => self.fence_agent,
            SecretKind::VagrantUser => self.secure_vagrant_user_pwd,
        }
    }

    /// Enabled secrets, in processing order.
    pub fn enabled_kinds(&self) -> Vec<SecretKind> {
        SecretKind::ALL
            .into_iter()
            .filter(|kind| self.is_enabled(*kind))
            .collect()
    }
}

impl Default for ProvisionConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            always_change_all_password: false,
            fence_agent: false,
            secure_vagrant_user_pwd: false,
            password: PasswordPolicy::default(),
            log: LogConfig::default(),
        }
    }
}
