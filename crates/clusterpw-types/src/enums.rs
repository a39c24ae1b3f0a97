//! Common enumerations used throughout clusterpw.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::errors::{ProvisionError, Result};

/// Log level enumeration for the logging system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    /// No logging
    None,
    /// Error messages only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    Info,
    /// Debug messages
    Debug,
    /// Detailed trace messages
    Trace,
}

impl LogLevel {
    /// Directive understood by `tracing_subscriber::EnvFilter`.
    pub fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::None => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl FromStr for LogLevel {
    type Err = ProvisionError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "NONE" | "OFF" => Ok(LogLevel::None),
            "ERROR" => Ok(LogLevel::Error),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "INFO" => Ok(LogLevel::Info),
            "DEBUG" => Ok(LogLevel::Debug),
            "TRACE" => Ok(LogLevel::Trace),
            _ => Err(ProvisionError::Validation(format!("Invalid log level: {}", s))),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::None => write!(f, "NONE"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Trace => write!(f, "TRACE"),
        }
    }
}

/// The passwords provisioned for a cluster.
///
/// The set is closed: every kind has a fixed name, a fixed cache file name
/// and a fixed processing position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecretKind {
    /// Password of the `hacluster` administrative user
    HaCluster,
    /// Password of the fence agent user
    FenceCluster,
    /// Password overriding the default `vagrant` provisioning user
    VagrantUser,
}

impl SecretKind {
    /// Every kind, in processing order.
    pub const ALL: [SecretKind; 3] = [
        SecretKind::HaCluster,
        SecretKind::FenceCluster,
        SecretKind::VagrantUser,
    ];

    /// Canonical secret name, as used in notices.
    pub fn name(&self) -> &'static str {
        match self {
            SecretKind::HaCluster => "hacluster_pwd",
            SecretKind::FenceCluster => "fencecluster_pwd",
            SecretKind::VagrantUser => "vagrant_user_pwd",
        }
    }

    /// File name of the cached value inside the password directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            SecretKind::HaCluster => ".hacluster_pwd",
            SecretKind::FenceCluster => ".fencecluster_pwd",
            SecretKind::VagrantUser => ".vagrant_pwd",
        }
    }

    /// Shell variable name used when exporting the value.
    pub fn env_var(&self) -> &'static str {
        match self {
            SecretKind::HaCluster => "HACLUSTER_PWD",
            SecretKind::FenceCluster => "FENCECLUSTER_PWD",
            SecretKind::VagrantUser => "VAGRANT_USER_PWD",
        }
    }
}

impl FromStr for SecretKind {
    type Err = ProvisionError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().trim_start_matches('.') {
            "hacluster" | "hacluster_pwd" => Ok(SecretKind::HaCluster),
            "fence" | "fencecluster" | "fencecluster_pwd" => Ok(SecretKind::FenceCluster),
            "vagrant" | "vagrant_user" | "vagrant_user_pwd" | "vagrant_pwd" => {
                Ok(SecretKind::VagrantUser)
            }
            _ => Err(ProvisionError::Secret(format!(
                "Unknown secret: {} (expected one of hacluster, fence, vagrant)",
                s
            ))),
        }
    }
}

impl fmt::Display for SecretKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
