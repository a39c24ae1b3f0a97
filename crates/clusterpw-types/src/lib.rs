//! # clusterpw types
//!
//! Core types, traits, and enums shared across all clusterpw crates.
//!
//! This crate provides the fundamental building blocks for the cluster
//! password provisioner, including:
//!
//! - The fixed set of provisioned secrets ([`SecretKind`])
//! - Password policy and provisioning configuration structures
//! - The [`SecretStore`] trait for secret persistence backends
//! - Error types and result aliases
//!
//! ## Example
//!
//! ```
//! use clusterpw_types::{ProvisionConfig, SecretKind};
//!
//! let kind: SecretKind = "fence".parse().unwrap();
//! assert_eq!(kind.file_name(), ".fencecluster_pwd");
//!
//! let mut config = ProvisionConfig::default();
//! assert_eq!(config.enabled_kinds(), vec![SecretKind::HaCluster]);
//!
//! config.fence_agent = true;
//! assert!(config.is_enabled(kind));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod enums;
pub mod traits;
pub mod config;

// Re-export common types for convenience
pub use errors::{ProvisionError, Result};
pub use enums::{LogLevel, SecretKind};
pub use traits::SecretStore;
pub use config::{LogConfig, LogFormat, PasswordPolicy, ProvisionConfig};
