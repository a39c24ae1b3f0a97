//! Configuration management for clusterpw.
//!
//! This module provides layered configuration support with:
//! - Built-in defaults
//! - File-based configuration (YAML)
//! - Environment variable overrides
//! - Programmatic updates (command-line flags)
//!
//! ## Configuration Layers
//!
//! Configuration values are resolved in this priority order:
//! 1. Programmatically set values
//! 2. Environment variables
//! 3. Values loaded from file
//! 4. Default values
//!
//! ## Example
//!
//! ```no_run
//! use clusterpw_core::config::Config;
//!
//! let mut config = Config::load("clusterpw.yml")?.with_env(std::env::vars())?;
//! config.set("fence_agent", true)?;
//!
//! let resolved = config.resolve()?;
//! assert!(resolved.fence_agent);
//! # Ok::<(), clusterpw_types::ProvisionError>(())
//! ```

use clusterpw_types::{LogLevel, ProvisionConfig, ProvisionError, Result};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use crate::util::{data, fs};

/// Configuration layer priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConfigLayer {
    /// Default values
    Default = 0,
    /// Values loaded from file
    Loaded = 1,
    /// Values from environment variables
    Environment = 2,
    /// Values set programmatically
    Set = 3,
}

impl ConfigLayer {
    const LOWEST_FIRST: [ConfigLayer; 4] = [
        ConfigLayer::Default,
        ConfigLayer::Loaded,
        ConfigLayer::Environment,
        ConfigLayer::Set,
    ];
}

#[derive(Debug, Clone, Copy)]
enum EnvValue {
    Flag,
    Text,
    Number,
    Level,
}

/// Longest nominal password length accepted.
pub const MAX_PASSWORD_LENGTH: usize = 4096;

/// Environment variables recognised by the environment layer.
pub const ENV_VARS: &[(&str, &str)] = &[
    ("CLUSTERPW_ALWAYS_CHANGE_ALL_PASSWORD", "always_change_all_password"),
    ("CLUSTERPW_FENCE_AGENT", "fence_agent"),
    ("CLUSTERPW_SECURE_VAGRANT_USER_PWD", "secure_vagrant_user_pwd"),
    ("CLUSTERPW_PASSWORD_DIR", "directory"),
    ("CLUSTERPW_PASSWORD_LENGTH", "password.length"),
    ("CLUSTERPW_LOG_LEVEL", "log.level"),
];

fn env_value_kind(key: &str) -> EnvValue {
    match key {
        "directory" => EnvValue::Text,
        "password.length" => EnvValue::Number,
        "log.level" => EnvValue::Level,
        _ => EnvValue::Flag,
    }
}

/// Layered configuration resolving into a [`ProvisionConfig`].
#[derive(Clone, Debug)]
pub struct Config {
    layers: HashMap<ConfigLayer, Value>,
    file_path: Option<PathBuf>,
}

impl Config {
    /// Create a configuration holding only the default layer.
    pub fn new() -> Result<Self> {
        let mut layers = HashMap::new();
        layers.insert(ConfigLayer::Default, serde_json::to_value(ProvisionConfig::default())?);

        Ok(Self {
            layers,
            file_path: None,
        })
    }

    /// Create a configuration from a file path.
    ///
    /// If the file doesn't exist, only the defaults are present.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = Self::new()?;

        if path.is_file() {
            let value = data::load_yaml_file(path)
                .map_err(|e| ProvisionError::Config(format!("Failed to load {}: {}", path.display(), e)))?;

            // An empty file parses as null
            if !value.is_null() {
                if !value.is_object() {
                    return Err(ProvisionError::Config(format!(
                        "{} must contain a mapping at the top level",
                        path.display()
                    )));
                }
                config.layers.insert(ConfigLayer::Loaded, value);
            }
            tracing::debug!("Loaded configuration from {}", path.display());
        }

        config.file_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Fill the environment layer from `(name, value)` pairs.
    ///
    /// Unrecognised names are ignored; recognised names with unparseable
    /// values are an error.
    pub fn with_env<I, K, V>(mut self, vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut layer = Value::Object(Default::default());

        for (name, raw) in vars {
            let Some((_, key)) = ENV_VARS.iter().find(|(var, _)| *var == name.as_ref()) else {
                continue;
            };
            let raw = raw.as_ref();

            let value = match env_value_kind(key) {
                EnvValue::Flag => Value::Bool(data::parse_flag(raw).map_err(|e| {
                    ProvisionError::Config(format!("{}: {}", name.as_ref(), e))
                })?),
                EnvValue::Text => Value::String(raw.to_string()),
                EnvValue::Number => {
                    let n: u64 = raw.trim().parse().map_err(|_| {
                        ProvisionError::Config(format!(
                            "{}: expected a non-negative integer, got '{}'",
                            name.as_ref(),
                            raw
                        ))
                    })?;
                    Value::from(n)
                }
                EnvValue::Level => {
                    let level: LogLevel = raw
                        .parse()
                        .map_err(|e| ProvisionError::Config(format!("{}: {}", name.as_ref(), e)))?;
                    serde_json::to_value(level)?
                }
            };

            Self::set_value_at_path(&mut layer, key, value)?;
        }

        self.layers.insert(ConfigLayer::Environment, layer);
        Ok(self)
    }

    /// Set a configuration value programmatically.
    pub fn set(&mut self, key: &str, value: impl Serialize) -> Result<()> {
        let value = serde_json::to_value(value)
            .map_err(|e| ProvisionError::Config(format!("Failed to serialize value: {}", e)))?;

        let set_layer = self
            .layers
            .entry(ConfigLayer::Set)
            .or_insert_with(|| Value::Object(Default::default()));

        Self::set_value_at_path(set_layer, key, value)
    }

    /// Path this configuration was loaded from, if any.
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Merge all layers and deserialize the result.
    ///
    /// A leading `~` in the password directory is expanded.
    pub fn resolve(&self) -> Result<ProvisionConfig> {
        let mut config: ProvisionConfig = serde_json::from_value(self.merged_data())
            .map_err(|e| ProvisionError::Config(format!("Invalid configuration: {}", e)))?;

        if config.password.length > MAX_PASSWORD_LENGTH {
            return Err(ProvisionError::Config(format!(
                "password.length must be at most {}, got {}",
                MAX_PASSWORD_LENGTH, config.password.length
            )));
        }

        config.directory = fs::expand_path(&config.directory);
        Ok(config)
    }

    fn merged_data(&self) -> Value {
        let mut merged = Value::Object(serde_json::Map::new());

        for layer in &ConfigLayer::LOWEST_FIRST {
            if let Some(layer_data) = self.layers.get(layer) {
                merged = data::deep_merge(merged, layer_data.clone());
            }
        }

        merged
    }

    // Helper: Set value at dotted path, creating intermediate objects
    fn set_value_at_path(data: &mut Value, path: &str, value: Value) -> Result<()> {
        let mut parts: Vec<&str> = path.split('.').collect();
        let last = match parts.pop() {
            Some(last) if !last.is_empty() => last,
            _ => return Err(ProvisionError::Config("Empty path".to_string())),
        };

        let mut current = data;
        for part in parts {
            if !current.is_object() {
                *current = Value::Object(Default::default());
            }
            let map = current
                .as_object_mut()
                .ok_or_else(|| ProvisionError::Config(format!("Cannot descend into {}", path)))?;
            current = map
                .entry(part.to_string())
                .or_insert_with(|| Value::Object(Default::default()));
        }

        if !current.is_object() {
            *current = Value::Object(Default::default());
        }
        if let Some(obj) = current.as_object_mut() {
            obj.insert(last.to_string(), value);
        }

        Ok(())
    }
}
