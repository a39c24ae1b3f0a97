//! YAML and JSON data handling utilities.

use clusterpw_types::{ProvisionError, Result};
use serde::Serialize;
use serde_json::Value;
use std::path::Path;
use std::fs;

/// Load YAML from string.
pub fn load_yaml(content: &str) -> Result<Value> {
    serde_yaml::from_str(content).map_err(ProvisionError::Yaml)
}

/// Load YAML from file.
pub fn load_yaml_file(path: impl AsRef<Path>) -> Result<Value> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|e| ProvisionError::file(path, e))?;
    load_yaml(&content)
}

/// Save YAML to file.
pub fn save_yaml_file(path: impl AsRef<Path>, data: &impl Serialize) -> Result<()> {
    let path = path.as_ref();
    let yaml = serde_yaml::to_string(data)?;
    fs::write(path, yaml)
        .map_err(|e| ProvisionError::file(path, e))?;
    Ok(())
}

/// Deep merge two values.
/// Recursively merges objects, with overlay values taking precedence.
pub fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            for (key, overlay_val) in overlay_map {
                let merged = match base_map.remove(&key) {
                    Some(base_val) => deep_merge(base_val, overlay_val),
                    None => overlay_val,
                };
                base_map.insert(key, merged);
            }
            Value::Object(base_map)
        }
        (_, overlay_val) => overlay_val,
    }
}

/// Parse a boolean switch the way shell users write them.
pub fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ProvisionError::Validation(format!(
            "expected a boolean (true/false, yes/no, on/off, 1/0), got '{}'",
            raw
        ))),
    }
}
