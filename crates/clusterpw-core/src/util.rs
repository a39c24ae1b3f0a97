//! Common utility functions.

pub mod data;
pub mod fs;

// Re-export commonly used items
pub use data::{load_yaml_file, save_yaml_file, deep_merge, parse_flag};
pub use fs::{expand_path, slurp, ensure_dir, remove_if_present};
