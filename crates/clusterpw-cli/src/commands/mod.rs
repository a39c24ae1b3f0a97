//! CLI command implementations.

pub mod init;
pub mod secrets;
pub mod version;
