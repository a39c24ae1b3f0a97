//! Core trait definitions for clusterpw abstractions.

use std::path::PathBuf;
use crate::SecretKind;
use crate::errors::Result;

/// Trait for password storage backends.
///
/// Implementers persist one plain value per [`SecretKind`]. All calls are
/// synchronous and made from a single thread.
pub trait SecretStore {
    /// Make the store ready for use (e.g. create its directory).
    fn prepare(&self) -> Result<()>;

    /// Check whether a value is cached for the secret.
    fn exists(&self, kind: SecretKind) -> Result<bool>;

    /// Read the cached value exactly as stored.
    fn read(&self, kind: SecretKind) -> Result<String>;

    /// Persist a value, replacing any previous one.
    fn write(&self, kind: SecretKind, value: &str) -> Result<()>;

    /// Remove the cached value.
    ///
    /// Returns `true` if something was removed.
    fn delete(&self, kind: SecretKind) -> Result<bool>;

    /// Where the value for `kind` lives, for display.
    fn location(&self, kind: SecretKind) -> PathBuf;
}
