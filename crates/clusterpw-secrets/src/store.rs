//! File-backed password store.
//!
//! Each secret lives in its own dot-file inside one directory, holding the
//! bare value with no trailing newline.

use clusterpw_core::util::fs;
use clusterpw_types::{Result, SecretKind, SecretStore};
use std::path::{Path, PathBuf};

/// Password store rooted at a directory such as `vagrant_pwd/`.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `root`. Nothing is touched on disk.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory holding the password files.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl SecretStore for FileStore {
    fn prepare(&self) -> Result<()> {
        if fs::ensure_dir(&self.root)? {
            tracing::debug!("Created password directory {}", self.root.display());
        }
        Ok(())
    }

    fn exists(&self, kind: SecretKind) -> Result<bool> {
        Ok(self.location(kind).is_file())
    }

    fn read(&self, kind: SecretKind) -> Result<String> {
        fs::slurp(self.location(kind))
    }

    fn write(&self, kind: SecretKind, value: &str) -> Result<()> {
        fs::ensure_dir(&self.root)?;
        fs::write_private(self.location(kind), value)
    }

    fn delete(&self, kind: SecretKind) -> Result<bool> {
        fs::remove_if_present(self.location(kind))
    }

    fn location(&self, kind: SecretKind) -> PathBuf {
        self.root.join(kind.file_name())
    }
}
