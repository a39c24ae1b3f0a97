//! Load-or-create caching of passwords.

use crate::generator::PasswordGenerator;
use clusterpw_types::{Result, SecretKind, SecretStore};
use std::fmt;
use std::path::PathBuf;

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretOrigin {
    /// Read back from the store
    Loaded,
    /// Generated and written during this run
    Created,
}

/// A password ready to be handed to provisioning.
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedSecret {
    /// Which secret this is
    pub kind: SecretKind,
    /// The password
    pub value: String,
    /// Where the value is cached
    pub location: PathBuf,
    /// Whether it was loaded or freshly created
    pub origin: SecretOrigin,
}

impl ResolvedSecret {
    /// Whether the value was generated during this run.
    pub fn is_new(&self) -> bool {
        self.origin == SecretOrigin::Created
    }

    /// Operator notice announcing a newly created value.
    pub fn notice(&self) -> String {
        format!(
            "Create new {} in {} file: {}",
            self.kind.name(),
            self.location.display(),
            self.value
        )
    }
}

// Keep passwords out of debug logs.
impl fmt::Debug for ResolvedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedSecret")
            .field("kind", &self.kind)
            .field("value", &"<redacted>")
            .field("location", &self.location)
            .field("origin", &self.origin)
            .finish()
    }
}

/// Cache front-end over a [`SecretStore`].
pub struct SecretCache<'a, S: SecretStore + ?Sized> {
    store: &'a S,
    generator: PasswordGenerator,
}

impl<'a, S: SecretStore + ?Sized> SecretCache<'a, S> {
    /// Create a cache over `store` that fills misses with `generator`.
    pub fn new(store: &'a S, generator: PasswordGenerator) -> Self {
        Self { store, generator }
    }

    /// Return the cached value, generating and persisting one on a miss.
    ///
    /// Cached contents are returned exactly as stored, even when empty.
    pub fn load_or_create(&self, kind: SecretKind) -> Result<ResolvedSecret> {
        let location = self.store.location(kind);

        if self.store.exists(kind)? {
            let value = self.store.read(kind)?;
            tracing::debug!("Loaded {} from {}", kind, location.display());
            return Ok(ResolvedSecret {
                kind,
                value,
                location,
                origin: SecretOrigin::Loaded,
            });
        }

        let value = self.generator.generate();
        self.store.write(kind, &value)?;
        tracing::info!("Created {} in {}", kind, location.display());

        Ok(ResolvedSecret {
            kind,
            value,
            location,
            origin: SecretOrigin::Created,
        })
    }

    /// Return the cached value without ever generating one.
    pub fn cached(&self, kind: SecretKind) -> Result<Option<String>> {
        if self.store.exists(kind)? {
            Ok(Some(self.store.read(kind)?))
        } else {
            Ok(None)
        }
    }

    /// Drop the cached value so the next lookup regenerates it.
    pub fn clear(&self, kind: SecretKind) -> Result<bool> {
        let removed = self.store.delete(kind)?;
        if removed {
            tracing::info!("Removed cached {}", kind);
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::in_alphabet;
    use crate::store::FileStore;
    use mockall::mock;
    use mockall::predicate::eq;
    use tempfile::TempDir;

    mock! {
        Store {}
        impl SecretStore for Store {
            fn prepare(&self) -> Result<()>;
            fn exists(&self, kind: SecretKind) -> Result<bool>;
            fn read(&self, kind: SecretKind) -> Result<String>;
            fn write(&self, kind: SecretKind, value: &str) -> Result<()>;
            fn delete(&self, kind: SecretKind) -> Result<bool>;
            fn location(&self, kind: SecretKind) -> PathBuf;
        }
    }

    fn with_location(store: &mut MockStore) {
        store
            .expect_location()
            .returning(|kind| PathBuf::from("vagrant_pwd").join(kind.file_name()));
    }

    #[test]
    fn test_hit_does_not_write() {
        let mut store = MockStore::new();
        with_location(&mut store);
        store
            .expect_exists()
            .with(eq(SecretKind::HaCluster))
            .returning(|_| Ok(true));
        store
            .expect_read()
            .with(eq(SecretKind::HaCluster))
            .returning(|_| Ok("abc".to_string()));
        store.expect_write().never();

        let cache = SecretCache::new(&store, PasswordGenerator::default());
        let secret = cache.load_or_create(SecretKind::HaCluster).unwrap();

        assert_eq!(secret.value, "abc");
        assert_eq!(secret.origin, SecretOrigin::Loaded);
        assert!(!secret.is_new());
    }

    #[test]
    fn test_miss_writes_once() {
        let mut store = MockStore::new();
        with_location(&mut store);
        store.expect_exists().returning(|_| Ok(false));
        store.expect_read().never();
        store
            .expect_write()
            .withf(|kind, value| {
                *kind == SecretKind::FenceCluster
                    && value.len() == 13
                    && value.chars().all(in_alphabet)
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let cache = SecretCache::new(&store, PasswordGenerator::default());
        let secret = cache.load_or_create(SecretKind::FenceCluster).unwrap();

        assert!(secret.is_new());
        assert_eq!(
            secret.notice(),
            format!(
                "Create new fencecluster_pwd in vagrant_pwd/.fencecluster_pwd file: {}",
                secret.value
            )
        );
    }

    #[test]
    fn test_write_failure_propagates() {
        let mut store = MockStore::new();
        with_location(&mut store);
        store.expect_exists().returning(|_| Ok(false));
        store.expect_write().returning(|kind, _| {
            Err(clusterpw_types::ProvisionError::file(
                PathBuf::from("vagrant_pwd").join(kind.file_name()),
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            ))
        });

        let cache = SecretCache::new(&store, PasswordGenerator::default());
        assert!(cache.load_or_create(SecretKind::HaCluster).is_err());
    }

    #[test]
    fn test_idempotent_on_disk() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().join("vagrant_pwd"));
        let cache = SecretCache::new(&store, PasswordGenerator::default());

        let first = cache.load_or_create(SecretKind::HaCluster).unwrap();
        let second = cache.load_or_create(SecretKind::HaCluster).unwrap();

        assert!(first.is_new());
        assert!(!second.is_new());
        assert_eq!(first.value, second.value);
    }

    #[test]
    fn test_empty_file_accepted() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path());
        std::fs::write(store.location(SecretKind::HaCluster), "").unwrap();

        let cache = SecretCache::new(&store, PasswordGenerator::default());
        let secret = cache.load_or_create(SecretKind::HaCluster).unwrap();
        assert_eq!(secret.value, "");
        assert_eq!(secret.origin, SecretOrigin::Loaded);
    }

    #[test]
    fn test_non_utf8_file_is_loaded_not_rewritten() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path());
        let path = store.location(SecretKind::HaCluster);
        std::fs::write(&path, [0xff, 0xfe, b'a']).unwrap();

        let cache = SecretCache::new(&store, PasswordGenerator::default());
        let secret = cache.load_or_create(SecretKind::HaCluster).unwrap();

        assert_eq!(secret.origin, SecretOrigin::Loaded);
        assert!(secret.value.ends_with('a'));
        assert_eq!(std::fs::read(&path).unwrap(), [0xff, 0xfe, b'a']);
    }

    #[test]
    fn test_clear_then_regenerate() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path());
        let cache = SecretCache::new(&store, PasswordGenerator::default());

        let before = cache.load_or_create(SecretKind::VagrantUser).unwrap();
        assert!(cache.clear(SecretKind::VagrantUser).unwrap());
        assert_eq!(cache.cached(SecretKind::VagrantUser).unwrap(), None);

        let after = cache.load_or_create(SecretKind::VagrantUser).unwrap();
        assert!(after.is_new());
        assert_ne!(before.value, after.value);
    }

    #[test]
    fn test_debug_redacts_value() {
        let secret = ResolvedSecret {
            kind: SecretKind::HaCluster,
            value: "hunter2".to_string(),
            location: PathBuf::from("vagrant_pwd/.hacluster_pwd"),
            origin: SecretOrigin::Loaded,
        };
        assert!(!format!("{:?}", secret).contains("hunter2"));
    }
}
