//! Provisioning of the cluster passwords.

use crate::cache::{ResolvedSecret, SecretCache};
use crate::generator::PasswordGenerator;
use crate::store::FileStore;
use clusterpw_types::{ProvisionConfig, ProvisionError, Result, SecretKind, SecretStore};
use std::path::PathBuf;

/// Outcome of a provisioning run.
#[derive(Debug, Clone, Default)]
pub struct ProvisionReport {
    /// Secrets whose cached files were deleted by a reset
    pub cleared: Vec<SecretKind>,
    /// Secrets resolved, in processing order
    pub secrets: Vec<ResolvedSecret>,
}

impl ProvisionReport {
    /// The resolved secret of a kind, if it was processed.
    pub fn get(&self, kind: SecretKind) -> Option<&ResolvedSecret> {
        self.secrets.iter().find(|secret| secret.kind == kind)
    }

    /// The resolved password of a kind, if it was processed.
    pub fn value(&self, kind: SecretKind) -> Option<&str> {
        self.get(kind).map(|secret| secret.value.as_str())
    }

    /// Secrets generated during this run.
    pub fn created(&self) -> impl Iterator<Item = &ResolvedSecret> {
        self.secrets.iter().filter(|secret| secret.is_new())
    }
}

/// Cache state of one secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretStatus {
    /// Which secret
    pub kind: SecretKind,
    /// Whether the configuration asks for it
    pub enabled: bool,
    /// Whether a value is cached
    pub cached: bool,
    /// Where the value is (or would be) cached
    pub location: PathBuf,
}

/// Resolves every enabled password against a store.
pub struct Provisioner<S: SecretStore> {
    store: S,
    config: ProvisionConfig,
}

impl Provisioner<FileStore> {
    /// Provisioner over the configured password directory.
    pub fn from_config(config: ProvisionConfig) -> Self {
        let store = FileStore::new(config.directory.clone());
        Self::new(store, config)
    }
}

impl<S: SecretStore> Provisioner<S> {
    /// Create a provisioner over an arbitrary store.
    pub fn new(store: S, config: ProvisionConfig) -> Self {
        Self { store, config }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The configuration in use.
    pub fn config(&self) -> &ProvisionConfig {
        &self.config
    }

    fn cache(&self) -> SecretCache<'_, S> {
        SecretCache::new(&self.store, PasswordGenerator::new(self.config.password))
    }

    /// Run provisioning.
    ///
    /// The store is prepared first. With `always_change_all_password` every
    /// known secret is cleared (enabled or not) before anything is read.
    /// Enabled secrets are then loaded or created in processing order.
    pub fn run(&self) -> Result<ProvisionReport> {
        self.store.prepare()?;

        let mut report = ProvisionReport::default();
        let cache = self.cache();

        if self.config.always_change_all_password {
            for kind in SecretKind::ALL {
                if cache.clear(kind)? {
                    report.cleared.push(kind);
                }
            }
        }

        for kind in self.config.enabled_kinds() {
            report.secrets.push(cache.load_or_create(kind)?);
        }

        tracing::debug!(
            "Provisioned {} secrets ({} new, {} cleared)",
            report.secrets.len(),
            report.created().count(),
            report.cleared.len()
        );

        Ok(report)
    }

    /// Report the cache state of every known secret without touching values.
    pub fn status(&self) -> Result<Vec<SecretStatus>> {
        SecretKind::ALL
            .into_iter()
            .map(|kind| -> Result<SecretStatus> {
                Ok(SecretStatus {
                    kind,
                    enabled: self.config.is_enabled(kind),
                    cached: self.store.exists(kind)?,
                    location: self.store.location(kind),
                })
            })
            .collect()
    }

    /// The cached password of `kind`. Never generates.
    pub fn show(&self, kind: SecretKind) -> Result<String> {
        self.cache().cached(kind)?.ok_or_else(|| {
            ProvisionError::Secret(format!(
                "{} is not cached in {}",
                kind,
                self.store.location(kind).display()
            ))
        })
    }

    /// Delete the cached files of `kinds` (every kind when empty).
    ///
    /// Returns the kinds whose files were actually removed.
    pub fn reset(&self, kinds: &[SecretKind]) -> Result<Vec<SecretKind>> {
        let all = SecretKind::ALL;
        let kinds = if kinds.is_empty() { &all[..] } else { kinds };
        let cache = self.cache();

        let mut removed = Vec::new();
        for &kind in kinds {
            if cache.clear(kind)? {
                removed.push(kind);
            }
        }
        Ok(removed)
    }
}
