//! # clusterpw secrets
//!
//! Password generation and file-backed caching for cluster provisioning.
//!
//! Passwords for the cluster admin user, the fence agent user and the
//! vagrant user are generated once, written to one file each and read back
//! on every later run, so repeated provisioning sees the same values until
//! they are reset.
//!
//! ```no_run
//! use clusterpw_secrets::Provisioner;
//! use clusterpw_types::{ProvisionConfig, SecretKind};
//!
//! let config = ProvisionConfig { fence_agent: true, ..Default::default() };
//! let report = Provisioner::from_config(config).run()?;
//!
//! for secret in report.created() {
//!     println!("{}", secret.notice());
//! }
//! let admin = report.value(SecretKind::HaCluster);
//! # Ok::<(), clusterpw_types::ProvisionError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod generator;
pub mod store;
pub mod cache;
pub mod provisioner;

pub use generator::{PasswordGenerator, ALPHABET};
pub use store::FileStore;
pub use cache::{ResolvedSecret, SecretCache, SecretOrigin};
pub use provisioner::{ProvisionReport, Provisioner, SecretStatus};

use clusterpw_types::{ProvisionConfig, Result};

/// Provision every enabled password in the configured directory.
pub fn provision(config: &ProvisionConfig) -> Result<ProvisionReport> {
    Provisioner::from_config(config.clone()).run()
}
