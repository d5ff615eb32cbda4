//! pismo-init - one-shot MongoDB provisioning for the pismo ledger environment
//!
//! Replaces a `mongo-init.js` container-init script with a standalone
//! binary: select the target database, create the application principal
//! with a readWrite grant scoped to it, create the initial empty
//! collection. Execution is fully sequential over one administrative
//! connection; there are no retries and no idempotence checks, so
//! re-running against a provisioned database fails with the server's
//! duplicate errors.

pub mod bootstrap;
pub mod config;
pub mod db;
pub mod types;

pub use config::Args;
pub use types::{BootstrapError, Result};
