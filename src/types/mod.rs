//! Shared types for pismo-init

mod error;

pub use error::{BootstrapError, Result};
