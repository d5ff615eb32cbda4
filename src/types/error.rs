//! Error types for pismo-init

/// Main error type for provisioning operations
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(String),
}

// Driver errors all surface as Database: the tool has no recovery path
// and reports whatever the server or driver said.

impl From<mongodb::error::Error> for BootstrapError {
    fn from(err: mongodb::error::Error) -> Self {
        Self::Database(err.to_string())
    }
}

/// Result type alias for provisioning operations
pub type Result<T> = std::result::Result<T, BootstrapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_detail() {
        let err = BootstrapError::Config("database name must not be empty".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: database name must not be empty"
        );

        let err = BootstrapError::Database("ping failed".to_string());
        assert_eq!(err.to_string(), "Database error: ping failed");
    }

    #[test]
    fn test_driver_errors_map_to_database() {
        let driver_err = mongodb::error::Error::custom("connection reset");
        let err: BootstrapError = driver_err.into();
        assert!(matches!(err, BootstrapError::Database(_)));
    }
}
