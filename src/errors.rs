use std::result::Result as StdResult;

use thiserror::Error;

/// Unified error type for the storage, configuration, and summary layers.
///
/// Invalid domain input (blank names, dangling ids) is never an error:
/// those operations are defined as silent no-ops. What remains is IO and
/// serialization around persistence, plus the summary transport, which is
/// swallowed at its call site anyway.
#[derive(Error, Debug)]
pub enum VaultError {
    #[error("Persistence error: {0}")]
    Storage(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Summary request failed: {0}")]
    Summary(String),
}

pub type Result<T> = StdResult<T, VaultError>;

impl From<std::io::Error> for VaultError {
    fn from(err: std::io::Error) -> Self {
        VaultError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for VaultError {
    fn from(err: serde_json::Error) -> Self {
        VaultError::Storage(err.to_string())
    }
}
