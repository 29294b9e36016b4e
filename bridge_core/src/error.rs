//! Error types shared by the bridge

use thiserror::Error;

/// No value is stored under the requested key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no value stored for key")]
pub struct Absent;

/// Failure reported by the host store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostFailure {
    #[error("host storage is unavailable")]
    Unavailable,
    #[error("host rejected {op} for key `{key}`: {reason}")]
    Rejected {
        op: &'static str,
        key: String,
        reason: String,
    },
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage key must not be empty")]
    EmptyKey,
    #[error(transparent)]
    Absent(#[from] Absent),
    #[error(transparent)]
    Host(#[from] HostFailure),
    #[error("failed to decode value for key `{key}`: {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode value for key `{key}`: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

impl StorageError {
    pub fn is_absent(&self) -> bool {
        matches!(self, StorageError::Absent(_))
    }
}
