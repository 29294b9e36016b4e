//! Key/value persistence facade
//!
//! Reads report a missing entry as [`Absent`] instead of failing. The facade
//! keeps no copy of stored entries; every call goes straight to the host.

use crate::error::{Absent, HostFailure, StorageError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

pub type StorageValue = String;

/// Non-empty name of a persisted slot
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StorageKey(String);

impl StorageKey {
    pub fn new(key: impl Into<String>) -> Result<Self, StorageError> {
        let key = key.into();
        if key.is_empty() {
            return Err(StorageError::EmptyKey);
        }
        Ok(Self(key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for StorageKey {
    type Error = StorageError;

    fn try_from(key: &str) -> Result<Self, Self::Error> {
        Self::new(key)
    }
}

impl TryFrom<String> for StorageKey {
    type Error = StorageError;

    fn try_from(key: String) -> Result<Self, Self::Error> {
        Self::new(key)
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A host-provided string key/value store
pub trait KeyValueHost {
    /// `Ok(None)` is the host's missing sentinel
    fn get(&self, key: &str) -> Result<Option<String>, HostFailure>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), HostFailure>;
    fn remove(&mut self, key: &str) -> Result<(), HostFailure>;
}

/// In-process host store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry, as a user clearing site data would
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl KeyValueHost for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, HostFailure> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), HostFailure> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), HostFailure> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Result-typed view over a [`KeyValueHost`]
#[derive(Debug, Clone, Default)]
pub struct StorageFacade<H> {
    host: H,
}

impl<H: KeyValueHost> StorageFacade<H> {
    pub fn new(host: H) -> Self {
        Self { host }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    /// Read the value stored under `key`.
    ///
    /// A host read failure is indistinguishable from a missing entry to the
    /// caller; it is logged and reported as [`Absent`].
    pub fn read_value(&self, key: &StorageKey) -> Result<StorageValue, Absent> {
        match self.host.get(key.as_str()) {
            Ok(Some(value)) => Ok(value),
            Ok(None) => Err(Absent),
            Err(failure) => {
                log::warn!("read of `{}` failed: {}", key, failure);
                Err(Absent)
            }
        }
    }

    /// Create or overwrite the entry for `key`
    pub fn write_value(&mut self, key: &StorageKey, value: &str) -> Result<(), StorageError> {
        self.host.set(key.as_str(), value)?;
        log::trace!("stored {} bytes under `{}`", value.len(), key);
        Ok(())
    }

    /// Delete the entry for `key`; a missing entry is not an error
    pub fn remove_value(&mut self, key: &StorageKey) -> Result<(), StorageError> {
        self.host.remove(key.as_str())?;
        Ok(())
    }

    pub fn read_json<T: DeserializeOwned>(&self, key: &StorageKey) -> Result<T, StorageError> {
        let raw = self.read_value(key)?;
        serde_json::from_str(&raw).map_err(|source| StorageError::Decode {
            key: key.to_string(),
            source,
        })
    }

    pub fn write_json<T: Serialize>(
        &mut self,
        key: &StorageKey,
        value: &T,
    ) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value).map_err(|source| StorageError::Encode {
            key: key.to_string(),
            source,
        })?;
        self.write_value(key, &raw)
    }
}
