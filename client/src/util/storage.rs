//! Persistence of small JSON records (the login session) in `localStorage`.
//!
//! ERROR HANDLING
//! ==============
//! Writes report `StorageError` to the caller, which decides whether a lost
//! write matters. Reads collapse every failure to `None`: a missing or
//! corrupt record just means nothing was persisted.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("localStorage is not available")]
    Unavailable,
    #[error("could not encode value: {0}")]
    Encode(String),
    #[error("localStorage rejected the write (quota or privacy mode)")]
    Rejected,
}

#[cfg(feature = "hydrate")]
fn browser_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

/// Decode a stored record for `key`, if present and well-formed.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        let raw = browser_storage().ok()?.get_item(key).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Encode `value` as JSON and store it under `key`.
///
/// # Errors
///
/// Returns an error if storage is unavailable (always the case outside the
/// browser), the value cannot be encoded, or the browser refuses the write.
pub fn save_json<T: Serialize>(key: &str, value: &T) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value).map_err(|e| StorageError::Encode(e.to_string()))?;
    #[cfg(feature = "hydrate")]
    {
        browser_storage()?.set_item(key, &raw).map_err(|_| StorageError::Rejected)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, raw);
        Err(StorageError::Unavailable)
    }
}

/// Drop the record stored under `key`. Missing storage is not an error.
pub fn remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Ok(storage) = browser_storage() {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}
