//! Caching utilities for network requests.
//!
//! Provides sessionStorage-based caching for the current browser session.
//! Cache is automatically cleared when the tab/window is closed,
//! ensuring fresh listings on new visits while avoiding redundant
//! manifest fetches while browsing a drive.

use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

use super::dom;
use crate::config::cache::MANIFEST_KEY_PREFIX;

/// Cache operation errors.
#[derive(Debug, Clone, Error)]
pub enum CacheError {
    #[error("sessionStorage not available")]
    StorageUnavailable,
    #[error("failed to serialize cache entry")]
    SerializationFailed,
    #[error("failed to write cache entry")]
    WriteFailed,
}

/// Cache key for a manifest URL.
pub fn manifest_key(url: &str) -> String {
    format!("{}{}", MANIFEST_KEY_PREFIX, url)
}

/// Get cached data from sessionStorage.
///
/// Returns `None` if the key doesn't exist or deserialization fails.
pub fn get<T: DeserializeOwned>(key: &str) -> Option<T> {
    let storage = dom::session_storage()?;
    let json = storage.get_item(key).ok()??;
    serde_json::from_str(&json).ok()
}

/// Store data in sessionStorage.
pub fn set<T: Serialize>(key: &str, data: &T) -> Result<(), CacheError> {
    let storage = dom::session_storage().ok_or(CacheError::StorageUnavailable)?;
    let json = serde_json::to_string(data).map_err(|_| CacheError::SerializationFailed)?;
    storage
        .set_item(key, &json)
        .map_err(|_| CacheError::WriteFailed)
}

/// Drop a cached entry (used by the explorer's refresh button).
pub fn remove(key: &str) {
    if let Some(storage) = dom::session_storage() {
        let _ = storage.remove_item(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_key() {
        assert_eq!(
            manifest_key("https://files.example.com/manifest.json"),
            "manifest_cache:https://files.example.com/manifest.json"
        );
    }
}
