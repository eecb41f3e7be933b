//! Typed JSON snapshots on top of a [`KeyValueStore`].

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{PersistenceError, Result};
use crate::store::KeyValueStore;

/// Read and decode the snapshot under `key`.
///
/// Returns `Ok(None)` when the key holds nothing.
pub fn load<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Result<Option<T>> {
    let Some(raw) = store.read(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| PersistenceError::Deserialization {
            key: key.to_string(),
            source,
        })
}

/// Read the snapshot under `key`, falling back to `T::default()`.
///
/// A missing key is normal on first use. Unreadable or corrupt documents
/// are logged and treated as missing.
pub fn load_or_default<T: DeserializeOwned + Default>(store: &dyn KeyValueStore, key: &str) -> T {
    match load(store, key) {
        Ok(Some(value)) => value,
        Ok(None) => {
            tracing::debug!(key, "no stored value, using default");
            T::default()
        }
        Err(e) => {
            tracing::warn!(key, error = %e, "failed to load stored value, using default");
            T::default()
        }
    }
}

/// Encode `value` and replace the snapshot under `key`.
pub fn save<T: Serialize + ?Sized>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<()> {
    let raw = serde_json::to_string(value).map_err(|source| PersistenceError::Serialization {
        key: key.to_string(),
        source,
    })?;
    store.write(key, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_load_or_default_missing() {
        let store = MemoryStore::new();
        let values: Vec<u32> = load_or_default(&store, "numbers");
        assert!(values.is_empty());
    }

    #[test]
    fn test_load_or_default_corrupt() {
        let store = MemoryStore::new();
        store.write("numbers", "{not json").unwrap();
        let values: Vec<u32> = load_or_default(&store, "numbers");
        assert!(values.is_empty());

        let strict: Result<Option<Vec<u32>>> = load(&store, "numbers");
        assert!(matches!(
            strict,
            Err(PersistenceError::Deserialization { .. })
        ));
    }

    #[test]
    fn test_save_then_load() {
        let store = MemoryStore::new();
        save(&store, "numbers", &[3u32, 1, 2]).unwrap();
        let values: Vec<u32> = load_or_default(&store, "numbers");
        assert_eq!(values, vec![3, 1, 2]);
    }
}
