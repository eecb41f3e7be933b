//! File-backed storage.
//!
//! This module handles:
//! - Mapping storage keys to `<key>.json` files in a data directory
//! - Atomic writes (temp file + rename)
//! - Removing keys on data reset

mod file_store;

pub use file_store::JsonFileStore;
