//! Key-value snapshot storage for MedTrack.
//!
//! Each storage key holds one JSON document that is always replaced as a
//! whole. Readers get the last written snapshot or, when the key is absent
//! or the document cannot be read or parsed, the type's empty default.
//!
//! # Layout
//!
//! ```text
//! <data-dir>/
//!   subscription.json   { "startDate": number|null, "status": "trial" }
//!   medications.json    [ { "id": ..., "name": ..., ... } ]
//!   doctorVisits.json   [ { "id": ..., "doctorName": ..., ... } ]
//! ```
//!
//! # Example
//!
//! ```ignore
//! use medtrack_persistence::{JsonFileStore, keys, load_or_default, save};
//!
//! let store = JsonFileStore::new("/tmp/medtrack");
//! let mut meds: Vec<Medication> = load_or_default(&store, keys::MEDICATIONS);
//! meds.push(med);
//! save(&store, keys::MEDICATIONS, &meds)?;
//! ```

mod error;
mod io;
pub mod keys;
mod snapshot;
mod store;

pub use error::{PersistenceError, Result};
pub use io::JsonFileStore;
pub use snapshot::{load, load_or_default, save};
pub use store::{KeyValueStore, MemoryStore};
