use medtrack_persistence::{KeyValueStore, keys};
use tracing::warn;

use crate::error::Result;

/// Delete all medications and visits. The subscription record survives.
pub fn reset_user_data(store: &dyn KeyValueStore) -> Result<()> {
    for key in keys::USER_DATA {
        store.remove(key)?;
    }
    warn!("all medications and visits deleted");
    Ok(())
}
