//! Core logic of the MedTrack health tracker.
//!
//! - [`subscription`]: trial/premium/cancelled state and days remaining
//! - [`views`]: upcoming visits, low-stock medications, dashboard counts
//! - [`medications`] and [`visits`]: validated create/edit/delete flows
//! - [`reset`]: clearing user data
//!
//! All components borrow a [`KeyValueStore`] and a [`Clock`] that the
//! application root constructs once and passes down.
//!
//! [`KeyValueStore`]: medtrack_persistence::KeyValueStore

pub mod clock;
pub mod error;
pub mod medications;
pub mod outcome;
pub mod reset;
pub mod subscription;
pub mod views;
pub mod visits;

pub use clock::{Clock, SystemClock};
#[cfg(any(test, feature = "test-util"))]
pub use clock::FixedClock;
pub use error::{Result, TrackerError};
pub use medications::MedicationBook;
pub use outcome::ActionOutcome;
pub use reset::reset_user_data;
pub use subscription::{SubscriptionManager, SubscriptionState, days_left};
pub use views::{Dashboard, DASHBOARD_VISIT_LIMIT, low_stock, sorted_visits, upcoming_visits};
pub use visits::VisitBook;

/// Allocate a record id from the current time, stepping past ids that are
/// already taken.
pub(crate) fn allocate_id(now_millis: i64, taken: impl Fn(i64) -> bool) -> i64 {
    let mut id = now_millis;
    while taken(id) {
        id += 1;
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocate_id_skips_collisions() {
        let taken = [100, 101, 103];
        assert_eq!(allocate_id(100, |id| taken.contains(&id)), 102);
        assert_eq!(allocate_id(50, |id| taken.contains(&id)), 50);
    }
}
