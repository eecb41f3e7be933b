//! Trial / premium subscription state.
//!
//! The persisted [`SubscriptionRecord`] holds only the status and the start
//! of the current period. Everything else is derived on each read:
//!
//! ```text
//! days_left = max(0, ceil((7 days - (now - start)) / 1 day))
//! ```
//!
//! Access is never withheld. The state only drives what the UI offers
//! (upgrade prompts, the plan card, the trial countdown).

use std::thread;
use std::time::Duration;

use medtrack_model::{SubscriptionRecord, SubscriptionStatus, TRIAL_DAYS};
use medtrack_persistence::{KeyValueStore, keys, load_or_default, save};
use tracing::info;

use crate::clock::Clock;
use crate::error::{Result, TrackerError};
use crate::outcome::ActionOutcome;

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// Whole days left in the trial window that began at `start_millis`.
///
/// Partial days round up, so a period started this instant reports the
/// full [`TRIAL_DAYS`]. A record that was never initialized has not started
/// its window yet and also reports the full length.
pub fn days_left(start_millis: Option<i64>, now_millis: i64) -> u32 {
    let Some(start) = start_millis else {
        return TRIAL_DAYS as u32;
    };
    let elapsed = now_millis.saturating_sub(start);
    let remaining = (TRIAL_DAYS * DAY_MS).saturating_sub(elapsed);
    if remaining <= 0 {
        return 0;
    }
    let days = remaining / DAY_MS + i64::from(remaining % DAY_MS != 0);
    u32::try_from(days).unwrap_or(u32::MAX)
}

/// Snapshot of the subscription as the UI sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionState {
    pub status: SubscriptionStatus,
    pub start_date: Option<i64>,
    pub days_left: u32,
}

impl SubscriptionState {
    fn from_record(record: SubscriptionRecord, now_millis: i64) -> Self {
        Self {
            status: record.status,
            start_date: record.start_date,
            days_left: days_left(record.start_date, now_millis),
        }
    }

    pub fn is_premium(&self) -> bool {
        self.status == SubscriptionStatus::Premium
    }

    /// Every status may use every feature; the paywall is informational.
    pub fn has_access(&self) -> bool {
        true
    }
}

/// Handle to the persisted subscription, created once at startup and
/// passed to whatever needs it.
pub struct SubscriptionManager<'a> {
    store: &'a dyn KeyValueStore,
    clock: &'a dyn Clock,
}

impl<'a> SubscriptionManager<'a> {
    pub fn new(store: &'a dyn KeyValueStore, clock: &'a dyn Clock) -> Self {
        Self { store, clock }
    }

    fn record(&self) -> SubscriptionRecord {
        load_or_default(self.store, keys::SUBSCRIPTION)
    }

    fn persist(&self, record: &SubscriptionRecord) -> Result<SubscriptionState> {
        save(self.store, keys::SUBSCRIPTION, record)?;
        Ok(SubscriptionState::from_record(*record, self.clock.now_millis()))
    }

    /// Start the trial clock if it has never been started.
    ///
    /// Call once at startup. Reads through [`state`](Self::state) never
    /// write.
    pub fn ensure_initialized(&self) -> Result<SubscriptionState> {
        let record = self.record();
        if record.start_date.is_some() {
            return Ok(SubscriptionState::from_record(record, self.clock.now_millis()));
        }
        let record = SubscriptionRecord {
            start_date: Some(self.clock.now_millis()),
            status: SubscriptionStatus::Trial,
        };
        info!(start_date = record.start_date, "trial started");
        self.persist(&record)
    }

    pub fn state(&self) -> SubscriptionState {
        SubscriptionState::from_record(self.record(), self.clock.now_millis())
    }

    /// Switch to premium and restart the period clock. Calling it again
    /// while premium only restarts the clock.
    pub fn upgrade(&self) -> Result<ActionOutcome<SubscriptionState>> {
        let record = SubscriptionRecord {
            start_date: Some(self.clock.now_millis()),
            status: SubscriptionStatus::Premium,
        };
        let state = self.persist(&record)?;
        info!(start_date = record.start_date, "upgraded to premium");
        Ok(ActionOutcome::new(state, "Upgraded to Premium!"))
    }

    /// Complete an upgrade after a simulated payment delay.
    ///
    /// The delay always runs to completion.
    pub fn upgrade_after(&self, delay: Duration) -> Result<ActionOutcome<SubscriptionState>> {
        info!(delay_ms = delay.as_millis(), "processing payment");
        thread::sleep(delay);
        self.upgrade()
    }

    /// Mark a premium subscription cancelled. The start date is kept, so
    /// the countdown continues from the original period.
    ///
    /// Only premium subscriptions can be cancelled; a trial or an already
    /// cancelled plan is left as it is.
    pub fn cancel(&self) -> Result<ActionOutcome<SubscriptionState>> {
        let mut record = self.record();
        if !record.is_premium() {
            return Err(TrackerError::NotPremium(record.status));
        }
        record.status = SubscriptionStatus::Cancelled;
        let state = self.persist(&record)?;
        info!("subscription cancelled");
        Ok(ActionOutcome::new(state, "Subscription cancelled."))
    }
}
