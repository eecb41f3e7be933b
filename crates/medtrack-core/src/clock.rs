//! Time source for subscription timestamps, record ids and "today".

#[cfg(any(test, feature = "test-util"))]
use std::cell::Cell;

#[cfg(any(test, feature = "test-util"))]
use chrono::{DateTime, Duration};
use chrono::{Local, NaiveDate, Utc};

pub trait Clock {
    /// Current time as Unix epoch milliseconds.
    fn now_millis(&self) -> i64;

    /// Current calendar day in the user's local time zone.
    fn today(&self) -> NaiveDate;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Manually driven clock for tests. "Today" is the UTC day of the
/// current instant so results do not depend on the host time zone.
///
/// Available to other crates through the `test-util` feature.
#[cfg(any(test, feature = "test-util"))]
#[derive(Debug, Clone)]
pub struct FixedClock {
    millis: Cell<i64>,
}

#[cfg(any(test, feature = "test-util"))]
impl FixedClock {
    pub fn new(millis: i64) -> Self {
        Self {
            millis: Cell::new(millis),
        }
    }

    /// Midnight UTC at the start of `date`.
    pub fn at_date(date: NaiveDate) -> Self {
        Self::new(date.and_time(chrono::NaiveTime::MIN).and_utc().timestamp_millis())
    }

    pub fn advance(&self, by: Duration) {
        self.millis.set(self.millis.get() + by.num_milliseconds());
    }
}

#[cfg(any(test, feature = "test-util"))]
impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.millis.get()
    }

    fn today(&self) -> NaiveDate {
        DateTime::<Utc>::from_timestamp_millis(self.millis.get())
            .map(|dt| dt.date_naive())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_today_follows_advance() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let clock = FixedClock::at_date(start);
        assert_eq!(clock.today(), start);

        clock.advance(Duration::hours(23));
        assert_eq!(clock.today(), start);

        clock.advance(Duration::hours(1));
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
    }
}
