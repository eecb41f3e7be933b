//! Derived views over the medication and visit lists.
//!
//! Every screen that shows upcoming visits or low-stock alerts goes through
//! these functions, so the dashboard and the list screens always agree.

use std::cmp::Ordering;

use chrono::NaiveDate;
use medtrack_model::{DoctorVisit, Medication};

/// Visits shown in the dashboard's "upcoming" card.
pub const DASHBOARD_VISIT_LIMIT: usize = 3;

/// Earlier dates first; visits without a usable date go last.
fn compare_visit_dates(a: &DoctorVisit, b: &DoctorVisit) -> Ordering {
    match (a.calendar_date(), b.calendar_date()) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// All visits in ascending date order. The sort is stable, so visits on the
/// same day keep their stored order.
pub fn sorted_visits(visits: &[DoctorVisit]) -> Vec<&DoctorVisit> {
    let mut sorted: Vec<&DoctorVisit> = visits.iter().collect();
    sorted.sort_by(|a, b| compare_visit_dates(a, b));
    sorted
}

/// Visits dated `today` or later, ascending.
///
/// `today` is the local calendar day. A visit with an empty or malformed
/// date cannot be scheduled and is left out.
pub fn upcoming_visits(visits: &[DoctorVisit], today: NaiveDate) -> Vec<&DoctorVisit> {
    let mut upcoming: Vec<&DoctorVisit> = visits
        .iter()
        .filter(|visit| visit.calendar_date().is_some_and(|date| date >= today))
        .collect();
    upcoming.sort_by(|a, b| compare_visit_dates(a, b));
    upcoming
}

/// Medications under the low-stock threshold, in stored order.
pub fn low_stock(medications: &[Medication]) -> Vec<&Medication> {
    medications.iter().filter(|m| m.is_low_stock()).collect()
}

/// Everything the dashboard renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard<'a> {
    pub total_medications: usize,
    /// At most [`DASHBOARD_VISIT_LIMIT`] visits.
    pub upcoming_visits: Vec<&'a DoctorVisit>,
    pub low_stock: Vec<&'a Medication>,
}

impl<'a> Dashboard<'a> {
    pub fn build(
        medications: &'a [Medication],
        visits: &'a [DoctorVisit],
        today: NaiveDate,
    ) -> Self {
        let mut upcoming = upcoming_visits(visits, today);
        upcoming.truncate(DASHBOARD_VISIT_LIMIT);
        Self {
            total_medications: medications.len(),
            upcoming_visits: upcoming,
            low_stock: low_stock(medications),
        }
    }

    /// Count shown on the "Upcoming Visits" stat card. It counts the visits
    /// listed on the dashboard, so it never exceeds the card's limit.
    pub fn upcoming_count(&self) -> usize {
        self.upcoming_visits.len()
    }
}
