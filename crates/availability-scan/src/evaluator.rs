//! Counting of available campsites and tickets.
//!
//! A campsite is available when it has at least one availability entry and
//! every entry for a night inside the stay window reads `Available`. Nights
//! the payload does not mention do not disqualify a site.

use chrono::NaiveDate;
use rec_gov::{AVAILABLE_STATUS, CampgroundAvailabilityResponse, CampsiteAvailability, Timeslot};
use tracing::debug;

use crate::scan_types::{DateWindow, TimeslotAvailability};

/// Count campsites free for every night of `window`.
///
/// Returns `(available_count, total_count)` where the total is the count the
/// campground declares.
pub fn evaluate_campground(payload: &CampgroundAvailabilityResponse, window: &DateWindow) -> (u32, u32) {
    let mut num_available = 0;

    for site in payload.campsites.values() {
        if campsite_is_available(site, window) {
            num_available += 1;
            debug!(
                "Available site {}: {}",
                num_available,
                serde_json::to_string_pretty(site).unwrap_or_default()
            );
        }
    }

    (num_available, payload.count)
}

fn campsite_is_available(site: &CampsiteAvailability, window: &DateWindow) -> bool {
    !site.availabilities.is_empty()
        && site
            .availabilities
            .iter()
            .filter(|(date, _)| parse_availability_date(date).is_some_and(|d| window.contains(d)))
            .all(|(_, status)| status == AVAILABLE_STATUS)
}

/// Parse the `YYYY-MM-DD` prefix of an availability key such as `2024-06-01T00:00:00Z`
fn parse_availability_date(key: &str) -> Option<NaiveDate> {
    key.get(..10)
        .and_then(|day| NaiveDate::parse_from_str(day, "%Y-%m-%d").ok())
}

/// Tickets left per timeslot, `inventory - reservations` on the `ANY` bucket
pub fn evaluate_timed_entry(timeslots: &[Timeslot]) -> Vec<TimeslotAvailability> {
    timeslots
        .iter()
        .map(|slot| TimeslotAvailability {
            tour_time: slot.tour_time.clone(),
            available: slot.inventory_count.any - slot.reservation_count.any,
            inventory: slot.inventory_count.any,
        })
        .collect()
}
