use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use rec_gov::INPUT_DATE_FORMAT;

use crate::scan_types::{CampgroundResult, DateWindow, FacilityResult, SiteKind};

/// Marker in front of a site that has availability
pub const SUCCESS_MARKER: &str = "-";
/// Marker in front of a site without availability
pub const FAILURE_MARKER: &str = "-";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Outcome of a campground run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampgroundReport {
    /// Local time the run finished
    pub checked_at: NaiveDateTime,
    /// Stay that was checked
    pub window: DateWindow,
    /// One entry per queried campground, in input order
    pub results: Vec<CampgroundResult>,
}

impl CampgroundReport {
    /// Whether any campground has a site free for the whole stay
    pub fn has_availability(&self) -> bool {
        self.results.iter().any(CampgroundResult::is_available)
    }

    /// Booking pages of the campgrounds with availability
    pub fn booking_urls(&self) -> Vec<String> {
        self.results
            .iter()
            .filter(|result| result.is_available())
            .map(|result| SiteKind::Campground.booking_url(result.site_id))
            .collect()
    }
}

impl fmt::Display for CampgroundReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let timestamp = self.checked_at.format(TIMESTAMP_FORMAT);

        if self.has_availability() {
            writeln!(
                f,
                "[{}] There *are* campsites available from {} to {}:",
                timestamp,
                self.window.start().format(INPUT_DATE_FORMAT),
                self.window.end().format(INPUT_DATE_FORMAT),
            )?;
        } else {
            writeln!(f, "[{}] There are no campsites available:", timestamp)?;
        }

        for result in &self.results {
            let marker = if result.is_available() {
                SUCCESS_MARKER
            } else {
                FAILURE_MARKER
            };
            writeln!(
                f,
                "{} {} of {} site(s) available at {} ({})",
                marker, result.available_count, result.total_count, result.site_name, result.site_id
            )?;
        }

        write_booking_urls(f, &self.booking_urls())
    }
}

/// Outcome of a timed-entry run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimedEntryReport {
    /// Day that was checked
    pub date: NaiveDate,
    /// One entry per queried facility, in input order
    pub facilities: Vec<FacilityResult>,
}

impl TimedEntryReport {
    /// Whether any queried facility has tickets left
    pub fn has_availability(&self) -> bool {
        self.facilities.iter().any(FacilityResult::has_availability)
    }

    /// Booking pages of every queried facility
    pub fn booking_urls(&self) -> Vec<String> {
        self.facilities
            .iter()
            .map(|facility| SiteKind::TimedEntryFacility.booking_url(facility.facility_id))
            .collect()
    }
}

impl fmt::Display for TimedEntryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for facility in &self.facilities {
            writeln!(
                f,
                "{} ({})",
                facility.facility_name,
                facility.date.format(INPUT_DATE_FORMAT)
            )?;
            for slot in &facility.timeslots {
                writeln!(
                    f,
                    " - {}: {} of {} tickets available",
                    slot.tour_time, slot.available, slot.inventory
                )?;
            }
        }

        if self.has_availability() {
            write_booking_urls(f, &self.booking_urls())?;
        }
        Ok(())
    }
}

/// Report of either mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// Campground mode
    Campground(CampgroundReport),
    /// Timed-entry mode
    TimedEntry(TimedEntryReport),
}

impl Report {
    /// Whether the run found anything bookable
    pub fn has_availability(&self) -> bool {
        match self {
            Report::Campground(report) => report.has_availability(),
            Report::TimedEntry(report) => report.has_availability(),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Campground(report) => fmt::Display::fmt(report, f),
            Report::TimedEntry(report) => fmt::Display::fmt(report, f),
        }
    }
}

fn write_booking_urls(f: &mut fmt::Formatter<'_>, urls: &[String]) -> fmt::Result {
    if urls.is_empty() {
        return Ok(());
    }
    writeln!(f, "\nBooking URL(s):")?;
    for url in urls {
        writeln!(f, "{}", url)?;
    }
    Ok(())
}
