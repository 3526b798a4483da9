use chrono::NaiveDate;
use rec_gov::{BASE_URL, RecGovError};

/// What kind of Recreation.gov site an id refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteKind {
    /// Campground made of individually bookable campsites
    Campground,
    /// Ticketed facility with timed entry windows
    TimedEntryFacility,
}

impl SiteKind {
    /// Public booking page for a site of this kind
    pub fn booking_url(self, site_id: u64) -> String {
        match self {
            SiteKind::Campground => {
                format!("{}/camping/campgrounds/{}/availability", BASE_URL, site_id)
            }
            SiteKind::TimedEntryFacility => format!("{}/ticket/facility/{}", BASE_URL, site_id),
        }
    }
}

/// Stay window: `start` is the first night, `end` the checkout day (exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateWindow {
    /// Build a window, rejecting `start >= end`
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ScanError> {
        if start >= end {
            return Err(ScanError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// First night of the stay
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Checkout day, not stayed
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Whether the night of `date` is part of the stay
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }
}

/// Mode of a run, with the dates it checks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckMode {
    /// Campsite availability over a stay window
    Campground(DateWindow),
    /// Ticket availability on a single day
    TimedEntry(NaiveDate),
}

impl CheckMode {
    /// Kind of site every id of the run refers to
    pub fn site_kind(&self) -> SiteKind {
        match self {
            CheckMode::Campground(_) => SiteKind::Campground,
            CheckMode::TimedEntry(_) => SiteKind::TimedEntryFacility,
        }
    }
}

/// Availability of one campground over the stay window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampgroundResult {
    /// Campground id
    pub site_id: u64,
    /// Display name from the campground details endpoint
    pub site_name: String,
    /// Campsites free for every night of the window
    pub available_count: u32,
    /// Campsites the campground declares
    pub total_count: u32,
}

impl CampgroundResult {
    /// Whether at least one campsite is free for the whole stay
    pub fn is_available(&self) -> bool {
        self.available_count > 0
    }
}

/// Ticket availability of one entry window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeslotAvailability {
    /// Entry time as reported by the API
    pub tour_time: String,
    /// Inventory minus reservations, negative when oversold
    pub available: i64,
    /// Total tickets for the slot
    pub inventory: i64,
}

/// Ticket availability of one timed-entry facility on one day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacilityResult {
    /// Facility id
    pub facility_id: u64,
    /// Display name from the facility details endpoint
    pub facility_name: String,
    /// Day that was checked
    pub date: NaiveDate,
    /// Per-slot availability in API order
    pub timeslots: Vec<TimeslotAvailability>,
}

impl FacilityResult {
    /// Whether any slot still has tickets
    pub fn has_availability(&self) -> bool {
        self.timeslots.iter().any(|slot| slot.available > 0)
    }
}

/// Custom error type for availability scans
#[derive(thiserror::Error, Debug)]
pub enum ScanError {
    /// Recreation.gov request failed
    #[error(transparent)]
    Api(#[from] RecGovError),

    /// Invalid date range
    #[error("Invalid date range: end date {end} must be after start date {start}")]
    InvalidDateRange {
        /// Requested first night
        start: NaiveDate,
        /// Requested checkout day
        end: NaiveDate,
    },
}
