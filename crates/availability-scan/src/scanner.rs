use chrono::{Local, NaiveDate};
use rec_gov::AvailabilityApi;
use tracing::{debug, info};

use crate::evaluator::{evaluate_campground, evaluate_timed_entry};
use crate::report::{CampgroundReport, Report, TimedEntryReport};
use crate::scan_types::*;

/// Runs the availability check for a list of site ids.
///
/// Sites are processed one at a time in input order. The first failed
/// request aborts the run and no report is produced.
pub struct Scanner<A> {
    api: A,
}

impl<A: AvailabilityApi> Scanner<A> {
    /// Create a scanner on top of a Recreation.gov API implementation
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Check every id in the mode of the run
    pub async fn run(&self, site_ids: &[u64], mode: &CheckMode) -> Result<Report, ScanError> {
        info!("Checking {} site(s) in {:?} mode", site_ids.len(), mode.site_kind());

        match *mode {
            CheckMode::Campground(window) => self
                .check_campgrounds(site_ids, window)
                .await
                .map(Report::Campground),
            CheckMode::TimedEntry(date) => self
                .check_timed_entry(site_ids, date)
                .await
                .map(Report::TimedEntry),
        }
    }

    /// Check campsite availability of every campground over `window`
    pub async fn check_campgrounds(
        &self,
        campground_ids: &[u64],
        window: DateWindow,
    ) -> Result<CampgroundReport, ScanError> {
        let mut results = Vec::with_capacity(campground_ids.len());

        for &campground_id in campground_ids {
            results.push(self.check_campground(campground_id, &window).await?);
        }

        Ok(CampgroundReport {
            checked_at: Local::now().naive_local(),
            window,
            results,
        })
    }

    /// Fetch, name and evaluate a single campground
    pub async fn check_campground(
        &self,
        campground_id: u64,
        window: &DateWindow,
    ) -> Result<CampgroundResult, ScanError> {
        let payload = self
            .api
            .campground_availability(campground_id, window.start(), window.end())
            .await?;
        let site_name = self.api.campground_name(campground_id).await?;

        let (available_count, total_count) = evaluate_campground(&payload, window);
        debug!(
            "{} ({}): {} of {} site(s) available",
            site_name, campground_id, available_count, total_count
        );

        Ok(CampgroundResult {
            site_id: campground_id,
            site_name,
            available_count,
            total_count,
        })
    }

    /// Check ticket availability of every facility on `date`
    pub async fn check_timed_entry(
        &self,
        facility_ids: &[u64],
        date: NaiveDate,
    ) -> Result<TimedEntryReport, ScanError> {
        let mut facilities = Vec::with_capacity(facility_ids.len());

        for &facility_id in facility_ids {
            facilities.push(self.check_facility(facility_id, date).await?);
        }

        Ok(TimedEntryReport { date, facilities })
    }

    /// Name, fetch and evaluate a single timed-entry facility
    pub async fn check_facility(
        &self,
        facility_id: u64,
        date: NaiveDate,
    ) -> Result<FacilityResult, ScanError> {
        let facility_name = self.api.facility_name(facility_id).await?;
        let timeslots = self.api.ticket_availability(facility_id, date).await?;

        let result = FacilityResult {
            facility_id,
            facility_name,
            date,
            timeslots: evaluate_timed_entry(&timeslots),
        };
        debug!(
            "{} ({}): {} timeslot(s), availability: {}",
            result.facility_name,
            facility_id,
            result.timeslots.len(),
            result.has_availability()
        );

        Ok(result)
    }
}
