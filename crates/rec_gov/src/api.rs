use async_trait::async_trait;
use chrono::NaiveDate;

use crate::types::{CampgroundAvailabilityResponse, RecGovError, Timeslot};

/// Lookups against Recreation.gov used by the availability checker
#[async_trait]
pub trait AvailabilityApi: Send + Sync {
    /// Display name of a campground
    async fn campground_name(&self, campground_id: u64) -> Result<String, RecGovError>;

    /// Display name of a timed-entry facility
    async fn facility_name(&self, facility_id: u64) -> Result<String, RecGovError>;

    /// Raw per-campsite availability between `start` and `end`
    async fn campground_availability(
        &self,
        campground_id: u64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<CampgroundAvailabilityResponse, RecGovError>;

    /// Timeslots of a timed-entry facility on `date`
    async fn ticket_availability(
        &self,
        facility_id: u64,
        date: NaiveDate,
    ) -> Result<Vec<Timeslot>, RecGovError>;
}
