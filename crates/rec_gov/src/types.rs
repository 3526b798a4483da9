use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Status string Recreation.gov uses for a bookable night
pub const AVAILABLE_STATUS: &str = "Available";

/// Response structure from the campground availability endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CampgroundAvailabilityResponse {
    /// Number of campsites the campground declares
    pub count: u32,

    /// Campsites keyed by campsite id
    #[serde(default)]
    pub campsites: HashMap<String, CampsiteAvailability>,
}

/// Availability of a single campsite, keyed by `YYYY-MM-DDT00:00:00Z` dates
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CampsiteAvailability {
    /// Status per date, e.g. `Available`, `Reserved`, `Not Available`
    pub availabilities: HashMap<String, String>,

    /// Campsite id, repeated from the map key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campsite_id: Option<String>,

    /// Site number shown on the campground map
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,

    /// Loop the site belongs to
    #[serde(rename = "loop", default, skip_serializing_if = "Option::is_none")]
    pub campsite_loop: Option<String>,

    /// Campsite type, e.g. `STANDARD NONELECTRIC`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campsite_type: Option<String>,
}

/// Response from the campground details endpoint
#[derive(Debug, Deserialize)]
pub struct CampgroundDetailsResponse {
    /// Campground metadata
    pub campground: CampgroundDetails,
}

/// Campground metadata; only the name is used
#[derive(Debug, Deserialize)]
pub struct CampgroundDetails {
    /// Display name
    pub facility_name: String,
}

/// Response from the timed-entry facility details endpoint
#[derive(Debug, Deserialize)]
pub struct FacilityDetails {
    /// Display name
    pub facility_name: String,
}

/// One entry window of a timed-entry facility
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Timeslot {
    /// Entry time as reported by the API, e.g. `08:00:00`
    pub tour_time: String,
    /// Tickets released for the slot
    pub inventory_count: TicketCount,
    /// Tickets already booked for the slot
    pub reservation_count: TicketCount,
}

/// Ticket counts per ticket category; only the `ANY` bucket is used
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TicketCount {
    /// Count across all ticket categories
    #[serde(rename = "ANY")]
    pub any: i64,
}

/// Custom error type for Recreation.gov requests
#[derive(thiserror::Error, Debug)]
pub enum RecGovError {
    /// The API answered with a non-success status
    #[error("ERROR, {status} code received from {url}: {body}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
        /// Full request URL, without query string
        url: String,
        /// Response body as text
        body: String,
    },

    /// Transport or client construction failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The payload did not have the expected shape
    #[error("Failed to parse response from {endpoint}: {source}")]
    Decode {
        /// Endpoint path the payload came from
        endpoint: String,
        /// Underlying serde error
        #[source]
        source: serde_json::Error,
    },
}
