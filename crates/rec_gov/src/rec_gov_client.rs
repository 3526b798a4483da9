use async_trait::async_trait;
use chrono::NaiveDate;
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::api::AvailabilityApi;
use crate::config::ClientConfig;
use crate::types::*;

/// Date format accepted on the command line and by the ticket endpoint
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

const CAMPGROUNDS_ENDPOINT: &str = "/api/camps/campgrounds/";
const CAMPGROUND_AVAIL_ENDPOINT: &str = "/api/camps/availability/campground/";
const FACILITY_ENDPOINT: &str = "/api/ticket/facility/";
const TICKETS_AVAIL_ENDPOINT: &str = "/api/ticket/availability/facility/";

/// Client for interacting with recreation.gov API
pub struct RecGovClient {
    client: Client,
    config: ClientConfig,
}

impl RecGovClient {
    /// Create a new recreation.gov API client
    pub fn new(config: ClientConfig) -> Result<Self, RecGovError> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { client, config })
    }

    /// GET `endpoint` with `params` and return the JSON body.
    ///
    /// Any non-success status is turned into [`RecGovError::RequestFailed`]
    /// carrying the status code and the response body.
    pub async fn fetch(&self, endpoint: &str, params: &[(&str, String)]) -> Result<Value, RecGovError> {
        let url = format!("{}{}", self.config.base_url, endpoint);
        debug!("Querying {} with these params: {:?}", url, params);

        let response = self.client.get(&url).query(params).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read response body".to_string());
            return Err(RecGovError::RequestFailed {
                status: status.as_u16(),
                url,
                body,
            });
        }

        let payload: Value = response.json().await?;

        if self.config.dumps_payloads() {
            debug!(
                "Information for {}: {}",
                url,
                serde_json::to_string_pretty(&payload).unwrap_or_else(|_| payload.to_string())
            );
        }

        Ok(payload)
    }

    async fn fetch_as<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<T, RecGovError> {
        let payload = self.fetch(endpoint, params).await?;
        decode(endpoint, payload)
    }
}

#[async_trait]
impl AvailabilityApi for RecGovClient {
    async fn campground_name(&self, campground_id: u64) -> Result<String, RecGovError> {
        let endpoint = format!("{}{}", CAMPGROUNDS_ENDPOINT, campground_id);
        let details: CampgroundDetailsResponse = self.fetch_as(&endpoint, &[]).await?;
        Ok(details.campground.facility_name)
    }

    async fn facility_name(&self, facility_id: u64) -> Result<String, RecGovError> {
        let endpoint = format!("{}{}", FACILITY_ENDPOINT, facility_id);
        let details: FacilityDetails = self.fetch_as(&endpoint, &[]).await?;
        Ok(details.facility_name)
    }

    async fn campground_availability(
        &self,
        campground_id: u64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<CampgroundAvailabilityResponse, RecGovError> {
        let endpoint = format!("{}{}", CAMPGROUND_AVAIL_ENDPOINT, campground_id);
        self.fetch_as(&endpoint, &campground_params(start, end)).await
    }

    async fn ticket_availability(
        &self,
        facility_id: u64,
        date: NaiveDate,
    ) -> Result<Vec<Timeslot>, RecGovError> {
        let endpoint = format!("{}{}", TICKETS_AVAIL_ENDPOINT, facility_id);
        let params = [("date", date.format(INPUT_DATE_FORMAT).to_string())];
        self.fetch_as(&endpoint, &params).await
    }
}

/// Midnight-UTC timestamp used by the campground availability endpoint
pub fn format_campground_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%dT00:00:00Z").to_string()
}

/// Query parameters for a campground availability request
pub fn campground_params(start: NaiveDate, end: NaiveDate) -> Vec<(&'static str, String)> {
    vec![
        ("start_date", format_campground_date(start)),
        ("end_date", format_campground_date(end)),
    ]
}

fn decode<T: DeserializeOwned>(endpoint: &str, payload: Value) -> Result<T, RecGovError> {
    serde_json::from_value(payload).map_err(|source| RecGovError::Decode {
        endpoint: endpoint.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::LevelFilter;
    use serde_json::json;
    use crate::config::USER_AGENTS;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Match, Mock, MockServer, Request, ResponseTemplate};

    /// Compares the whole User-Agent value; `header` splits values on commas
    struct UserAgentIs(String);

    impl Match for UserAgentIs {
        fn matches(&self, request: &Request) -> bool {
            request
                .headers
                .get("user-agent")
                .is_some_and(|value| value.as_bytes() == self.0.as_bytes())
        }
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, INPUT_DATE_FORMAT).unwrap()
    }

    fn client_for(server: &MockServer) -> RecGovClient {
        let config = ClientConfig::new(LevelFilter::Debug).with_base_url(server.uri());
        RecGovClient::new(config).unwrap()
    }

    #[test]
    fn test_format_campground_date() {
        assert_eq!(format_campground_date(date("2024-06-01")), "2024-06-01T00:00:00Z");
    }

    #[test]
    fn test_campground_params() {
        let params = campground_params(date("2024-06-01"), date("2024-06-03"));
        assert_eq!(
            params,
            vec![
                ("start_date", "2024-06-01T00:00:00Z".to_string()),
                ("end_date", "2024-06-03T00:00:00Z".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_fetch_non_success_surfaces_status_and_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/camps/availability/campground/232447"))
            .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let err = client
            .campground_availability(232447, date("2024-06-01"), date("2024-06-03"))
            .await
            .unwrap_err();

        match err {
            RecGovError::RequestFailed { status, url, body } => {
                assert_eq!(status, 503);
                assert!(url.ends_with("/api/camps/availability/campground/232447"));
                assert_eq!(body, "Service Unavailable");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_campground_availability_sends_midnight_utc_window() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/camps/availability/campground/232447"))
            .and(query_param("start_date", "2024-06-01T00:00:00Z"))
            .and(query_param("end_date", "2024-06-03T00:00:00Z"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "count": 1,
                "campsites": {
                    "100": {
                        "availabilities": { "2024-06-01T00:00:00Z": "Available" },
                        "campsite_id": "100",
                        "loop": "A"
                    }
                }
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let payload = client
            .campground_availability(232447, date("2024-06-01"), date("2024-06-03"))
            .await
            .unwrap();

        assert_eq!(payload.count, 1);
        let site = &payload.campsites["100"];
        assert_eq!(site.availabilities["2024-06-01T00:00:00Z"], "Available");
        assert_eq!(site.campsite_loop.as_deref(), Some("A"));
    }

    #[tokio::test]
    async fn test_ticket_availability_sends_plain_date() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/ticket/availability/facility/300015"))
            .and(query_param("date", "2024-07-04"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {
                    "tour_time": "08:00:00",
                    "inventory_count": { "ANY": 5 },
                    "reservation_count": { "ANY": 3 }
                }
            ])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let slots = client.ticket_availability(300015, date("2024-07-04")).await.unwrap();

        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].tour_time, "08:00:00");
        assert_eq!(slots[0].inventory_count.any, 5);
    }

    #[tokio::test]
    async fn test_name_lookups() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/camps/campgrounds/232447"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "campground": { "facility_name": "UPPER PINES", "facility_id": "232447" }
            })))
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/api/ticket/facility/300015"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "facility_name": "Arches National Park Timed Entry"
            })))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        assert_eq!(client.campground_name(232447).await.unwrap(), "UPPER PINES");
        assert_eq!(
            client.facility_name(300015).await.unwrap(),
            "Arches National Park Timed Entry"
        );
    }

    #[tokio::test]
    async fn test_missing_field_is_a_decode_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/camps/campgrounds/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "campground": {} })))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let err = client.campground_name(1).await.unwrap_err();

        assert!(matches!(err, RecGovError::Decode { ref endpoint, .. } if endpoint == "/api/camps/campgrounds/1"));
    }

    #[tokio::test]
    async fn test_configured_user_agent_is_sent() {
        let mock_server = MockServer::start().await;
        let mut config = ClientConfig::new(LevelFilter::Warn).with_base_url(mock_server.uri());
        config.user_agent = "rec-check-test/1.0".to_string();

        Mock::given(method("GET"))
            .and(path("/api/ticket/facility/7"))
            .and(header("user-agent", "rec-check-test/1.0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "facility_name": "X" })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = RecGovClient::new(config).unwrap();
        assert_eq!(client.facility_name(7).await.unwrap(), "X");
    }

    #[tokio::test]
    async fn test_browser_user_agent_with_commas_is_sent_verbatim() {
        let mock_server = MockServer::start().await;
        let browser = USER_AGENTS[0];
        assert!(browser.contains(','));

        let mut config = ClientConfig::new(LevelFilter::Warn).with_base_url(mock_server.uri());
        config.user_agent = browser.to_string();

        Mock::given(method("GET"))
            .and(path("/api/ticket/facility/8"))
            .and(UserAgentIs(browser.to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "facility_name": "Y" })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = RecGovClient::new(config).unwrap();
        assert_eq!(client.facility_name(8).await.unwrap(), "Y");
    }
}
