use std::sync::Arc;

use crate::constants::{CURRENT_FIELDS, HOURLY_FIELDS};
use crate::error::{Upstream, WeatherError};
use crate::models::ForecastData;
use crate::transport::HttpTransport;

/// Fetches current conditions and today's hourly data for a coordinate pair
#[derive(Clone)]
pub struct ForecastFetcher {
    transport: Arc<dyn HttpTransport>,
    base_url: String,
}

impl ForecastFetcher {
    pub fn new(transport: Arc<dyn HttpTransport>, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
        }
    }

    pub fn request_url(&self, latitude: f64, longitude: f64) -> String {
        format!(
            "{}?latitude={}&longitude={}&current={}&hourly={}&forecast_days=1",
            self.base_url, latitude, longitude, CURRENT_FIELDS, HOURLY_FIELDS
        )
    }

    /// Returns the upstream payload untouched, or `None` when the service answers
    /// with an error status.
    pub async fn fetch(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Option<ForecastData>, WeatherError> {
        let response = self
            .transport
            .get(&self.request_url(latitude, longitude))
            .await?;

        if response.is_error_status() {
            tracing::debug!(
                "Forecast for {}, {} unavailable: status {}",
                latitude,
                longitude,
                response.status
            );
            return Ok(None);
        }

        serde_json::from_str(&response.body)
            .map(Some)
            .map_err(|e| WeatherError::malformed(Upstream::Forecast, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::stub::{Reply, StubTransport};
    use serde_json::json;

    const BASE: &str = "https://forecast.test/v1/forecast";

    fn stub_fetcher(reply: Reply) -> (ForecastFetcher, Arc<StubTransport>) {
        let transport = Arc::new(StubTransport::new().route(BASE, reply));
        (ForecastFetcher::new(transport.clone(), BASE), transport)
    }

    #[test]
    fn test_request_url() {
        let (fetcher, _) = stub_fetcher(Reply::ok("{}"));
        assert_eq!(
            fetcher.request_url(40.7128, -74.006),
            "https://forecast.test/v1/forecast?latitude=40.7128&longitude=-74.006\
             &current=temperature_2m,relative_humidity_2m,apparent_temperature,precipitation,weather_code\
             &hourly=temperature_2m,precipitation&forecast_days=1"
        );
        assert!(fetcher.request_url(52.0, 13.0).contains("latitude=52&longitude=13&"));
    }

    #[tokio::test]
    async fn test_fetch_returns_payload_unmodified() {
        let payload = json!({
            "latitude": 40.71,
            "longitude": -74.0,
            "timezone": "GMT",
            "current": { "time": "2026-10-19T12:00", "temperature_2m": 20.5, "weather_code": 1 },
            "hourly": { "time": ["2026-10-19T00:00"], "temperature_2m": [18.2], "precipitation": [0] }
        });
        let (fetcher, transport) = stub_fetcher(Reply::json(&payload));

        let forecast = fetcher.fetch(40.7128, -74.006).await.unwrap();

        assert_eq!(forecast, Some(payload));
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_error_status_is_unavailable() {
        for status in [400, 429, 500] {
            let (fetcher, _) = stub_fetcher(Reply::Status(status, r#"{"error":true}"#.to_string()));
            assert_eq!(fetcher.fetch(40.7128, -74.006).await.unwrap(), None);
        }
    }

    #[tokio::test]
    async fn test_fetch_unparseable_body() {
        let (fetcher, _) = stub_fetcher(Reply::ok("not json"));
        let err = fetcher.fetch(40.7128, -74.006).await.unwrap_err();
        assert!(err.is_malformed_response());
    }

    #[tokio::test]
    async fn test_fetch_transport_failure_propagates() {
        let (fetcher, _) = stub_fetcher(Reply::Fail("API error".to_string()));
        let err = fetcher.fetch(40.7128, -74.006).await.unwrap_err();
        assert_eq!(err.to_string(), "API error");
    }
}
