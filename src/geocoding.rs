use serde_json::Value;
use std::sync::Arc;

use crate::constants::GEOCODING_LANGUAGE;
use crate::error::{Upstream, WeatherError};
use crate::models::{GeoLocation, GeocodingResponse};
use crate::transport::HttpTransport;

/// Turns a free-text city name into the best-matching location
#[derive(Clone)]
pub struct GeocodeResolver {
    transport: Arc<dyn HttpTransport>,
    base_url: String,
}

impl GeocodeResolver {
    pub fn new(transport: Arc<dyn HttpTransport>, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
        }
    }

    /// Builds the search URL; the city name is inserted as typed
    pub fn request_url(&self, city: &str) -> String {
        format!(
            "{}?name={}&count=1&language={}&format=json",
            self.base_url, city, GEOCODING_LANGUAGE
        )
    }

    /// Looks up `city` and returns the first candidate, or `None` when the service
    /// has no match or answers with an error status.
    pub async fn resolve(&self, city: &str) -> Result<Option<GeoLocation>, WeatherError> {
        let response = self.transport.get(&self.request_url(city)).await?;

        if response.is_error_status() {
            tracing::debug!(
                "Geocoding lookup for {:?} returned status {}",
                city,
                response.status
            );
            return Ok(None);
        }

        let data: GeocodingResponse = serde_json::from_str(&response.body)
            .map_err(|e| WeatherError::malformed(Upstream::Geocoding, e))?;

        first_candidate(data)
    }
}

fn first_candidate(data: GeocodingResponse) -> Result<Option<GeoLocation>, WeatherError> {
    let candidate = match data.results {
        Some(Value::Array(results)) => results.into_iter().next(),
        _ => None,
    };

    match candidate {
        None | Some(Value::Null) => Ok(None),
        Some(value) => serde_json::from_value(value)
            .map(Some)
            .map_err(|e| WeatherError::malformed(Upstream::Geocoding, e)),
    }
}
