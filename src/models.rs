use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// Open-Meteo Geocoding Models
// ============================================================================

/// Top-level geocoding search response.
///
/// `results` is kept untyped so that an absent, null or non-list value can be
/// treated as "no match" instead of a decode failure.
#[derive(Debug, Deserialize)]
pub struct GeocodingResponse {
    #[serde(default)]
    pub results: Option<serde_json::Value>,
}

/// Best-match candidate returned by the geocoding service.
///
/// Only the coordinates are decoded strictly; a descriptive field of an
/// unexpected type is dropped to `None`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeoLocation {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub elevation: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub country_code: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub timezone: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub population: Option<u64>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

impl GeoLocation {
    /// Returns `(latitude, longitude)` when both are present and non-zero.
    ///
    /// A coordinate of exactly `0` counts as missing, so places on the equator or
    /// the prime meridian are reported as not found.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        let truthy = |value: Option<f64>| value.filter(|v| *v != 0.0 && !v.is_nan());
        Some((truthy(self.latitude)?, truthy(self.longitude)?))
    }
}

// ============================================================================
// Open-Meteo Forecast Models
// ============================================================================

/// Forecast payload relayed verbatim from the upstream service
pub type ForecastData = serde_json::Value;

// ============================================================================
// MCP Tool Models
// ============================================================================

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetWeatherRequest {
    #[schemars(description = "The name of the city to get the weather for")]
    pub city: String,
}

/// Uniform envelope returned for every outcome of a city lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolResult {
    pub content: Vec<TextBlock>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "text")]
pub struct TextBlock {
    pub text: String,
}

impl ToolResult {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![TextBlock { text: text.into() }],
        }
    }
}
