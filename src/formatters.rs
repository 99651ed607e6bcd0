use crate::error::WeatherError;
use serde_json::Value;

use crate::models::ForecastData;

/// Message returned when a city cannot be resolved to usable coordinates
pub fn format_not_found(city: &str) -> String {
    format!(
        "Sorry, I couldn't find a city named \"{}\". Please check the spelling and try again.",
        city
    )
}

/// Message returned when either upstream call fails
pub fn format_error(error: &WeatherError) -> String {
    format!("Error fetching weather data: {}", error)
}

/// Pretty-prints the forecast with 2-space indentation; an unavailable forecast
/// renders as `null`.
pub fn format_forecast(forecast: Option<&ForecastData>) -> Result<String, WeatherError> {
    let forecast = forecast.cloned().map(integral_floats_as_integers);
    serde_json::to_string_pretty(&forecast).map_err(WeatherError::Encode)
}

/// Largest magnitude at which every integer is exactly representable as `f64`
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Rewrites whole-number floats such as `38.0` as integers so they print as `38`
fn integral_floats_as_integers(value: Value) -> Value {
    match value {
        Value::Number(number) => match number.as_f64() {
            Some(f) if number.is_f64() && f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER => {
                Value::from(f as i64)
            }
            _ => Value::Number(number),
        },
        Value::Array(items) => {
            Value::Array(items.into_iter().map(integral_floats_as_integers).collect())
        }
        Value::Object(fields) => Value::Object(
            fields
                .into_iter()
                .map(|(key, value)| (key, integral_floats_as_integers(value)))
                .collect(),
        ),
        other => other,
    }
}
