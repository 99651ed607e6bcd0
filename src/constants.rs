/// User agent string for HTTP requests
pub const USER_AGENT: &str = "mcp-city-weather/0.1.0";

/// Open-Meteo geocoding search endpoint
pub const GEOCODING_API_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";

/// Open-Meteo forecast endpoint
pub const FORECAST_API_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Language tag sent with every geocoding lookup
pub const GEOCODING_LANGUAGE: &str = "en";

/// Current-conditions variables requested from the forecast endpoint
pub const CURRENT_FIELDS: &str =
    "temperature_2m,relative_humidity_2m,apparent_temperature,precipitation,weather_code";

/// Hourly variables requested from the forecast endpoint
pub const HOURLY_FIELDS: &str = "temperature_2m,precipitation";

/// Environment variable overriding the geocoding endpoint
pub const GEOCODING_URL_ENV: &str = "CITY_WEATHER_GEOCODING_URL";

/// Environment variable overriding the forecast endpoint
pub const FORECAST_URL_ENV: &str = "CITY_WEATHER_FORECAST_URL";
