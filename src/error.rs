use thiserror::Error;

/// Upstream service a response came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upstream {
    Geocoding,
    Forecast,
}

impl std::fmt::Display for Upstream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Upstream::Geocoding => f.write_str("geocoding"),
            Upstream::Forecast => f.write_str("forecast"),
        }
    }
}

/// Failures raised while talking to the upstream weather services.
///
/// "City not found" and "forecast unavailable" are not errors; they are ordinary
/// values returned by the resolver and fetcher.
#[derive(Error, Debug)]
pub enum WeatherError {
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    #[error("{0}")]
    Transport(String),

    #[error("Malformed {upstream} response: {source}")]
    MalformedResponse {
        upstream: Upstream,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode forecast: {0}")]
    Encode(#[source] serde_json::Error),
}

impl WeatherError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    pub fn malformed(upstream: Upstream, source: serde_json::Error) -> Self {
        Self::MalformedResponse { upstream, source }
    }

    pub fn is_malformed_response(&self) -> bool {
        matches!(self, Self::MalformedResponse { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_message_is_verbatim() {
        let err = WeatherError::transport("Network error");
        assert_eq!(err.to_string(), "Network error");
        assert!(!err.is_malformed_response());
    }

    #[test]
    fn test_malformed_response_names_upstream() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = WeatherError::malformed(Upstream::Forecast, source);

        assert!(err.is_malformed_response());
        assert!(err.to_string().starts_with("Malformed forecast response: "));
    }
}
