use anyhow::Result;
use rmcp::{
    handler::server::{wrapper::Parameters, ServerHandler, tool::ToolRouter},
    model::{CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
    ErrorData as McpError,
};
use std::sync::Arc;

use crate::config::Config;
use crate::error::WeatherError;
use crate::forecast::ForecastFetcher;
use crate::formatters::{format_error, format_forecast, format_not_found};
use crate::geocoding::GeocodeResolver;
use crate::models::{GetWeatherRequest, ToolResult};
use crate::transport::{HttpTransport, ReqwestTransport};

/// Runs the city -> coordinates -> forecast pipeline and folds every outcome
/// into a single text envelope.
#[derive(Clone)]
pub struct WeatherOrchestrator {
    geocoder: GeocodeResolver,
    forecaster: ForecastFetcher,
}

impl WeatherOrchestrator {
    pub fn new(geocoder: GeocodeResolver, forecaster: ForecastFetcher) -> Self {
        Self {
            geocoder,
            forecaster,
        }
    }

    /// Wires both upstream clients to the same transport
    pub fn from_config(transport: Arc<dyn HttpTransport>, config: &Config) -> Self {
        Self::new(
            GeocodeResolver::new(transport.clone(), config.geocoding_url.clone()),
            ForecastFetcher::new(transport, config.forecast_url.clone()),
        )
    }

    /// Never fails: not-found, upstream errors and successes all become text.
    pub async fn get_weather_for_city(&self, city: &str) -> ToolResult {
        match self.lookup(city).await {
            Ok(Some(forecast)) => ToolResult::text(forecast),
            Ok(None) => {
                tracing::info!("No usable location for city: {}", city);
                ToolResult::text(format_not_found(city))
            }
            Err(e) => {
                tracing::error!("Weather lookup for {} failed: {}", city, e);
                ToolResult::text(format_error(&e))
            }
        }
    }

    /// `Ok(None)` means the city did not resolve to non-zero coordinates
    async fn lookup(&self, city: &str) -> Result<Option<String>, WeatherError> {
        let location = self.geocoder.resolve(city).await?;

        let Some(location) = location else {
            return Ok(None);
        };
        let Some((latitude, longitude)) = location.coordinates() else {
            return Ok(None);
        };

        tracing::debug!(
            "Resolved {} to {} ({}) at {}, {}",
            city,
            location.name.as_deref().unwrap_or("?"),
            location.country.as_deref().unwrap_or("?"),
            latitude,
            longitude
        );

        let forecast = self.forecaster.fetch(latitude, longitude).await?;
        format_forecast(forecast.as_ref()).map(Some)
    }
}

impl From<ToolResult> for CallToolResult {
    fn from(result: ToolResult) -> Self {
        CallToolResult::success(
            result
                .content
                .into_iter()
                .map(|block| Content::text(block.text))
                .collect(),
        )
    }
}

/// MCP server exposing the city weather lookup as a tool
#[derive(Clone)]
pub struct CityWeather {
    orchestrator: WeatherOrchestrator,
    tool_router: ToolRouter<Self>,
}

impl CityWeather {
    /// Creates a server talking to the endpoints in `config`
    pub fn new(config: &Config) -> Result<Self> {
        let transport = Arc::new(ReqwestTransport::new()?);
        Ok(Self::with_orchestrator(WeatherOrchestrator::from_config(
            transport, config,
        )))
    }

    pub fn with_orchestrator(orchestrator: WeatherOrchestrator) -> Self {
        Self {
            orchestrator,
            tool_router: Self::tool_router(),
        }
    }
}

#[tool_handler]
impl ServerHandler for CityWeather {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "Weather Server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "Looks up current conditions and today's hourly forecast for a city by name, \
                using the Open-Meteo geocoding and forecast APIs."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl CityWeather {
    /// Gets the weather for a city by name
    #[tool(name = "get-weather", description = "Tool to get the weather of a city")]
    async fn get_weather(
        &self,
        Parameters(request): Parameters<GetWeatherRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Getting weather for city: {}", request.city);

        let result = self.orchestrator.get_weather_for_city(&request.city).await;

        Ok(result.into())
    }
}
