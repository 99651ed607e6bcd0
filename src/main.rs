use anyhow::Result;
use mcp_city_weather::{CityWeather, Config};
use rmcp::ServiceExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mcp_city_weather=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    tracing::info!(
        "Using geocoding endpoint {} and forecast endpoint {}",
        config.geocoding_url,
        config.forecast_url
    );

    let weather = CityWeather::new(&config)?;
    let server = weather.serve(rmcp::transport::stdio()).await?;
    tracing::info!("Weather server is running");

    server.waiting().await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}
