//! City weather lookup over the Model Context Protocol.
//!
//! A city name is resolved to coordinates with the Open-Meteo geocoding API, the
//! coordinates are sent to the Open-Meteo forecast API, and the outcome is
//! returned to the MCP host as a single text block.

pub mod config;
pub mod constants;
pub mod error;
pub mod forecast;
pub mod formatters;
pub mod geocoding;
pub mod models;
pub mod service;
pub mod transport;

pub use config::Config;
pub use error::WeatherError;
pub use service::{CityWeather, WeatherOrchestrator};
