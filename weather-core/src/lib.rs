//! Core library for the `weather-dashboard` CLI.
//!
//! This crate defines:
//! - The static catalog of Polish cities
//! - Forecast condensing into daily summaries
//! - The city-list view model and dashboard state transitions
//! - Favorites and their key-value persistence
//! - Configuration, the OpenWeather provider and the concurrent fetch batch
//!
//! It is used by `weather-dashboard`, but can also be reused by other front ends.

pub mod catalog;
pub mod config;
pub mod error;
pub mod favorites;
pub mod fetch;
pub mod forecast;
pub mod model;
pub mod provider;
pub mod state;
pub mod store;
pub mod view;

pub use config::Config;
pub use error::StoreError;
pub use favorites::FavoriteSet;
pub use fetch::WeatherBook;
pub use model::{City, CityViewState, DailySummary, ForecastSample, WeatherSnapshot, WindDirection};
pub use provider::WeatherProvider;
pub use state::{Action, DashboardState};
pub use store::{FileStore, KeyValueStore, MemoryStore};
