//! Concurrent startup fetch of weather and forecasts for a batch of cities.
//!
//! Each city is fetched in its own task. A failure, or even a panic, for one
//! city leaves only that city without data; the batch itself cannot fail.

use std::{collections::HashMap, sync::Arc};

use tokio::task::JoinSet;

use crate::{
    WeatherProvider,
    model::{City, ForecastSample, WeatherSnapshot},
};

/// Cities fetched at startup, from the front of the catalog.
pub const FETCH_LIMIT: usize = 20;

/// Fetched data keyed by city name. Replaced wholesale on refetch.
#[derive(Debug, Clone, Default)]
pub struct WeatherBook {
    weather: HashMap<String, WeatherSnapshot>,
    forecasts: HashMap<String, Vec<ForecastSample>>,
}

impl WeatherBook {
    pub fn weather_for(&self, city_name: &str) -> Option<&WeatherSnapshot> {
        self.weather.get(city_name)
    }

    pub fn forecast_for(&self, city_name: &str) -> Option<&[ForecastSample]> {
        self.forecasts.get(city_name).map(Vec::as_slice)
    }

    pub fn insert_weather(&mut self, city_name: &str, snapshot: WeatherSnapshot) {
        self.weather.insert(city_name.to_string(), snapshot);
    }

    pub fn insert_forecast(&mut self, city_name: &str, samples: Vec<ForecastSample>) {
        self.forecasts.insert(city_name.to_string(), samples);
    }

    pub fn weather_count(&self) -> usize {
        self.weather.len()
    }

    pub fn forecast_count(&self) -> usize {
        self.forecasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weather.is_empty() && self.forecasts.is_empty()
    }
}

/// Outcome for one city. Either half may be missing independently.
#[derive(Debug)]
pub struct CityFetch {
    pub city_name: String,
    pub weather: Option<WeatherSnapshot>,
    pub forecast: Option<Vec<ForecastSample>>,
}

/// Fetch current weather and forecast for a single city, degrading failures to `None`.
pub async fn fetch_city(provider: &dyn WeatherProvider, city: &City) -> CityFetch {
    let (weather, forecast) = tokio::join!(
        provider.get_current_weather(&city.name, &city.country),
        provider.get_forecast(&city.name, &city.country),
    );

    let weather = weather
        .inspect_err(|err| {
            tracing::warn!(
                city = %city.name,
                error = %format!("{err:#}"),
                "current weather unavailable"
            );
        })
        .ok();
    let forecast = forecast
        .inspect_err(|err| {
            tracing::warn!(city = %city.name, error = %format!("{err:#}"), "forecast unavailable");
        })
        .ok();

    CityFetch {
        city_name: city.name.clone(),
        weather,
        forecast,
    }
}

/// Fetch every city concurrently and join all results.
pub async fn fetch_all(provider: Arc<dyn WeatherProvider>, cities: &[City]) -> WeatherBook {
    let mut tasks = JoinSet::new();

    for city in cities.iter().cloned() {
        let provider = Arc::clone(&provider);
        tasks.spawn(async move { fetch_city(provider.as_ref(), &city).await });
    }

    let mut book = WeatherBook::default();

    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(CityFetch {
                city_name,
                weather,
                forecast,
            }) => {
                if let Some(snapshot) = weather {
                    book.insert_weather(&city_name, snapshot);
                }
                if let Some(samples) = forecast {
                    book.insert_forecast(&city_name, samples);
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "city fetch task did not complete");
            }
        }
    }

    tracing::info!(
        requested = cities.len(),
        weather = book.weather_count(),
        forecasts = book.forecast_count(),
        "weather batch finished"
    );

    book
}
