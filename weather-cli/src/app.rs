//! Shared setup for commands: config, favorites store and weather fetching.

use std::sync::Arc;

use weather_dashboard_core::{
    City, Config, FileStore, KeyValueStore, MemoryStore, WeatherBook, WeatherProvider,
    fetch::{self, CityFetch, FETCH_LIMIT},
    provider::provider_from_config,
};

/// Open the on-disk favorites store, falling back to memory when no data directory exists.
pub fn open_store() -> Box<dyn KeyValueStore> {
    match Config::data_dir() {
        Ok(dir) => Box::new(FileStore::in_dir(&dir)),
        Err(err) => {
            tracing::warn!(error = %err, "no data directory, favorites will not persist");
            Box::new(MemoryStore::new())
        }
    }
}

/// Build the provider, or `None` with a logged hint when unconfigured.
fn provider(config: &Config) -> Option<Arc<dyn WeatherProvider>> {
    match provider_from_config(config) {
        Ok(p) => Some(Arc::new(p)),
        Err(err) => {
            tracing::warn!("{err}");
            None
        }
    }
}

/// Startup batch over the front of the catalog. Always yields a book, possibly empty.
pub async fn load_book(config: &Config, catalog: &[City]) -> WeatherBook {
    let Some(provider) = provider(config) else {
        return WeatherBook::default();
    };

    let batch = &catalog[..catalog.len().min(FETCH_LIMIT)];
    fetch::fetch_all(provider, batch).await
}

/// Fetch a single city on demand.
pub async fn load_city(config: &Config, city: &City) -> CityFetch {
    match provider(config) {
        Some(provider) => fetch::fetch_city(provider.as_ref(), city).await,
        None => CityFetch {
            city_name: city.name.clone(),
            weather: None,
            forecast: None,
        },
    }
}
