use crate::{
    Config,
    model::{ForecastSample, WeatherSnapshot},
    provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// Host serving condition icons by code.
pub const ICON_BASE_URL: &str = "https://openweathermap.org/img/wn";

/// Display URL for a provider icon code.
pub fn icon_url(icon_code: &str) -> String {
    format!("{ICON_BASE_URL}/{icon_code}@2x.png")
}

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn get_current_weather(
        &self,
        city_name: &str,
        country_code: &str,
    ) -> anyhow::Result<WeatherSnapshot>;

    /// 3-hourly samples in the provider's order.
    async fn get_forecast(
        &self,
        city_name: &str,
        country_code: &str,
    ) -> anyhow::Result<Vec<ForecastSample>>;
}

/// Construct the OpenWeather provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<OpenWeatherProvider> {
    let api_key = config.api_key.as_deref().ok_or_else(|| {
        anyhow::anyhow!(
            "No OpenWeather API key configured.\n\
                 Hint: run `weather-dashboard configure` or set OPENWEATHER_API_KEY."
        )
    })?;

    let provider = match config.base_url.as_deref() {
        Some(base_url) => OpenWeatherProvider::with_base_url(api_key.to_owned(), base_url),
        None => OpenWeatherProvider::new(api_key.to_owned()),
    };

    Ok(provider)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_url_uses_static_host() {
        assert_eq!(icon_url("10d"), "https://openweathermap.org/img/wn/10d@2x.png");
    }

    #[test]
    fn provider_from_config_errors_when_missing_api_key() {
        let cfg = Config::default();
        let err = provider_from_config(&cfg).unwrap_err();
        assert!(err.to_string().contains("No OpenWeather API key configured"));
        assert!(err.to_string().contains("weather-dashboard configure"));
    }

    #[test]
    fn provider_from_config_uses_default_base_url() {
        let cfg = Config {
            api_key: Some("KEY".into()),
            base_url: None,
        };
        let provider = provider_from_config(&cfg).unwrap();
        assert_eq!(provider.base_url(), openweather::DEFAULT_BASE_URL);
    }

    #[test]
    fn provider_from_config_honors_base_url_override() {
        let cfg = Config {
            api_key: Some("KEY".into()),
            base_url: Some("http://localhost:9000/data/2.5/".into()),
        };
        let provider = provider_from_config(&cfg).unwrap();
        assert_eq!(provider.base_url(), "http://localhost:9000/data/2.5");
    }
}
