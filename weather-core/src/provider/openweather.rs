use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::model::{ForecastSample, WeatherSnapshot};

use super::WeatherProvider;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: String, base_url: &str) -> Self {
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        city_name: &str,
        country_code: &str,
    ) -> Result<T> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let location = format!("{city_name},{country_code}");

        tracing::debug!(%url, %location, "requesting OpenWeather {endpoint}");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", location.as_str()),
                ("units", "metric"),
                ("appid", self.api_key.as_str()),
                ("lang", "en"),
            ])
            .send()
            .await
            .with_context(|| format!("Failed to send request to OpenWeather ({endpoint})"))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .with_context(|| format!("Failed to read OpenWeather {endpoint} response body"))?;

        if !status.is_success() {
            return Err(anyhow!(
                "OpenWeather {} request for {} failed with status {}: {}",
                endpoint,
                location,
                status,
                truncate_body(&body),
            ));
        }

        serde_json::from_str(&body)
            .with_context(|| format!("Failed to parse OpenWeather {endpoint} JSON"))
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    #[serde(default)]
    feels_like: f64,
    #[serde(default)]
    humidity: u8,
    #[serde(default)]
    pressure: u32,
}

#[derive(Debug, Default, Deserialize)]
struct OwWeather {
    #[serde(default)]
    main: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    icon: String,
}

#[derive(Debug, Default, Deserialize)]
struct OwWind {
    #[serde(default)]
    speed: f64,
    #[serde(default)]
    deg: f64,
}

#[derive(Debug, Default, Deserialize)]
struct OwClouds {
    #[serde(default)]
    all: u8,
}

#[derive(Debug, Deserialize)]
struct OwVolume {
    #[serde(rename = "3h")]
    three_hours: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwMain,
    #[serde(default)]
    weather: Vec<OwWeather>,
    #[serde(default)]
    wind: OwWind,
    #[serde(default)]
    clouds: OwClouds,
    rain: Option<OwVolume>,
    snow: Option<OwVolume>,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    dt: i64,
    main: OwMain,
    #[serde(default)]
    weather: Vec<OwWeather>,
    #[serde(default)]
    pop: f64,
    #[serde(default)]
    wind: OwWind,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    list: Vec<OwForecastEntry>,
}

impl From<OwCurrentResponse> for WeatherSnapshot {
    fn from(parsed: OwCurrentResponse) -> Self {
        let condition = parsed.weather.into_iter().next().unwrap_or_default();

        WeatherSnapshot {
            name: parsed.name,
            temperature: parsed.main.temp,
            feels_like: parsed.main.feels_like,
            humidity_pct: parsed.main.humidity,
            pressure_hpa: parsed.main.pressure,
            condition_main: condition.main,
            description: condition.description,
            icon: condition.icon,
            wind_speed: parsed.wind.speed,
            wind_direction_degrees: parsed.wind.deg,
            cloudiness_pct: parsed.clouds.all,
            rain_3h: parsed.rain.and_then(|v| v.three_hours),
            snow_3h: parsed.snow.and_then(|v| v.three_hours),
        }
    }
}

impl From<OwForecastEntry> for ForecastSample {
    fn from(entry: OwForecastEntry) -> Self {
        let condition = entry.weather.into_iter().next().unwrap_or_default();

        ForecastSample {
            timestamp_seconds: entry.dt,
            temperature: entry.main.temp,
            condition_main: condition.main,
            condition_icon: condition.icon,
            precipitation_probability: entry.pop,
            wind_speed: entry.wind.speed,
            wind_direction_degrees: entry.wind.deg,
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn get_current_weather(
        &self,
        city_name: &str,
        country_code: &str,
    ) -> Result<WeatherSnapshot> {
        let parsed: OwCurrentResponse = self.get_json("weather", city_name, country_code).await?;
        Ok(parsed.into())
    }

    async fn get_forecast(
        &self,
        city_name: &str,
        country_code: &str,
    ) -> Result<Vec<ForecastSample>> {
        let parsed: OwForecastResponse = self.get_json("forecast", city_name, country_code).await?;
        Ok(parsed.list.into_iter().map(ForecastSample::from).collect())
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
