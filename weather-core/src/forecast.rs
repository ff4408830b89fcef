//! Condenses the provider's 3-hourly forecast into one summary per day.
//!
//! Days are keyed by a label derived from each sample's timestamp. The first
//! sample seen for a label becomes that day's summary; later samples with the
//! same label are ignored, even when they reappear after other days.

use std::collections::HashSet;

use chrono::{Local, TimeZone};

use crate::model::{DailySummary, ForecastSample, WindDirection};

pub const DEFAULT_MAX_DAYS: usize = 5;

/// English weekday name of `timestamp_seconds` on the local calendar.
///
/// This uses the machine's timezone rather than the city's own.
/// Returns `None` when the timestamp is outside chrono's range.
pub fn weekday_label(timestamp_seconds: i64) -> Option<String> {
    Local
        .timestamp_opt(timestamp_seconds, 0)
        .earliest()
        .map(|dt| dt.format("%A").to_string())
}

/// Summarize using local weekday names as day keys.
pub fn summarize(samples: &[ForecastSample], max_days: usize) -> Vec<DailySummary> {
    summarize_with(samples, max_days, weekday_label)
}

/// Summarize with an injected day-key function.
pub fn summarize_with<F>(
    samples: &[ForecastSample],
    max_days: usize,
    day_key: F,
) -> Vec<DailySummary>
where
    F: Fn(i64) -> Option<String>,
{
    let mut seen = HashSet::new();
    let mut days = Vec::with_capacity(max_days.min(samples.len()));

    for sample in samples {
        if days.len() >= max_days {
            break;
        }

        let Some(label) = day_key(sample.timestamp_seconds) else {
            tracing::debug!(
                timestamp = sample.timestamp_seconds,
                "skipping forecast sample without a day key"
            );
            continue;
        };

        if seen.contains(&label) {
            continue;
        }

        seen.insert(label.clone());
        days.push(daily_summary(label, sample));
    }

    days
}

fn daily_summary(day_label: String, sample: &ForecastSample) -> DailySummary {
    DailySummary {
        day_label,
        temperature: round_temperature(sample.temperature),
        condition_main: sample.condition_main.clone(),
        icon: sample.condition_icon.clone(),
        precipitation_percent: precipitation_percent(sample.precipitation_probability),
        wind_speed: sample.wind_speed,
        wind_direction: WindDirection::from_degrees(sample.wind_direction_degrees),
    }
}

/// Nearest whole degree, with halves rounded up: -2.5 becomes -2, 2.5 becomes 3.
pub fn round_temperature(celsius: f64) -> i32 {
    (celsius + 0.5).floor() as i32
}

/// Probability in `[0, 1]` to a whole percentage, clamped to `[0, 100]`.
pub fn precipitation_percent(probability: f64) -> u8 {
    (probability * 100.0).round().clamp(0.0, 100.0) as u8
}
