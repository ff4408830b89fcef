use serde::{Deserialize, Serialize};

/// A city from the static catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub id: u32,
    pub name: String,
    pub country: String,
}

impl City {
    pub fn new(id: u32, name: &str, country: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            country: country.to_string(),
        }
    }
}

/// Current conditions for one city, as reported by the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub name: String,
    pub temperature: f64,
    pub feels_like: f64,
    pub humidity_pct: u8,
    pub pressure_hpa: u32,
    pub condition_main: String,
    pub description: String,
    pub icon: String,
    pub wind_speed: f64,
    pub wind_direction_degrees: f64,
    pub cloudiness_pct: u8,
    /// Rain volume over the last 3 hours, mm.
    pub rain_3h: Option<f64>,
    /// Snow volume over the last 3 hours, mm.
    pub snow_3h: Option<f64>,
}

/// One 3-hour forecast slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSample {
    pub timestamp_seconds: i64,
    pub temperature: f64,
    pub condition_main: String,
    pub condition_icon: String,
    /// Probability of precipitation in `[0, 1]`.
    pub precipitation_probability: f64,
    pub wind_speed: f64,
    pub wind_direction_degrees: f64,
}

/// 8-point compass label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WindDirection {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl WindDirection {
    const ORDER: [WindDirection; 8] = [
        WindDirection::N,
        WindDirection::NE,
        WindDirection::E,
        WindDirection::SE,
        WindDirection::S,
        WindDirection::SW,
        WindDirection::W,
        WindDirection::NW,
    ];

    /// Map meteorological degrees onto the compass: `round(deg / 45) mod 8`.
    ///
    /// Total over all `f64` input; non-finite values map to `N`.
    pub fn from_degrees(degrees: f64) -> Self {
        if !degrees.is_finite() {
            return WindDirection::N;
        }
        let index = ((degrees / 45.0).round() as i64).rem_euclid(8);
        Self::ORDER[index as usize]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WindDirection::N => "N",
            WindDirection::NE => "NE",
            WindDirection::E => "E",
            WindDirection::SE => "SE",
            WindDirection::S => "S",
            WindDirection::SW => "SW",
            WindDirection::W => "W",
            WindDirection::NW => "NW",
        }
    }
}

impl std::fmt::Display for WindDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One day of the condensed forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    pub day_label: String,
    pub temperature: i32,
    pub condition_main: String,
    pub icon: String,
    pub precipitation_percent: u8,
    pub wind_speed: f64,
    pub wind_direction: WindDirection,
}

/// Derived city list for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CityViewState {
    pub visible_cities: Vec<City>,
    pub has_more: bool,
    pub is_filtering: bool,
    /// Cities the next "show more" would add; zero unless `has_more`.
    pub next_page_len: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn north_covers_both_sides_of_zero() {
        for deg in [348.75, 350.0, 359.9, 360.0, 0.0, 10.0, 22.4] {
            assert_eq!(WindDirection::from_degrees(deg), WindDirection::N, "{deg}");
        }
    }

    #[test]
    fn cardinal_and_intercardinal_points() {
        assert_eq!(WindDirection::from_degrees(45.0), WindDirection::NE);
        assert_eq!(WindDirection::from_degrees(90.0), WindDirection::E);
        assert_eq!(WindDirection::from_degrees(135.0), WindDirection::SE);
        assert_eq!(WindDirection::from_degrees(180.0), WindDirection::S);
        assert_eq!(WindDirection::from_degrees(225.0), WindDirection::SW);
        assert_eq!(WindDirection::from_degrees(270.0), WindDirection::W);
        assert_eq!(WindDirection::from_degrees(315.0), WindDirection::NW);
    }

    #[test]
    fn direction_is_cyclic() {
        assert_eq!(
            WindDirection::from_degrees(360.0),
            WindDirection::from_degrees(0.0)
        );
        assert_eq!(
            WindDirection::from_degrees(405.0),
            WindDirection::from_degrees(45.0)
        );
        assert_eq!(WindDirection::from_degrees(-45.0), WindDirection::NW);
    }

    #[test]
    fn half_steps_round_away_from_zero() {
        assert_eq!(WindDirection::from_degrees(22.5), WindDirection::NE);
        assert_eq!(WindDirection::from_degrees(67.5), WindDirection::E);
    }

    #[test]
    fn non_finite_degrees_map_to_north() {
        assert_eq!(WindDirection::from_degrees(f64::NAN), WindDirection::N);
        assert_eq!(WindDirection::from_degrees(f64::INFINITY), WindDirection::N);
    }

    #[test]
    fn display_matches_label() {
        assert_eq!(WindDirection::SW.to_string(), "SW");
    }
}
