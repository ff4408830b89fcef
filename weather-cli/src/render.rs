//! Plain-text rendering of dashboard screens.

use std::fmt::Write as _;

use chrono::{Datelike, Local};
use weather_dashboard_core::{
    City, CityViewState, DailySummary, DashboardState, WeatherBook, WeatherSnapshot,
    WindDirection, forecast::round_temperature, provider::icon_url,
};

pub fn header() -> String {
    "Weather Forecast for Poland\nSelect a city to see details\n".to_string()
}

pub fn footer() -> String {
    format!(
        "Weather data from OpenWeatherMap\n© {} Weather Forecast PL\n",
        Local::now().year()
    )
}

pub fn showing_count(visible: usize, total: usize) -> String {
    format!("Showing {visible} of {total} cities")
}

pub fn city_card(
    city: &City,
    weather: Option<&WeatherSnapshot>,
    selected: bool,
    favorite: bool,
) -> String {
    let marker = if selected { "> " } else { "  " };
    let star = if favorite { "★" } else { "☆" };
    let mut out = format!("{marker}{star} {}\n", city.name);

    match weather {
        Some(w) => {
            let _ = writeln!(out, "    {}°C  {}", round_temperature(w.temperature), w.description);
            let _ = writeln!(
                out,
                "    Humidity: {}%  Wind: {} m/s",
                w.humidity_pct,
                w.wind_speed.round()
            );
            let _ = writeln!(out, "    {}", icon_url(&w.icon));
        }
        None => out.push_str("    No data available\n"),
    }

    out
}

/// Favorites panel, or `None` when there are no favorites.
pub fn favorites_panel(favorites: &[City], book: Option<&WeatherBook>) -> Option<String> {
    if favorites.is_empty() {
        return None;
    }

    let mut out = format!("⭐ Favorite Cities ({})\n", favorites.len());
    for city in favorites {
        match book.and_then(|b| b.weather_for(&city.name)) {
            Some(w) => {
                let _ = writeln!(out, "  {}  {}°C", city.name, round_temperature(w.temperature));
            }
            None => {
                let _ = writeln!(out, "  {}", city.name);
            }
        }
    }
    Some(out)
}

/// City cards for the current view plus the paging hints.
pub fn city_list(
    state: &DashboardState,
    view: &CityViewState,
    catalog_len: usize,
    book: &WeatherBook,
) -> String {
    let mut out = String::new();

    if view.visible_cities.is_empty() {
        let _ = writeln!(out, "No cities found for \"{}\"", state.query);
        return out;
    }

    for city in &view.visible_cities {
        out.push_str(&city_card(
            city,
            book.weather_for(&city.name),
            state.is_selected(city.id),
            state.is_favorite(city.id),
        ));
    }

    // Any typed query hides the count, even one that is only whitespace.
    if state.query.is_empty() {
        let _ = writeln!(out, "{}", showing_count(view.visible_cities.len(), catalog_len));
    }
    if view.has_more {
        let _ = writeln!(
            out,
            "More cities available: choose \"Show more cities\" (+{})",
            view.next_page_len
        );
    }

    out
}

pub fn weather_details(w: &WeatherSnapshot) -> String {
    let mut out = format!("Current Weather in {}\n", w.name);

    let _ = writeln!(
        out,
        "  {}°C (feels like {}°C)",
        round_temperature(w.temperature),
        round_temperature(w.feels_like)
    );
    let _ = writeln!(out, "  {}: {}", w.condition_main, w.description);
    let _ = writeln!(out, "  Icon: {}", icon_url(&w.icon));
    let _ = writeln!(out, "  Humidity:   {}%", w.humidity_pct);
    let _ = writeln!(out, "  Pressure:   {} hPa", w.pressure_hpa);
    let _ = writeln!(
        out,
        "  Wind:       {} m/s ({})",
        w.wind_speed.round(),
        WindDirection::from_degrees(w.wind_direction_degrees)
    );
    let _ = writeln!(out, "  Cloudiness: {}%", w.cloudiness_pct);
    if let Some(rain) = w.rain_3h {
        let _ = writeln!(out, "  Rain (3h):  {rain} mm");
    }
    if let Some(snow) = w.snow_3h {
        let _ = writeln!(out, "  Snow (3h):  {snow} mm");
    }

    out
}

pub fn forecast(days: &[DailySummary]) -> String {
    let mut out = String::from("5-Day Forecast\n");

    if days.is_empty() {
        out.push_str("  No forecast available\n");
        return out;
    }

    for day in days {
        let _ = writeln!(
            out,
            "  {:<10} {:>4}°C  {:<12} Precip: {:>3}%  Wind: {} m/s {}",
            day.day_label,
            day.temperature,
            day.condition_main,
            day.precipitation_percent,
            day.wind_speed.round(),
            day.wind_direction,
        );
        let _ = writeln!(out, "             {}", icon_url(&day.icon));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use weather_dashboard_core::{Action, FavoriteSet, view};

    fn snapshot(name: &str) -> WeatherSnapshot {
        WeatherSnapshot {
            name: name.to_string(),
            temperature: 21.6,
            feels_like: 20.4,
            humidity_pct: 55,
            pressure_hpa: 1018,
            condition_main: "Clear".into(),
            description: "clear sky".into(),
            icon: "01d".into(),
            wind_speed: 3.6,
            wind_direction_degrees: 190.0,
            cloudiness_pct: 0,
            rain_3h: Some(0.4),
            snow_3h: None,
        }
    }

    fn catalog() -> Vec<City> {
        (1..=10).map(|id| City::new(id, &format!("City {id}"), "PL")).collect()
    }

    #[test]
    fn card_without_data_says_so() {
        let card = city_card(&City::new(1, "Opole", "PL"), None, false, false);
        assert!(card.contains("Opole"));
        assert!(card.contains("No data available"));
        assert!(card.contains('☆'));
    }

    #[test]
    fn card_with_data_rounds_values() {
        let card = city_card(&City::new(1, "Opole", "PL"), Some(&snapshot("Opole")), true, true);
        assert!(card.starts_with("> ★ Opole"));
        assert!(card.contains("22°C"));
        assert!(card.contains("Humidity: 55%"));
        assert!(card.contains("Wind: 4 m/s"));
        assert!(card.contains("https://openweathermap.org/img/wn/01d@2x.png"));
    }

    #[test]
    fn list_shows_count_and_more_hint() {
        let state = DashboardState::default();
        let cities = catalog();
        let out = city_list(&state, &state.view(&cities), cities.len(), &WeatherBook::default());

        assert!(out.contains("Showing 4 of 10 cities"));
        assert!(out.contains("Show more cities\" (+6)"));
    }

    #[test]
    fn whitespace_query_hides_count_but_keeps_first_page() {
        let state = DashboardState::default().apply(Action::SetQuery("  ".into()));
        let cities = catalog();
        let out = city_list(&state, &state.view(&cities), cities.len(), &WeatherBook::default());

        assert!(out.contains("City 4"));
        assert!(!out.contains("City 5"));
        assert!(!out.contains("Showing"));
        assert!(out.contains("Show more cities"));
    }

    #[test]
    fn list_without_matches_names_query() {
        let state = DashboardState::default().apply(Action::SetQuery("Paris".into()));
        let cities = catalog();
        let out = city_list(&state, &state.view(&cities), cities.len(), &WeatherBook::default());

        assert_eq!(out, "No cities found for \"Paris\"\n");
    }

    #[test]
    fn filtering_hides_count_line() {
        let state = DashboardState::default().apply(Action::SetQuery("city 1".into()));
        let cities = catalog();
        let out = city_list(&state, &state.view(&cities), cities.len(), &WeatherBook::default());

        assert!(out.contains("City 10"));
        assert!(!out.contains("Showing"));
    }

    #[test]
    fn favorites_panel_includes_temperature_when_known() {
        let cities = catalog();
        let mut book = WeatherBook::default();
        book.insert_weather("City 2", snapshot("City 2"));
        let favs = view::favorite_cities(&cities, &FavoriteSet::from_ids([2, 5]));

        let panel = favorites_panel(&favs, Some(&book)).unwrap();
        assert!(panel.contains("Favorite Cities (2)"));
        assert!(panel.contains("City 2  22°C"));
        assert!(panel.contains("  City 5\n"));

        assert!(favorites_panel(&[], Some(&book)).is_none());
    }

    #[test]
    fn details_include_optional_precipitation() {
        let out = weather_details(&snapshot("Torun"));
        assert!(out.contains("Current Weather in Torun"));
        assert!(out.contains("Pressure:   1018 hPa"));
        assert!(out.contains("(S)"));
        assert!(out.contains("Rain (3h):  0.4 mm"));
        assert!(!out.contains("Snow"));
    }

    #[test]
    fn forecast_rows_show_precip_and_wind() {
        let days = vec![DailySummary {
            day_label: "Monday".into(),
            temperature: 8,
            condition_main: "Rain".into(),
            icon: "10d".into(),
            precipitation_percent: 60,
            wind_speed: 5.2,
            wind_direction: WindDirection::W,
        }];
        let out = forecast(&days);

        assert!(out.contains("Monday"));
        assert!(out.contains("Precip:  60%"));
        assert!(out.contains("Wind: 5 m/s W"));
        assert!(out.contains("10d@2x.png"));
        assert!(forecast(&[]).contains("No forecast available"));
    }
}
