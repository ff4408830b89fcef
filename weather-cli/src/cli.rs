use anyhow::{Context, anyhow};
use clap::{Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode, Text};
use weather_dashboard_core::{
    Action, Config, DashboardState, catalog,
    favorites::{load_favorites, save_favorites},
    forecast::{DEFAULT_MAX_DAYS, summarize},
    view::INITIAL_REVEAL_COUNT,
};

use crate::{app, browse, render};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-dashboard", version, about = "Weather dashboard for Polish cities")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key.
    Configure,

    /// Print city cards for the current view.
    List {
        /// Case-insensitive city name filter; shows every match.
        #[arg(long, default_value = "")]
        query: String,

        /// Number of cities to show when not filtering.
        #[arg(long, default_value_t = INITIAL_REVEAL_COUNT)]
        reveal: usize,
    },

    /// Show current conditions and the 5-day forecast for a city.
    Show {
        /// City name, e.g. "Warsaw".
        city: String,
    },

    /// Add or remove a city from favorites.
    Favorite {
        /// City name, e.g. "Gdansk".
        city: String,
    },

    /// List favorite cities.
    Favorites,

    /// Interactive dashboard.
    Browse,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::List { query, reveal } => list(query, reveal).await,
            Command::Show { city } => show(&city).await,
            Command::Favorite { city } => toggle_favorite(&city),
            Command::Favorites => favorites(),
            Command::Browse => browse::run().await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    let base_url = Text::new("Base URL (leave empty for default):")
        .prompt()
        .context("Failed to read base URL")?;

    config.set_api_key(api_key);
    config.base_url = Some(base_url.trim().to_string()).filter(|u| !u.is_empty());
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn list(query: String, reveal: usize) -> anyhow::Result<()> {
    let config = Config::load_with_env()?;
    let cities = catalog::cities();
    let store = app::open_store();

    let mut state = DashboardState::new(load_favorites(store.as_ref()));
    state = state.apply(Action::SetQuery(query));
    state.reveal_count = reveal;

    let book = app::load_book(&config, &cities).await;
    let view = state.view(&cities);

    println!("{}", render::header());
    if let Some(panel) = render::favorites_panel(&state.favorite_cities(&cities), Some(&book)) {
        println!("{panel}");
    }
    print!("{}", render::city_list(&state, &view, cities.len(), &book));
    println!();
    print!("{}", render::footer());

    Ok(())
}

async fn show(name: &str) -> anyhow::Result<()> {
    let config = Config::load_with_env()?;
    let cities = catalog::cities();
    let city = catalog::find_by_name(&cities, name)
        .ok_or_else(|| anyhow!("Unknown city '{name}'. Try `weather-dashboard list`."))?;

    let fetched = app::load_city(&config, city).await;

    match fetched.weather {
        Some(weather) => {
            print!("{}", render::weather_details(&weather));
            if let Some(samples) = fetched.forecast {
                println!();
                print!("{}", render::forecast(&summarize(&samples, DEFAULT_MAX_DAYS)));
            }
        }
        None => println!("{}: No data available", city.name),
    }

    Ok(())
}

fn toggle_favorite(name: &str) -> anyhow::Result<()> {
    let cities = catalog::cities();
    let city = catalog::find_by_name(&cities, name)
        .ok_or_else(|| anyhow!("Unknown city '{name}'. Try `weather-dashboard list`."))?;

    let mut store = app::open_store();
    let mut favorites = load_favorites(store.as_ref());
    let added = favorites.toggle(city.id);
    save_favorites(store.as_mut(), &favorites);

    if added {
        println!("Added {} to favorites", city.name);
    } else {
        println!("Removed {} from favorites", city.name);
    }
    Ok(())
}

fn favorites() -> anyhow::Result<()> {
    let cities = catalog::cities();
    let store = app::open_store();
    let state = DashboardState::new(load_favorites(store.as_ref()));

    match render::favorites_panel(&state.favorite_cities(&cities), None) {
        Some(panel) => print!("{panel}"),
        None => {
            println!("No favorite cities yet. Add one with `weather-dashboard favorite <city>`.")
        }
    }
    Ok(())
}
