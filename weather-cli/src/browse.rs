//! Interactive dashboard loop.
//!
//! Each menu choice becomes an [`Action`] applied to the [`DashboardState`];
//! favorites are written back after every transition that changes them.

use std::fmt;

use inquire::{InquireError, Select, Text};
use weather_dashboard_core::{
    Action, City, Config, DashboardState, KeyValueStore, WeatherBook, catalog,
    favorites::{load_favorites, save_favorites},
    forecast::{DEFAULT_MAX_DAYS, summarize},
    state::favorites_changed,
    view::{DEFAULT_PAGE_SIZE, REVEAL_DELAY},
};

use crate::{app, render};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    Search,
    ClearSearch,
    ShowMore,
    SelectCity,
    ToggleFavorite,
    OpenFavorite,
    RemoveFavorite,
    Quit,
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MenuItem::Search => "Search cities",
            MenuItem::ClearSearch => "Clear search",
            MenuItem::ShowMore => "Show more cities",
            MenuItem::SelectCity => "Select a city",
            MenuItem::ToggleFavorite => "Toggle favorite",
            MenuItem::OpenFavorite => "Open favorite",
            MenuItem::RemoveFavorite => "Remove favorite",
            MenuItem::Quit => "Quit",
        })
    }
}

/// Menu entries that make sense for the current view.
fn menu_items(state: &DashboardState, catalog: &[City]) -> Vec<MenuItem> {
    let view = state.view(catalog);
    let mut items = vec![MenuItem::Search];

    if view.is_filtering {
        items.push(MenuItem::ClearSearch);
    }
    if view.has_more {
        items.push(MenuItem::ShowMore);
    }
    if !view.visible_cities.is_empty() {
        items.push(MenuItem::SelectCity);
        items.push(MenuItem::ToggleFavorite);
    }
    // Favorites stay reachable when they are outside the visible list.
    if !state.favorite_cities(catalog).is_empty() {
        items.push(MenuItem::OpenFavorite);
        items.push(MenuItem::RemoveFavorite);
    }
    items.push(MenuItem::Quit);
    items
}

struct CityChoice(City);

impl fmt::Display for CityChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.name)
    }
}

pub async fn run() -> anyhow::Result<()> {
    let config = Config::load_with_env()?;
    let cities = catalog::cities();
    let mut store = app::open_store();

    println!("Loading weather data...");
    let book = app::load_book(&config, &cities).await;

    let mut state = DashboardState::new(load_favorites(store.as_ref()));

    loop {
        print_screen(&state, &cities, &book);

        let choice = match Select::new("What next?", menu_items(&state, &cities)).prompt() {
            Ok(choice) => choice,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err.into()),
        };

        let action = match choice {
            MenuItem::Quit => break,
            MenuItem::Search => match prompt_optional(Text::new("Search cities:").prompt())? {
                Some(query) => Action::SetQuery(query),
                None => continue,
            },
            MenuItem::ClearSearch => Action::SetQuery(String::new()),
            MenuItem::ShowMore => {
                state = state.apply(Action::BeginReveal);
                println!("Loading...");
                tokio::time::sleep(REVEAL_DELAY).await;
                Action::RevealMore {
                    page_size: DEFAULT_PAGE_SIZE,
                }
            }
            MenuItem::SelectCity => {
                match pick_city(state.view(&cities).visible_cities, "Select a city:")? {
                    Some(id) => Action::Select(id),
                    None => continue,
                }
            }
            MenuItem::ToggleFavorite => {
                match pick_city(state.view(&cities).visible_cities, "Toggle favorite:")? {
                    Some(id) => Action::ToggleFavorite(id),
                    None => continue,
                }
            }
            MenuItem::OpenFavorite => {
                match pick_city(state.favorite_cities(&cities), "Open favorite:")? {
                    Some(id) => Action::Select(id),
                    None => continue,
                }
            }
            MenuItem::RemoveFavorite => {
                match pick_city(state.favorite_cities(&cities), "Remove favorite:")? {
                    Some(id) => Action::ToggleFavorite(id),
                    None => continue,
                }
            }
        };

        state = transition(state, action, store.as_mut());
    }

    print!("{}", render::footer());
    Ok(())
}

/// Apply one action and persist favorites when they changed.
fn transition(
    state: DashboardState,
    action: Action,
    store: &mut dyn KeyValueStore,
) -> DashboardState {
    let next = state.clone().apply(action);
    if favorites_changed(&state, &next) {
        save_favorites(store, &next.favorites);
    }
    next
}

fn print_screen(state: &DashboardState, cities: &[City], book: &WeatherBook) {
    let view = state.view(cities);

    println!();
    println!("{}", render::header());
    if let Some(panel) = render::favorites_panel(&state.favorite_cities(cities), Some(book)) {
        println!("{panel}");
    }
    print!("{}", render::city_list(state, &view, cities.len(), book));

    let Some(selected) = state.selected.and_then(|id| catalog::find_by_id(cities, id)) else {
        return;
    };

    // Details only render when current weather is known, forecast only alongside it.
    if let Some(weather) = book.weather_for(&selected.name) {
        println!();
        print!("{}", render::weather_details(weather));
        if let Some(samples) = book.forecast_for(&selected.name) {
            println!();
            print!("{}", render::forecast(&summarize(samples, DEFAULT_MAX_DAYS)));
        }
    }
}

fn pick_city(cities: Vec<City>, prompt: &str) -> anyhow::Result<Option<u32>> {
    let options: Vec<CityChoice> = cities.into_iter().map(CityChoice).collect();
    Ok(prompt_optional(Select::new(prompt, options).prompt())?.map(|c| c.0.id))
}

/// Escape backs out of a prompt instead of ending the session.
fn prompt_optional<T>(result: Result<T, InquireError>) -> anyhow::Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled) => Ok(None),
        Err(err) => Err(err.into()),
    }
}
