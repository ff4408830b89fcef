//! Dashboard UI state and the user actions that move it.

use crate::{
    favorites::FavoriteSet,
    model::{City, CityViewState},
    view::{self, DEFAULT_PAGE_SIZE, INITIAL_REVEAL_COUNT},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetQuery(String),
    /// "Show more" was requested; the host may delay before `RevealMore`.
    BeginReveal,
    RevealMore { page_size: usize },
    ToggleFavorite(u32),
    Select(u32),
    ClearSelection,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardState {
    pub query: String,
    pub reveal_count: usize,
    pub favorites: FavoriteSet,
    pub selected: Option<u32>,
    /// Set between `BeginReveal` and `RevealMore`.
    pub revealing: bool,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(FavoriteSet::default())
    }
}

impl DashboardState {
    pub fn new(favorites: FavoriteSet) -> Self {
        Self {
            query: String::new(),
            reveal_count: INITIAL_REVEAL_COUNT,
            favorites,
            selected: None,
            revealing: false,
        }
    }

    #[must_use]
    pub fn apply(mut self, action: Action) -> Self {
        match action {
            Action::SetQuery(query) => self.query = query,
            Action::BeginReveal => self.revealing = true,
            Action::RevealMore { page_size } => {
                self.reveal_count = view::reveal_more(self.reveal_count, page_size);
                self.revealing = false;
            }
            Action::ToggleFavorite(id) => {
                self.favorites.toggle(id);
            }
            Action::Select(id) => self.selected = Some(id),
            Action::ClearSelection => self.selected = None,
        }
        self
    }

    /// Visible list, sized for reveals of [`DEFAULT_PAGE_SIZE`].
    pub fn view(&self, catalog: &[City]) -> CityViewState {
        view::compute_view(catalog, &self.query, self.reveal_count, DEFAULT_PAGE_SIZE)
    }

    pub fn favorite_cities(&self, catalog: &[City]) -> Vec<City> {
        view::favorite_cities(catalog, &self.favorites)
    }

    pub fn is_selected(&self, id: u32) -> bool {
        self.selected == Some(id)
    }

    pub fn is_favorite(&self, id: u32) -> bool {
        self.favorites.contains(id)
    }
}

/// True when a transition changed the favorites, meaning they must be persisted.
pub fn favorites_changed(before: &DashboardState, after: &DashboardState) -> bool {
    before.favorites != after.favorites
}
