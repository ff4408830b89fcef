//! User-curated favorite cities and their persistence.

use serde::{Deserialize, Serialize};

use crate::store::KeyValueStore;

/// Storage key holding the JSON array of favorite city ids.
pub const FAVORITES_KEY: &str = "weather_favorites";

/// City ids in the order they were favorited. No duplicates.
///
/// Equality and the stored form only consider the ids.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoriteSet {
    ids: Vec<u32>,
    /// Id removed by the latest toggle and the position it held.
    #[serde(skip)]
    last_removed: Option<(u32, usize)>,
}

impl PartialEq for FavoriteSet {
    fn eq(&self, other: &Self) -> bool {
        self.ids == other.ids
    }
}

impl Eq for FavoriteSet {}

impl FavoriteSet {
    /// Build from a sequence, dropping repeated ids but keeping first positions.
    pub fn from_ids(ids: impl IntoIterator<Item = u32>) -> Self {
        let mut set = Self::default();
        for id in ids {
            if !set.contains(id) {
                set.ids.push(id);
            }
        }
        set
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    /// Remove `id` if present, add it otherwise. Returns whether it is now a favorite.
    ///
    /// New ids are appended. An id re-added by the toggle right after its
    /// removal goes back to its old position, so a double toggle is a no-op.
    pub fn toggle(&mut self, id: u32) -> bool {
        if let Some(pos) = self.ids.iter().position(|&existing| existing == id) {
            self.ids.remove(pos);
            self.last_removed = Some((id, pos));
            return false;
        }

        let pos = match self.last_removed.take() {
            Some((removed, pos)) if removed == id => pos.min(self.ids.len()),
            _ => self.ids.len(),
        };
        self.ids.insert(pos, id);
        true
    }

    pub fn ids(&self) -> &[u32] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Read favorites, falling back to an empty set on any failure.
pub fn load_favorites(store: &dyn KeyValueStore) -> FavoriteSet {
    let raw = match store.get(FAVORITES_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return FavoriteSet::default(),
        Err(err) => {
            tracing::warn!(error = %err, "failed to read favorites, starting empty");
            return FavoriteSet::default();
        }
    };

    match serde_json::from_str::<Vec<u32>>(&raw) {
        Ok(ids) => FavoriteSet::from_ids(ids),
        Err(err) => {
            tracing::warn!(error = %err, "stored favorites are corrupt, starting empty");
            FavoriteSet::default()
        }
    }
}

/// Write favorites. Failures are logged and otherwise ignored.
pub fn save_favorites(store: &mut dyn KeyValueStore, favorites: &FavoriteSet) {
    let json = match serde_json::to_string(favorites) {
        Ok(json) => json,
        Err(err) => {
            tracing::warn!(error = %err, "failed to encode favorites");
            return;
        }
    };

    if let Err(err) = store.set(FAVORITES_KEY, &json) {
        tracing::warn!(error = %err, "failed to save favorites");
    }
}
