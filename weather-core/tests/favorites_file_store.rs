//! Favorites persisted through the on-disk store survive a "restart".

use std::fs;

use weather_dashboard_core::{
    Action, DashboardState, FavoriteSet, FileStore, KeyValueStore,
    favorites::{FAVORITES_KEY, load_favorites, save_favorites},
    state::favorites_changed,
};

#[test]
fn favorites_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut store = FileStore::in_dir(dir.path());
        save_favorites(&mut store, &FavoriteSet::from_ids([8, 1, 15]));
    }

    let reopened = FileStore::in_dir(dir.path());
    assert_eq!(load_favorites(&reopened).ids(), &[8, 1, 15]);
}

#[test]
fn corrupt_storage_file_loads_empty_and_is_repaired_on_save() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::in_dir(dir.path());
    fs::write(store.path(), "{{{{").unwrap();

    assert!(load_favorites(&store).is_empty());

    save_favorites(&mut store, &FavoriteSet::from_ids([2]));
    assert_eq!(load_favorites(&store).ids(), &[2]);
}

#[test]
fn corrupt_value_under_key_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::in_dir(dir.path());
    store.set(FAVORITES_KEY, "not a list").unwrap();

    assert!(load_favorites(&store).is_empty());
}

#[test]
fn state_transitions_persist_only_on_favorite_changes() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::in_dir(dir.path());

    let mut state = DashboardState::new(load_favorites(&store));
    let actions = [
        Action::Select(3),
        Action::ToggleFavorite(3),
        Action::SetQuery("gd".into()),
        Action::ToggleFavorite(6),
        Action::ToggleFavorite(3),
    ];

    let mut writes = 0;
    for action in actions {
        let next = state.clone().apply(action);
        if favorites_changed(&state, &next) {
            save_favorites(&mut store, &next.favorites);
            writes += 1;
        }
        state = next;
    }

    assert_eq!(writes, 3);
    assert_eq!(load_favorites(&store).ids(), &[6]);
}
