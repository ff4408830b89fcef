//! Derives the city list to render from the search query, the reveal count
//! and the favorite set.

use std::time::Duration;

use crate::{favorites::FavoriteSet, model::City, model::CityViewState};

/// Cities shown before the first "show more".
pub const INITIAL_REVEAL_COUNT: usize = 4;
/// Cities added by each "show more".
pub const DEFAULT_PAGE_SIZE: usize = 8;
/// Pause a host may insert before applying a reveal, to show progress.
pub const REVEAL_DELAY: Duration = Duration::from_millis(300);

/// Whitespace-only queries count as no query.
pub fn is_query_active(query: &str) -> bool {
    !query.trim().is_empty()
}

/// Catalog entries whose name contains `query`, ignoring case, in catalog order.
///
/// An inactive query bypasses filtering and returns the whole catalog.
pub fn filter_cities<'a>(catalog: &'a [City], query: &str) -> Vec<&'a City> {
    if !is_query_active(query) {
        return catalog.iter().collect();
    }

    let needle = query.to_lowercase();
    catalog
        .iter()
        .filter(|c| c.name.to_lowercase().contains(&needle))
        .collect()
}

/// Build the visible list.
///
/// While a query is active every match is shown and paging is suspended.
/// Otherwise the first `reveal_count` cities are shown; a count past the
/// end of the catalog is harmless. `page_size` only sizes the next reveal.
pub fn compute_view(
    catalog: &[City],
    query: &str,
    reveal_count: usize,
    page_size: usize,
) -> CityViewState {
    let filtered = filter_cities(catalog, query);
    let is_filtering = is_query_active(query);
    let has_more = !is_filtering && reveal_count < filtered.len();

    let visible_cities: Vec<City> = if is_filtering {
        filtered.iter().map(|&c| c.clone()).collect()
    } else {
        filtered.iter().take(reveal_count).map(|&c| c.clone()).collect()
    };

    CityViewState {
        visible_cities,
        has_more,
        is_filtering,
        next_page_len: if has_more {
            page_size.min(filtered.len() - reveal_count)
        } else {
            0
        },
    }
}

/// Next reveal count after a "show more". Never decreases.
pub fn reveal_more(reveal_count: usize, page_size: usize) -> usize {
    reveal_count.saturating_add(page_size)
}

/// Favorite cities in catalog order, not in the order they were favorited.
pub fn favorite_cities(catalog: &[City], favorites: &FavoriteSet) -> Vec<City> {
    catalog
        .iter()
        .filter(|c| favorites.contains(c.id))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(n: u32) -> Vec<City> {
        let mut cities = vec![
            City::new(1, "Warsaw", "PL"),
            City::new(2, "Krakow", "PL"),
            City::new(3, "Lodz", "PL"),
        ];
        for id in 4..=n {
            cities.push(City::new(id, &format!("Town {id}"), "PL"));
        }
        cities.truncate(n as usize);
        cities
    }

    fn names(view: &CityViewState) -> Vec<&str> {
        view.visible_cities.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn initial_view_shows_first_page() {
        let cities = catalog(20);
        let view = compute_view(&cities, "", INITIAL_REVEAL_COUNT, DEFAULT_PAGE_SIZE);

        assert_eq!(view.visible_cities, cities[..4].to_vec());
        assert!(view.has_more);
        assert!(!view.is_filtering);
        assert_eq!(view.next_page_len, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn next_page_is_capped_by_remaining_cities() {
        let cities = catalog(10);
        assert_eq!(compute_view(&cities, "", 4, 8).next_page_len, 6);
        assert_eq!(compute_view(&cities, "", 4, 3).next_page_len, 3);
        assert_eq!(compute_view(&cities, "", 10, 8).next_page_len, 0);
        assert_eq!(compute_view(&cities, "war", 0, 8).next_page_len, 0);
    }

    #[test]
    fn whitespace_query_behaves_like_empty() {
        let cities = catalog(20);
        assert_eq!(
            compute_view(&cities, "  ", INITIAL_REVEAL_COUNT, DEFAULT_PAGE_SIZE),
            compute_view(&cities, "", INITIAL_REVEAL_COUNT, DEFAULT_PAGE_SIZE)
        );
    }

    #[test]
    fn active_query_ignores_reveal_count() {
        let cities = catalog(20);
        for reveal in [0, 1, 4, 100] {
            let view = compute_view(&cities, "war", reveal, DEFAULT_PAGE_SIZE);
            assert_eq!(names(&view), vec!["Warsaw"]);
            assert!(!view.has_more);
            assert!(view.is_filtering);
        }
    }

    #[test]
    fn match_is_case_insensitive_and_keeps_catalog_order() {
        let cities = catalog(20);
        let view = compute_view(&cities, "TOWN 1", 0, DEFAULT_PAGE_SIZE);

        let expected: Vec<String> = (10..=19).map(|i| format!("Town {i}")).collect();
        assert_eq!(names(&view), expected.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn no_match_yields_empty_filtering_view() {
        let view = compute_view(&catalog(20), "Berlin", 4, DEFAULT_PAGE_SIZE);
        assert!(view.visible_cities.is_empty());
        assert!(view.is_filtering);
        assert!(!view.has_more);
    }

    #[test]
    fn revealing_only_appends() {
        let cities = catalog(20);
        let mut reveal = INITIAL_REVEAL_COUNT;
        let mut previous = compute_view(&cities, "", reveal, DEFAULT_PAGE_SIZE);

        while previous.has_more {
            reveal = reveal_more(reveal, DEFAULT_PAGE_SIZE);
            let next = compute_view(&cities, "", reveal, DEFAULT_PAGE_SIZE);
            assert!(next.visible_cities.starts_with(&previous.visible_cities));
            previous = next;
        }

        assert_eq!(previous.visible_cities, cities);
    }

    #[test]
    fn revealing_past_the_end_is_invisible() {
        let cities = catalog(20);
        let at_end = compute_view(&cities, "", 20, DEFAULT_PAGE_SIZE);
        let past_reveal = reveal_more(20, DEFAULT_PAGE_SIZE);
        let past_end = compute_view(&cities, "", past_reveal, DEFAULT_PAGE_SIZE);

        assert_eq!(at_end, past_end);
        assert!(!past_end.has_more);
    }

    #[test]
    fn reveal_more_saturates() {
        assert_eq!(reveal_more(4, 8), 12);
        assert_eq!(reveal_more(usize::MAX, 8), usize::MAX);
    }

    #[test]
    fn favorites_follow_catalog_order() {
        let cities = catalog(20);
        let mut favorites = FavoriteSet::default();
        favorites.toggle(3);
        favorites.toggle(1);

        let ids: Vec<u32> = favorite_cities(&cities, &favorites).iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn unknown_favorite_ids_are_ignored() {
        let mut favorites = FavoriteSet::default();
        favorites.toggle(999);
        assert!(favorite_cities(&catalog(5), &favorites).is_empty());
    }
}
