//! Static catalog of supported cities.

use crate::model::City;

/// Every catalog city lives in this country.
pub const COUNTRY_CODE: &str = "PL";

const CITY_NAMES: &[&str] = &[
    "Warsaw",
    "Krakow",
    "Lodz",
    "Wroclaw",
    "Poznan",
    "Gdansk",
    "Szczecin",
    "Bydgoszcz",
    "Lublin",
    "Bialystok",
    "Katowice",
    "Gdynia",
    "Czestochowa",
    "Radom",
    "Torun",
    "Sosnowiec",
    "Rzeszow",
    "Kielce",
    "Gliwice",
    "Olsztyn",
    "Zabrze",
    "Bielsko-Biala",
    "Bytom",
    "Zielona Gora",
    "Rybnik",
    "Ruda Slaska",
    "Opole",
    "Tychy",
    "Gorzow Wielkopolski",
    "Elblag",
    "Plock",
    "Dabrowa Gornicza",
    "Walbrzych",
    "Wloclawek",
    "Tarnow",
    "Chorzow",
    "Koszalin",
    "Kalisz",
    "Legnica",
    "Grudziadz",
];

/// The full catalog in display order. Ids start at 1 and follow list position.
pub fn cities() -> Vec<City> {
    CITY_NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| City::new(i as u32 + 1, name, COUNTRY_CODE))
        .collect()
}

/// Case-insensitive exact lookup by name.
pub fn find_by_name<'a>(catalog: &'a [City], name: &str) -> Option<&'a City> {
    let wanted = name.trim().to_lowercase();
    catalog.iter().find(|c| c.name.to_lowercase() == wanted)
}

pub fn find_by_id(catalog: &[City], id: u32) -> Option<&City> {
    catalog.iter().find(|c| c.id == id)
}
