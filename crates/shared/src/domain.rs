use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::UnknownSortKey;

/// Regions offered by the region selector before any dataset-derived ones.
pub const REGIONS: [&str; 7] = [
    "Africa",
    "Europe",
    "Asia",
    "Oceania",
    "Australia",
    "North America",
    "South America",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    pub region: String,
    pub population: u64,
    pub area: f64,
    pub flag_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    None,
    Population,
    Area,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::None, SortKey::Population, SortKey::Area];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::None => "none",
            SortKey::Population => "population",
            SortKey::Area => "area",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::None => "Sort by",
            SortKey::Population => "Population",
            SortKey::Area => "Area",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "none" => Ok(SortKey::None),
            "population" => Ok(SortKey::Population),
            "area" => Ok(SortKey::Area),
            _ => Err(UnknownSortKey(value.to_string())),
        }
    }
}

/// Fixed region list followed by dataset regions it does not already name,
/// in first-seen order.
pub fn region_options(countries: &[Country]) -> Vec<String> {
    let mut options: Vec<String> = REGIONS.iter().map(|region| region.to_string()).collect();
    for country in countries {
        if country.region.is_empty() {
            continue;
        }
        if !options.iter().any(|known| known == &country.region) {
            options.push(country.region.clone());
        }
    }
    options
}
