use shared::domain::{Country, SortKey};

use crate::{state::ViewState, ViewOptions};

/// Working set narrowed by the current controls, in display order.
///
/// Removed names go first, then the name search (case-insensitive substring),
/// the exact region match and the fixed exclusion. Sorting is applied last and
/// is stable, so records with equal keys keep their fetched order.
pub fn filter_countries<'a>(
    dataset: &'a [Country],
    state: &ViewState,
    options: &ViewOptions,
) -> Vec<&'a Country> {
    let needle = state.search_text.to_lowercase();
    let region = state
        .selected_region
        .as_deref()
        .filter(|region| !region.is_empty());
    let excluded = options.excluded_name.as_deref();

    let mut filtered: Vec<&Country> = dataset
        .iter()
        .filter(|country| !state.removed.contains(&country.name))
        .filter(|country| needle.is_empty() || country.name.to_lowercase().contains(&needle))
        .filter(|country| region.map_or(true, |region| country.region == region))
        .filter(|country| excluded != Some(country.name.as_str()))
        .collect();

    sort_countries(&mut filtered, state.sort_key);
    filtered
}

pub fn sort_countries(countries: &mut [&Country], key: SortKey) {
    match key {
        SortKey::None => {}
        SortKey::Population => countries.sort_by_key(|country| country.population),
        SortKey::Area => countries.sort_by(|a, b| a.area.total_cmp(&b.area)),
    }
}

#[cfg(test)]
#[path = "tests/pipeline_tests.rs"]
mod tests;
