//! View state and the reducer-like transitions applied to it.

use std::{collections::BTreeSet, ops::RangeInclusive};

use serde::{Deserialize, Serialize};
use shared::domain::{Country, SortKey};

use crate::{
    pagination::{page_count, page_slice, show_page_controls},
    pipeline::filter_countries,
    ViewOptions,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub search_text: String,
    pub selected_region: Option<String>,
    pub sort_key: SortKey,
    /// 1-indexed.
    pub current_page: usize,
    /// Names removed by the user for the rest of the session.
    pub removed: BTreeSet<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            selected_region: None,
            sort_key: SortKey::None,
            current_page: 1,
            removed: BTreeSet::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewAction {
    SetSearchText(String),
    SelectRegion(Option<String>),
    SetSortKey(SortKey),
    SelectPage(usize),
    RemoveCountry(String),
}

impl ViewAction {
    pub fn name(&self) -> &'static str {
        match self {
            ViewAction::SetSearchText(_) => "set_search_text",
            ViewAction::SelectRegion(_) => "select_region",
            ViewAction::SetSortKey(_) => "set_sort_key",
            ViewAction::SelectPage(_) => "select_page",
            ViewAction::RemoveCountry(_) => "remove_country",
        }
    }
}

/// Applies one user action, returning the replacement state.
///
/// Changing the search text or the region sends the view back to page 1.
/// Sorting, paging and removals leave the page where it is.
pub fn reduce(state: ViewState, action: ViewAction) -> ViewState {
    tracing::debug!(action = action.name(), "applying view action");

    let mut next = state;
    match action {
        ViewAction::SetSearchText(text) => {
            next.search_text = text;
            next.current_page = 1;
        }
        ViewAction::SelectRegion(region) => {
            next.selected_region = region.filter(|region| !region.is_empty());
            next.current_page = 1;
        }
        ViewAction::SetSortKey(sort_key) => {
            next.sort_key = sort_key;
        }
        ViewAction::SelectPage(page) => {
            next.current_page = page;
        }
        ViewAction::RemoveCountry(name) => {
            next.removed.insert(name);
        }
    }
    next
}

/// Everything a host needs to draw one frame of the table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView<'a> {
    pub rows: Vec<&'a Country>,
    pub total_matches: usize,
    pub page_count: usize,
    pub current_page: usize,
    pub show_page_controls: bool,
}

impl TableView<'_> {
    pub fn page_numbers(&self) -> RangeInclusive<usize> {
        1..=self.page_count
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

pub fn render_view<'a>(
    dataset: &'a [Country],
    state: &ViewState,
    options: &ViewOptions,
) -> TableView<'a> {
    let filtered = filter_countries(dataset, state, options);
    let pages = page_count(filtered.len(), options.page_size);
    let rows = page_slice(&filtered, state.current_page, options.page_size).to_vec();

    TableView {
        rows,
        total_matches: filtered.len(),
        page_count: pages,
        current_page: state.current_page,
        show_page_controls: show_page_controls(pages),
    }
}

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod tests;
