//! Pure view derivation for the country table: filtering, sorting, pagination and
//! the state transitions driven by user input. Nothing here performs I/O.

pub mod pagination;
pub mod pipeline;
pub mod state;

pub use pagination::{page_count, page_slice, show_page_controls};
pub use pipeline::{filter_countries, sort_countries};
pub use state::{reduce, render_view, TableView, ViewAction, ViewState};

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_EXCLUDED_NAME: &str = "Azerbaijan";

/// Knobs that stay fixed for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewOptions {
    pub page_size: usize,
    /// Name dropped from every view regardless of filters. `None` disables it.
    pub excluded_name: Option<String>,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            excluded_name: Some(DEFAULT_EXCLUDED_NAME.to_string()),
        }
    }
}
