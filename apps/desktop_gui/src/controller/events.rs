//! Events sent from the backend worker to the UI thread.

use shared::domain::Country;

use crate::backend_bridge::flags::FlagImage;

pub enum UiEvent {
    /// Always sent once; empty when the fetch failed.
    CountriesLoaded(Vec<Country>),
    FlagLoaded {
        name: String,
        image: FlagImage,
    },
    FlagFailed {
        name: String,
        reason: String,
    },
    BackendFailed(String),
}
