//! Backend commands queued from UI to backend worker.

pub enum BackendCommand {
    /// Issued exactly once, before the first frame.
    LoadCountries,
    FetchFlag {
        name: String,
        url: String,
    },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::LoadCountries => "load_countries",
            BackendCommand::FetchFlag { .. } => "fetch_flag",
        }
    }
}
