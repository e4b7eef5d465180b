use std::{fs, path::Path};

use anyhow::Context;
use serde::Deserialize;
use tracing::warn;
use url::Url;
use view_core::{ViewOptions, DEFAULT_EXCLUDED_NAME, DEFAULT_PAGE_SIZE};

use crate::{DEFAULT_ENDPOINT, DEFAULT_SAMPLE_LIMIT};

pub const SETTINGS_FILE: &str = "countries.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub endpoint: String,
    pub sample_limit: usize,
    pub page_size: usize,
    pub excluded_name: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
            sample_limit: DEFAULT_SAMPLE_LIMIT,
            page_size: DEFAULT_PAGE_SIZE,
            excluded_name: Some(DEFAULT_EXCLUDED_NAME.into()),
        }
    }
}

impl Settings {
    pub fn endpoint_url(&self) -> anyhow::Result<Url> {
        Url::parse(&self.endpoint)
            .with_context(|| format!("invalid country endpoint '{}'", self.endpoint))
    }

    pub fn view_options(&self) -> ViewOptions {
        ViewOptions {
            page_size: self.page_size,
            excluded_name: self.excluded_name.clone(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    endpoint: Option<String>,
    sample_limit: Option<usize>,
    page_size: Option<usize>,
    excluded_name: Option<String>,
}

/// Defaults, then `countries.toml` in the working directory, then the process
/// environment.
pub fn load_settings() -> Settings {
    load_settings_from(Path::new(SETTINGS_FILE), |name| std::env::var(name).ok())
}

pub fn load_settings_from(path: &Path, env: impl Fn(&str) -> Option<String>) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        match toml::from_str::<FileSettings>(&raw) {
            Ok(file_cfg) => apply_file(&mut settings, file_cfg),
            Err(err) => warn!(path = %path.display(), "ignoring unreadable settings file: {err}"),
        }
    }

    if let Some(v) = env("COUNTRIES_ENDPOINT") {
        settings.endpoint = v;
    }
    if let Some(v) = env("APP__ENDPOINT") {
        settings.endpoint = v;
    }

    if let Some(v) = env("APP__SAMPLE_LIMIT") {
        match v.trim().parse::<usize>() {
            Ok(parsed) => settings.sample_limit = parsed,
            Err(_) => warn!(value = %v, "ignoring non-numeric APP__SAMPLE_LIMIT"),
        }
    }

    if let Some(v) = env("APP__PAGE_SIZE") {
        match v.trim().parse::<usize>() {
            Ok(parsed) => settings.page_size = parsed,
            Err(_) => warn!(value = %v, "ignoring non-numeric APP__PAGE_SIZE"),
        }
    }

    if let Some(v) = env("APP__EXCLUDED_NAME") {
        settings.excluded_name = non_empty(v);
    }

    if settings.page_size == 0 {
        warn!("page size of 0 is not usable; falling back to {DEFAULT_PAGE_SIZE}");
        settings.page_size = DEFAULT_PAGE_SIZE;
    }

    settings
}

fn apply_file(settings: &mut Settings, file_cfg: FileSettings) {
    if let Some(v) = file_cfg.endpoint {
        settings.endpoint = v;
    }
    if let Some(v) = file_cfg.sample_limit {
        settings.sample_limit = v;
    }
    if let Some(v) = file_cfg.page_size {
        settings.page_size = v;
    }
    if let Some(v) = file_cfg.excluded_name {
        settings.excluded_name = non_empty(v);
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
