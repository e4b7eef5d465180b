use async_trait::async_trait;
use reqwest::Client;
use shared::{
    domain::Country,
    protocol::{CountryPayload, COUNTRY_FIELDS},
};
use tracing::{error, info};
use url::Url;

pub mod config;
pub mod error;

pub use config::{load_settings, load_settings_from, Settings};
pub use error::FetchError;

pub const DEFAULT_ENDPOINT: &str = "https://restcountries.com/v2/all";
/// Records kept from the fetched list.
pub const DEFAULT_SAMPLE_LIMIT: usize = 41;

#[async_trait]
pub trait CountrySource: Send + Sync {
    async fn fetch_countries(&self) -> Result<Vec<Country>, FetchError>;
}

pub struct HttpCountrySource {
    http: Client,
    endpoint: Url,
}

impl HttpCountrySource {
    pub fn new(endpoint: Url) -> Self {
        Self::with_client(Client::new(), endpoint)
    }

    pub fn with_client(http: Client, endpoint: Url) -> Self {
        Self { http, endpoint }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl CountrySource for HttpCountrySource {
    async fn fetch_countries(&self) -> Result<Vec<Country>, FetchError> {
        let body = self
            .http
            .get(self.endpoint.clone())
            .query(&[("fields", COUNTRY_FIELDS)])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let payload: Vec<CountryPayload> = serde_json::from_str(&body)?;
        Ok(payload.into_iter().map(Country::from).collect())
    }
}

/// Runs the one-shot fetch and publishes its result as the session dataset.
///
/// Failures are logged and leave the dataset empty; callers never see an error.
pub async fn load_dataset<S>(source: &S, sample_limit: usize) -> Vec<Country>
where
    S: CountrySource + ?Sized,
{
    match source.fetch_countries().await {
        Ok(mut countries) => {
            let fetched = countries.len();
            countries.truncate(sample_limit);
            info!(fetched, kept = countries.len(), "loaded country dataset");
            countries
        }
        Err(err) => {
            error!(error = %err, "error fetching countries");
            Vec::new()
        }
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
