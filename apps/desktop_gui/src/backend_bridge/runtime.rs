//! Runtime bridge between UI command queue and backend event intake.

use std::thread;

use client_core::{load_dataset, HttpCountrySource, Settings};
use crossbeam_channel::{Receiver, Sender};
use reqwest::Client as HttpClient;

use crate::backend_bridge::{commands::BackendCommand, flags::fetch_flag};
use crate::controller::events::UiEvent;

pub fn launch(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>, settings: Settings) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::BackendFailed(format!(
                    "failed to build backend runtime: {err}"
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let http = HttpClient::new();
            let mut dataset_requested = false;

            while let Ok(cmd) = cmd_rx.recv() {
                tracing::debug!(command = cmd.name(), "backend received command");
                match cmd {
                    BackendCommand::LoadCountries => {
                        if dataset_requested {
                            tracing::warn!("ignoring repeated country load request");
                            continue;
                        }
                        dataset_requested = true;

                        let endpoint = match settings.endpoint_url() {
                            Ok(endpoint) => endpoint,
                            Err(err) => {
                                tracing::error!("error fetching countries: {err:#}");
                                let _ = ui_tx.try_send(UiEvent::CountriesLoaded(Vec::new()));
                                continue;
                            }
                        };
                        let source = HttpCountrySource::with_client(http.clone(), endpoint);
                        let countries = load_dataset(&source, settings.sample_limit).await;
                        let _ = ui_tx.try_send(UiEvent::CountriesLoaded(countries));
                    }
                    BackendCommand::FetchFlag { name, url } => {
                        let http = http.clone();
                        let ui_tx = ui_tx.clone();
                        tokio::spawn(async move {
                            let event = match fetch_flag(&http, &url).await {
                                Ok(image) => UiEvent::FlagLoaded { name, image },
                                Err(err) => {
                                    tracing::debug!(country = %name, "flag unavailable: {err:#}");
                                    UiEvent::FlagFailed {
                                        name,
                                        reason: err.to_string(),
                                    }
                                }
                            };
                            let _ = ui_tx.try_send(event);
                        });
                    }
                }
            }
        });
    });
}
