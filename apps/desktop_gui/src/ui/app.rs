use std::{collections::HashMap, time::Duration};

use crossbeam_channel::{Receiver, Sender};
use shared::domain::{region_options, Country, SortKey};
use view_core::{reduce, render_view, ViewAction, ViewOptions, ViewState};

use crate::backend_bridge::{commands::BackendCommand, flags::FlagImage};
use crate::controller::{events::UiEvent, orchestration::dispatch_backend_command};

const FLAG_CELL_SIZE: [f32; 2] = [36.0, 24.0];
const ALL_REGIONS_LABEL: &str = "All regions";

pub(crate) enum FlagState {
    Loading,
    Ready(egui::TextureHandle),
    Failed,
}

pub struct CountryTableApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    options: ViewOptions,
    dataset: Vec<Country>,
    loaded: bool,
    view: ViewState,
    flags: HashMap<String, FlagState>,
    status: String,
}

impl CountryTableApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        options: ViewOptions,
    ) -> Self {
        let mut app = Self {
            cmd_tx,
            ui_rx,
            options,
            dataset: Vec::new(),
            loaded: false,
            view: ViewState::default(),
            flags: HashMap::new(),
            status: String::new(),
        };
        dispatch_backend_command(&app.cmd_tx, BackendCommand::LoadCountries, &mut app.status);
        app
    }

    fn apply(&mut self, action: ViewAction) {
        self.view = reduce(std::mem::take(&mut self.view), action);
    }

    fn process_ui_events(&mut self, ctx: &egui::Context) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::CountriesLoaded(countries) => {
                    self.status = loaded_status(countries.len());
                    self.dataset = countries;
                    self.loaded = true;
                }
                UiEvent::FlagLoaded { name, image } => {
                    let texture = ctx.load_texture(
                        format!("flag-{name}"),
                        flag_color_image(&image),
                        egui::TextureOptions::LINEAR,
                    );
                    self.flags.insert(name, FlagState::Ready(texture));
                }
                UiEvent::FlagFailed { name, reason } => {
                    tracing::debug!(country = %name, %reason, "showing flag placeholder");
                    self.flags.insert(name, FlagState::Failed);
                }
                UiEvent::BackendFailed(message) => {
                    self.status = message;
                    self.loaded = true;
                }
            }
        }
    }

    fn request_missing_flags(&mut self, rows: &[Country]) {
        for (name, url) in flag_requests(rows, &self.flags) {
            let queued = dispatch_backend_command(
                &self.cmd_tx,
                BackendCommand::FetchFlag {
                    name: name.clone(),
                    url,
                },
                &mut self.status,
            );
            if queued {
                self.flags.insert(name, FlagState::Loading);
            }
        }
    }

    fn show_controls(&self, ui: &mut egui::Ui, actions: &mut Vec<ViewAction>) {
        ui.horizontal(|ui| {
            let mut search = self.view.search_text.clone();
            let response = ui.add(
                egui::TextEdit::singleline(&mut search)
                    .hint_text("Search by country name")
                    .desired_width(220.0),
            );
            if response.changed() {
                actions.push(ViewAction::SetSearchText(search));
            }

            let region_label = self
                .view
                .selected_region
                .clone()
                .unwrap_or_else(|| ALL_REGIONS_LABEL.to_string());
            egui::ComboBox::from_id_salt("region_filter")
                .selected_text(region_label)
                .show_ui(ui, |ui| {
                    if ui
                        .selectable_label(self.view.selected_region.is_none(), ALL_REGIONS_LABEL)
                        .clicked()
                    {
                        actions.push(ViewAction::SelectRegion(None));
                    }
                    for region in region_options(&self.dataset) {
                        let selected = self.view.selected_region.as_deref() == Some(region.as_str());
                        if ui.selectable_label(selected, region.as_str()).clicked() {
                            actions.push(ViewAction::SelectRegion(Some(region)));
                        }
                    }
                });

            egui::ComboBox::from_id_salt("sort_key")
                .selected_text(self.view.sort_key.label())
                .show_ui(ui, |ui| {
                    for key in SortKey::ALL {
                        if ui
                            .selectable_label(self.view.sort_key == key, key.label())
                            .clicked()
                        {
                            actions.push(ViewAction::SetSortKey(key));
                        }
                    }
                });
        });
    }

    fn show_rows(&self, ui: &mut egui::Ui, rows: &[Country], actions: &mut Vec<ViewAction>) {
        egui::Grid::new("country_table")
            .striped(true)
            .num_columns(6)
            .spacing([16.0, 6.0])
            .show(ui, |ui| {
                for header in ["Name", "Region", "Population", "Area", "Flag", ""] {
                    ui.strong(header);
                }
                ui.end_row();

                for country in rows {
                    ui.label(country.name.as_str());
                    ui.label(country.region.as_str());
                    ui.label(country.population.to_string());
                    ui.label(country.area.to_string());
                    match self.flags.get(&country.name) {
                        Some(FlagState::Ready(texture)) => {
                            ui.add(
                                egui::Image::new(texture)
                                    .fit_to_exact_size(egui::Vec2::from(FLAG_CELL_SIZE)),
                            );
                        }
                        Some(FlagState::Failed) => {
                            ui.label("n/a");
                        }
                        Some(FlagState::Loading) | None => {
                            ui.spinner();
                        }
                    }
                    if ui.button("Remove").clicked() {
                        actions.push(ViewAction::RemoveCountry(country.name.clone()));
                    }
                    ui.end_row();
                }
            });
    }

    fn show_table_screen(&mut self, ui: &mut egui::Ui) {
        let mut actions = Vec::new();
        self.show_controls(ui, &mut actions);
        ui.separator();

        if !self.loaded {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading countries...");
            });
        }

        let view = render_view(&self.dataset, &self.view, &self.options);
        let rows: Vec<Country> = view.rows.iter().map(|country| (*country).clone()).collect();
        let page_numbers = view.page_numbers();
        let current_page = view.current_page;
        let show_page_controls = view.show_page_controls;

        self.request_missing_flags(&rows);

        egui::ScrollArea::vertical()
            .max_height((ui.available_height() - 48.0).max(120.0))
            .show(ui, |ui| self.show_rows(ui, &rows, &mut actions));

        if show_page_controls {
            ui.horizontal(|ui| {
                for page in page_numbers {
                    if ui
                        .selectable_label(page == current_page, page.to_string())
                        .clicked()
                    {
                        actions.push(ViewAction::SelectPage(page));
                    }
                }
            });
        }

        if !self.status.is_empty() {
            ui.small(self.status.as_str());
        }

        for action in actions {
            self.apply(action);
        }
    }
}

impl eframe::App for CountryTableApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events(ctx);
        egui::CentralPanel::default().show(ctx, |ui| self.show_table_screen(ui));
        ctx.request_repaint_after(Duration::from_millis(100));
    }
}

/// Rows on the current page whose flag has not been requested yet.
fn flag_requests(rows: &[Country], flags: &HashMap<String, FlagState>) -> Vec<(String, String)> {
    rows.iter()
        .filter(|country| !country.flag_url.is_empty())
        .filter(|country| !flags.contains_key(&country.name))
        .map(|country| (country.name.clone(), country.flag_url.clone()))
        .collect()
}

fn flag_color_image(image: &FlagImage) -> egui::ColorImage {
    egui::ColorImage::from_rgba_unmultiplied([image.width, image.height], &image.rgba)
}

fn loaded_status(count: usize) -> String {
    if count == 0 {
        String::new()
    } else {
        format!("{count} countries loaded")
    }
}
