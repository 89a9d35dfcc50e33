// src/gui/app.rs
use std::{error::Error, sync::Arc};

use eframe::egui;

use crate::{
    config::{options::AppOptions, state::AppState},
    filter::FilterController,
    loader::{Loader, Update},
    model::Spot,
    net::{ApiClient, SpotApi},
    table::SpotTable,
};

use super::components::create_form::SpotDraft;

pub fn run(native: eframe::NativeOptions, options: AppOptions) -> Result<(), Box<dyn Error>> {
    let api: Arc<dyn SpotApi> = Arc::new(ApiClient::new(&options.api)?);
    logf!("Init: api={}", options.api.spots_url());

    eframe::run_native(
        "Spot Viewer",
        native,
        Box::new(move |cc| Ok(Box::new(App::new(&cc.egui_ctx, AppState::new(options), api)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // background requests; results are drained every frame
    pub loader: Loader,

    // None until the first successful fetch
    pub table: Option<SpotTable>,
    pub filter: FilterController,

    // "Add spot" form contents
    pub draft: SpotDraft,

    pub status: String,
    pub status_is_error: bool,
}

impl App {
    pub fn new(ctx: &egui::Context, state: AppState, api: Arc<dyn SpotApi>) -> Self {
        let repaint = ctx.clone();
        let loader = Loader::new(api).with_waker(Arc::new(move || repaint.request_repaint()));

        let mut app = Self {
            state,
            loader,
            table: None,
            filter: FilterController::new(),
            draft: SpotDraft::default(),
            status: s!("Idle"),
            status_is_error: false,
        };
        super::actions::reload(&mut app);
        app
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
        self.status_is_error = false;
    }

    #[inline]
    pub fn error_status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
        self.status_is_error = true;
    }

    /// Replace the table with a fresh one over `rows`. The previous table is
    /// dropped; the current filter and sort carry over to the new rows.
    pub fn bind(&mut self, rows: Vec<Spot>) {
        let sort = self.table.as_ref().and_then(|t| t.sort());
        let mut table = SpotTable::new(rows);
        if let Some(s) = sort {
            table.sort_by(s.column, s.ascending);
        }
        table.apply_filter(self.filter.state());
        logf!("Table: bound rows={} visible={}", table.total(), table.len());
        self.table = Some(table);
    }

    fn apply_updates(&mut self) {
        for update in self.loader.poll() {
            match update {
                Update::Spots(rows) => {
                    let n = rows.len();
                    self.bind(rows);
                    self.status(format!("Loaded {n} spot(s)"));
                }
                Update::FetchFailed(e) => {
                    // keep whatever is on screen
                    self.error_status(format!("Load failed: {e}"));
                }
                Update::Created { title } => {
                    self.status(format!("Created {title:?}, reloading…"));
                }
                Update::CreateFailed { title, error } => {
                    self.error_status(format!("Could not create {title:?}: {error}"));
                }
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_updates();

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.add_space(4.0);
            super::components::filter_bar::draw(ui, self);
            ui.separator();
            super::components::export_bar::draw(ui, self);
            ui.add_space(4.0);
        });

        if self.state.gui.show_create {
            super::components::create_form::window(ctx, self);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            super::components::data_table::draw(ui, self);
        });
    }
}
