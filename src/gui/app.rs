// src/gui/app.rs
use std::{error::Error, sync::Arc, time::Instant};

use eframe::egui;

use crate::{
    config::options::AppOptions,
    controller::{RequestController, UiState},
    error::ScrapeError,
    net::{HttpScrapeClient, ScrapeClient},
    present::TableModel,
    worker::ScrapeWorker,
};

use super::{actions, components};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    let app = App::new(AppOptions::default())?;
    eframe::run_native(
        "Scrape Desk",
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )?;
    Ok(())
}

pub struct App {
    pub options: AppOptions,

    // lifecycle + form (single source of truth, UI thread only)
    pub controller: RequestController,
    pub worker: ScrapeWorker,

    // display rows for the current Success, rebuilt on every completion
    pub table: TableModel,

    // settings text fields (we map these <-> AppOptions)
    pub endpoint_text: String,
    pub endpoint_dirty: bool,
    pub out_path_text: String,
    pub out_path_dirty: bool,

    pub status: String,
}

impl App {
    pub fn new(options: AppOptions) -> Result<Self, ScrapeError> {
        let client: Arc<dyn ScrapeClient> = Arc::new(HttpScrapeClient::new(&options.endpoint)?);
        Ok(Self::with_client(options, client))
    }

    /// Same as `new` with the network side supplied by the caller.
    pub fn with_client(options: AppOptions, client: Arc<dyn ScrapeClient>) -> Self {
        let endpoint_text = options.endpoint.url.clone();
        let out_path_text = options.export.out_dir().to_string_lossy().into_owned();

        tracing::info!("Init: endpoint={}, out_dir={}", endpoint_text, out_path_text);

        Self {
            options,
            controller: RequestController::new(),
            worker: ScrapeWorker::new(client),
            table: TableModel::empty(),
            endpoint_text,
            endpoint_dirty: false,
            out_path_text,
            out_path_dirty: false,
            status: "Idle".to_string(),
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn set_status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    #[inline]
    pub fn has_records(&self) -> bool {
        !self.controller.records().is_empty()
    }

    /// Push edited settings text into options. Called before the options are used.
    pub fn commit_settings(&mut self) -> Result<(), ScrapeError> {
        if self.endpoint_dirty {
            self.options.endpoint.set_url(&self.endpoint_text);
            self.endpoint_text = self.options.endpoint.url.clone();
            let client = HttpScrapeClient::new(&self.options.endpoint)?;
            self.worker.set_client(Arc::new(client));
            tracing::info!("Settings: endpoint → {}", self.options.endpoint.url);
            self.endpoint_dirty = false;
        }
        if self.out_path_dirty {
            self.options.export.set_path(&self.out_path_text);
            tracing::info!("Settings: out dir → {}", self.options.export.out_dir().display());
            self.out_path_dirty = false;
        }
        Ok(())
    }

    /// Apply finished requests and expire the banner. Runs once per frame.
    pub fn pump(&mut self, now: Instant) {
        for done in self.worker.poll() {
            actions::finish_scrape(self, done, now);
        }
        if self.controller.tick(now) {
            tracing::debug!("Notification: expired");
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.pump(now);

        // Wake up when the banner is due to go, even with no input.
        if let Some(n) = self.controller.notification() {
            ctx.request_repaint_after(n.remaining(now));
        }

        egui::TopBottomPanel::top("form").show(ctx, |ui| {
            ui.add_space(6.0);
            components::input_bar::draw(ui, self);
            ui.add_space(2.0);
            components::settings_bar::draw(ui, self);
            ui.add_space(6.0);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(format!("Status: {}", self.status));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            match self.controller.state() {
                UiState::Idle => components::panels::idle(ui),
                UiState::Loading => components::panels::loading(ui),
                UiState::Error(msg) => components::panels::error(ui, msg),
                UiState::Success(records) if records.is_empty() => components::panels::no_results(ui),
                UiState::Success(_) => components::data_table::draw(ui, &self.table),
            }
        });

        if let Some(n) = self.controller.notification() {
            components::panels::notification(ctx, &n.message());
        }
    }
}
