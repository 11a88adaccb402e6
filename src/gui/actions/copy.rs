// src/gui/actions/copy.rs
use eframe::egui;
use crate::{csv, gui::app::App};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let Some(artifact) = csv::export_csv(app.controller.records()) else {
        app.set_status("Nothing to copy");
        tracing::debug!("Copy: Clicked, but there's nothing to copy");
        return;
    };

    tracing::info!("Copy: rows={}", app.controller.records().len());
    ui_ctx.copy_text(artifact.contents);
    app.set_status("Copied to clipboard");
}
