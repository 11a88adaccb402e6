// src/gui/actions/scrape.rs
use std::time::Instant;

use eframe::egui;

use crate::{
    controller::SubmitOutcome,
    gui::app::App,
    present::TableModel,
    worker::Completion,
};

/// Submit the form. Invalid input and double-clicks are swallowed here.
pub fn scrape(app: &mut App, ctx: &egui::Context) {
    if let Err(e) = app.commit_settings() {
        tracing::error!("Scrape: Client rebuild failed: {}", e);
        app.set_status("Invalid endpoint settings");
        return;
    }

    let pending = match app.controller.submit() {
        Ok(SubmitOutcome::Dispatched(p)) => p,
        Ok(SubmitOutcome::Busy) => {
            tracing::debug!("Scrape: Clicked while a request is in flight");
            return;
        }
        Err(e) => {
            tracing::debug!("Scrape: Not submitted: {}", e);
            return;
        }
    };

    tracing::info!(
        "Scrape: Begin gen={} url={} pages={}",
        pending.generation,
        pending.request.url,
        pending.request.pages
    );

    // The old table belongs to the old Success; drop it with the state.
    app.table = TableModel::empty();
    app.set_status("Scraping...");

    let repaint = ctx.clone();
    app.worker.dispatch(pending, move || repaint.request_repaint());
}

/// Apply one worker reply to the controller and the table.
pub fn finish_scrape(app: &mut App, done: Completion, now: Instant) {
    let Completion { generation, outcome } = done;

    match &outcome {
        Ok(records) => tracing::info!("Scrape: OK gen={} rows={}", generation, records.len()),
        Err(e) => tracing::error!("Scrape: Error gen={}: {}", generation, e),
    }

    if !app.controller.complete(generation, outcome, now) {
        tracing::debug!(
            "Scrape: Dropped stale reply gen={} (current={})",
            generation,
            app.controller.generation()
        );
        return;
    }

    app.table = TableModel::from_records(app.controller.records());

    let status = match app.controller.error_message() {
        Some(_) => "Scrape failed".to_string(),
        None if app.table.is_empty() => "No results".to_string(),
        None => format!("Ready ({} rows)", app.table.nrows()),
    };
    app.set_status(status);
}
