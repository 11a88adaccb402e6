// src/gui/components/settings_bar.rs

use eframe::egui;
use crate::{file, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut open_folder_clicked = false;

    egui::CollapsingHeader::new("Settings")
        .default_open(false)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label("Endpoint:");
                if ui
                    .add(egui::TextEdit::singleline(&mut app.endpoint_text)
                        .font(egui::TextStyle::Monospace)
                        .desired_width(320.0))
                    .changed()
                {
                    app.endpoint_dirty = true;
                    tracing::debug!("UI: endpoint_text changed (dirty=true) → {}", app.endpoint_text);
                }

                ui.label("Output folder:");
                if ui
                    .add(egui::TextEdit::singleline(&mut app.out_path_text)
                        .font(egui::TextStyle::Monospace)
                        .desired_width(240.0))
                    .changed()
                {
                    app.out_path_dirty = true;
                    tracing::debug!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
                }

                if ui.button("📁").on_hover_text("Open output folder").clicked() {
                    open_folder_clicked = true;
                }
            });
        });

    // Handle open folder after the borrow ends
    if open_folder_clicked {
        open_output_folder(app);
    }
}

/// Open the export folder (or its nearest existing parent) in the file manager.
fn open_output_folder(app: &mut App) {
    if let Err(e) = app.commit_settings() {
        tracing::error!("Settings rejected: {}", e);
    }

    let folder = file::nearest_existing_dir(app.options.export.out_dir());

    let absolute_folder = match std::fs::canonicalize(&folder) {
        Ok(abs_path) => abs_path,
        Err(e) => {
            let msg = format!("Cannot resolve folder path: {}", e);
            tracing::error!("{}", msg);
            app.set_status(msg);
            return;
        }
    };

    if let Err(e) = open_folder_in_explorer(&absolute_folder) {
        tracing::error!("Failed to open folder: {}", e);
        app.set_status(format!("Failed to open folder: {}", e));
    } else {
        tracing::info!("Opened folder: {}", absolute_folder.display());
    }
}

fn open_folder_in_explorer(path: &std::path::Path) -> Result<(), String> {
    #[cfg(target_os = "windows")]
    let program = "explorer";
    #[cfg(target_os = "macos")]
    let program = "open";
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    let program = "xdg-open";

    std::process::Command::new(program)
        .arg(path)
        .spawn()
        .map(|_| ())
        .map_err(|e| format!("Failed to spawn {}: {}", program, e))
}
