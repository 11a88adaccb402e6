// src/gui/actions/export.rs
use crate::{csv, file, gui::app::App};

pub fn export(app: &mut App) {
    // normalize out path first (mutates app) before any &app borrows
    if let Err(e) = app.commit_settings() {
        tracing::error!("Export: Settings rejected: {}", e);
    }

    let status_msg = {
        let records = app.controller.records();

        match csv::export_csv(records) {
            None => {
                tracing::debug!("Export: Clicked, but there's nothing to export");
                "Nothing to export".to_string()
            }
            Some(artifact) => {
                let dir = app.options.export.out_dir();
                tracing::info!(
                    "Export: Begin rows={} dir={} mime={}",
                    records.len(),
                    dir.display(),
                    artifact.mime
                );

                match file::save_artifact(dir, &artifact) {
                    Ok(path) => {
                        tracing::info!("Export: OK → {}", path.display());
                        format!("Exported {}", path.display())
                    }
                    Err(e) => {
                        tracing::error!("Export: Error: {}", e);
                        format!("Export error: {e}")
                    }
                }
            }
        }
    };

    // mutate app only after the record borrows are gone
    app.set_status(status_msg);
}
