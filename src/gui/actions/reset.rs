// src/gui/actions/reset.rs
use crate::{gui::app::App, present::TableModel};

pub fn reset(app: &mut App) {
    let was_loading = app.controller.is_loading();
    app.controller.reset();
    app.table = TableModel::empty();

    if was_loading {
        tracing::info!("Reset: In-flight request will be ignored");
    } else {
        tracing::info!("Reset");
    }
    app.set_status("Idle");
}
