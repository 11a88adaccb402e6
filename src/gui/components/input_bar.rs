// src/gui/components/input_bar.rs
//
// URL + pages + the action buttons. Button visibility follows the state:
// Download/Copy only with records, Reset whenever there is something to reset.

use eframe::egui::{self, widgets::Spinner};
use crate::{
    controller::UiState,
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let loading = app.controller.is_loading();
    let mut submit = false;

    ui.horizontal(|ui| {
        ui.label("URL:");
        let url_edit = ui.add_enabled(
            !loading,
            egui::TextEdit::singleline(&mut app.controller.input.url)
                .hint_text("Enter a website URL")
                .desired_width(420.0),
        );
        if url_edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            submit = true;
        }

        ui.label("Pages:");
        ui.add_enabled(
            !loading,
            egui::DragValue::new(&mut app.controller.input.pages)
                .range(1..=u32::MAX)
                .speed(0.1),
        );

        let green = egui::Color32::from_rgb(30, 150, 90);
        let label = if loading { "Scraping..." } else { "Scrape" };
        let button_scrape = ui.add_enabled(
            !loading,
            egui::Button::new(egui::RichText::new(label).color(egui::Color32::WHITE).strong())
                .fill(green),
        );
        if button_scrape.clicked() {
            submit = true;
        }

        if loading {
            ui.add(Spinner::new().size(16.0));
        }

        if app.has_records() {
            if ui.button("Download CSV").clicked() {
                actions::export(app);
            }
            if ui.button("Copy").on_hover_text("Copy CSV to clipboard").clicked() {
                actions::copy(app, ui.ctx());
            }
        }

        if !matches!(app.controller.state(), UiState::Idle) && ui.button("Reset").clicked() {
            actions::reset(app);
        }
    });

    // Enter in the URL field can fire while loading; submit() ignores that.
    if submit {
        actions::scrape(app, ui.ctx());
    }
}
