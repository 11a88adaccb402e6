// src/gui/components/panels.rs
//
// One panel per state, plus the floating success banner.

use eframe::egui::{self, Align2, Color32, RichText, widgets::Spinner};

pub fn idle(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.label(RichText::new("Enter a URL and press Scrape.").weak());
    });
}

pub fn loading(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(80.0);
        ui.add(Spinner::new().size(48.0));
        ui.add_space(12.0);
        ui.label(RichText::new("Fetching Data...").size(18.0));
    });
}

pub fn no_results(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.label("No results.");
    });
}

pub fn error(ui: &mut egui::Ui, msg: &str) {
    let red = Color32::from_rgb(0xDC, 0x61, 0x49);
    ui.vertical_centered(|ui| {
        ui.add_space(60.0);
        egui::Frame::group(ui.style())
            .stroke(egui::Stroke::new(1.0, red))
            .show(ui, |ui| {
                ui.set_max_width(480.0);
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("Unable to Fetch").color(red).strong().size(18.0));
                    ui.add_space(6.0);
                    ui.label(msg);
                });
            });
    });
}

pub fn notification(ctx: &egui::Context, msg: &str) {
    let green = Color32::from_rgb(0x3C, 0xB4, 0x64);
    egui::Area::new(egui::Id::new("success_notification"))
        .anchor(Align2::RIGHT_TOP, [-16.0, 16.0])
        .interactable(false)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.label(RichText::new("Success").color(green).strong());
                ui.label(msg);
            });
        });
}
