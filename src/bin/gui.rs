// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use scrape_desk::{gui, log};
use eframe::egui::ViewportBuilder;

fn main() {
    log::init();

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("Scrape Desk")
            .with_inner_size([1200.0, 760.0])
            .with_min_inner_size([720.0, 420.0]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        tracing::error!("GUI failed: {}", e);
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
