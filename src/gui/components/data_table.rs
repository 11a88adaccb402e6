// src/gui/components/data_table.rs
//
// Draws the results table. Purely a view over a prepared TableModel:
// placeholders and summary shortening already happened in `present`.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};
use crate::present::TableModel;

const ROW_HEIGHT: f32 = 56.0;

pub fn draw(ui: &mut egui::Ui, table: &TableModel) {
    ui.heading("Scraped Data");
    ui.add_space(4.0);

    let widths = [260.0, 220.0, 140.0];

    let mut builder = TableBuilder::new(ui)
        .striped(true)
        .cell_layout(Layout::left_to_right(Align::Center))
        .min_scrolled_height(0.0);
    for w in widths {
        builder = builder.column(Column::initial(w).resizable(true).clip(true).at_least(40.0));
    }
    builder = builder.column(Column::remainder().at_least(120.0).clip(true));

    builder
        .header(24.0, |mut header| {
            for h in table.headers() {
                header.col(|ui| {
                    ui.add(egui::Label::new(RichText::new(*h).strong()).selectable(false));
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, table.nrows(), |mut row| {
                let Some(data) = table.rows().get(row.index()) else { return };

                // URL: full text, opens in the system browser
                row.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Wrap);
                    ui.add(egui::Hyperlink::from_label_and_url(data.url.as_str(), &data.url).open_in_new_tab(true));
                });
                for cell in [&data.title, &data.date, &data.summary] {
                    row.col(|ui| {
                        ui.add(egui::Label::new(cell.as_str()).wrap());
                    });
                }
            });
        });
}
