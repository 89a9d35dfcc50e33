// src/gui/components/filter_bar.rs
//
// Query box + attribute selector. Every keystroke / selection goes straight
// to the FilterController, which re-filters the table in the same frame.

use eframe::egui;
use crate::{gui::app::App, model::Attribute};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Search:");

        let resp = ui.add(
            egui::TextEdit::singleline(app.filter.query_mut())
                .hint_text("title, director, performer…")
                .desired_width(260.0),
        );
        if resp.changed() {
            if let Some(table) = app.table.as_mut() {
                app.filter.apply(table);
            }
            logd!("UI: query → {:?}", app.filter.query());
        }

        ui.label("in");

        let before = app.filter.attribute();
        let mut picked = before;
        egui::ComboBox::from_id_salt("attribute_select")
            .selected_text(picked.label())
            .show_ui(ui, |ui| {
                for choice in Attribute::choices() {
                    ui.selectable_value(&mut picked, choice, choice.label());
                }
            });
        if picked != before {
            app.filter.set_attribute(app.table.as_mut(), picked);
            logf!("UI: attribute → {}", picked);
        }

        if ui.button("Clear").clicked() {
            app.filter.clear(app.table.as_mut());
            logd!("UI: filter cleared");
        }

        if let Some(table) = app.table.as_ref() {
            ui.separator();
            ui.label(format!("{} of {} rows", table.len(), table.total()));
        }
    });
}
