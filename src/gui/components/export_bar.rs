// src/gui/components/export_bar.rs
//
// Output dir + action buttons + status line.

use eframe::egui::{self, widgets::Spinner};
use crate::{config::options::ExportFormat, gui::{actions, app::App}};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.state.gui.out_dir_text)
                .font(egui::TextStyle::Monospace)
                .desired_width(220.0))
            .changed()
        {
            app.state.gui.out_dir_dirty = true;
            logd!("UI: out_dir_text changed (dirty=true) → {}", app.state.gui.out_dir_text);
        }

        for format in [ExportFormat::Json, ExportFormat::Csv] {
            if ui.button(format!("Export {}", format.label()))
                .on_hover_text(format!("Save the visible rows as {}", format.file_name()))
                .clicked()
            {
                actions::export(app, format);
            }
        }

        ui.separator();

        for format in [ExportFormat::Json, ExportFormat::Csv] {
            if ui.button(format!("Copy {}", format.label())).clicked() {
                actions::copy(app, ui.ctx(), format);
            }
        }
    });

    ui.horizontal(|ui| {
        let busy = app.loader.busy();

        if ui.add_enabled(!busy, egui::Button::new("Reload")).clicked() {
            actions::reload(app);
        }
        if ui.button("Add spot…").clicked() {
            app.state.gui.show_create = true;
        }

        if busy {
            ui.add(Spinner::new().size(16.0));
        }

        let text = egui::RichText::new(&app.status);
        let text = if app.status_is_error { text.color(ui.visuals().error_fg_color) } else { text };
        ui.label(text);
    });
}
