// src/gui/components/data_table.rs
//
// Draws the live table from the SpotTable view. Purely a view, except that
// clicking a header cycles that column's sort: ascending → descending → off.

use eframe::egui::{self, Align, Layout, RichText, Sense, TextWrapMode};
use egui_extras::{Column as TableColumn, TableBuilder};

use crate::{gui::app::App, model::Column, table::SpotTable};

/// Initial widths in canonical column order.
const WIDTHS: [f32; Column::COUNT] = [180.0, 130.0, 120.0, 90.0, 70.0, 90.0, 80.0, 80.0, 70.0, 220.0];

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(table) = app.table.as_mut() else {
        ui.centered_and_justified(|ui| {
            let msg = if app.loader.busy() { "Loading spots…" } else { "No data loaded" };
            ui.label(RichText::new(msg).weak());
        });
        return;
    };

    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;           // reserve space instead of overlaying content
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
    }

    let mut clicked: Option<Column> = None;

    egui::ScrollArea::horizontal()
        .id_salt("spot_table_hscroll")
        .show(ui, |ui| {
            clicked = inner_table(ui, table);
        });

    if let Some(column) = clicked {
        cycle_sort(table, column);
    }
}

fn cycle_sort(table: &mut SpotTable, column: Column) {
    match table.sort() {
        Some(s) if s.column == column && s.ascending => table.sort_by(column, false),
        Some(s) if s.column == column => table.clear_sort(),
        _ => table.sort_by(column, true),
    }
    logd!("UI: sort → {:?}", table.sort());
}

/// Returns the header the user clicked this frame, if any.
fn inner_table(ui: &mut egui::Ui, table: &SpotTable) -> Option<Column> {
    let mut builder = TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0)
        .cell_layout(Layout::left_to_right(Align::Center));

    for w in WIDTHS {
        builder = builder.column(TableColumn::initial(w).resizable(true).clip(true).at_least(40.0));
    }

    let sort = table.sort();
    let mut clicked = None;

    builder
        .header(24.0, |mut header| {
            for column in Column::ALL {
                header.col(|ui| {
                    let arrow = match sort {
                        Some(s) if s.column == column && s.ascending => " ▲",
                        Some(s) if s.column == column => " ▼",
                        _ => "",
                    };
                    let resp = ui.add(
                        egui::Label::new(RichText::new(join!(column.name(), arrow)).strong())
                            .selectable(false)
                            .sense(Sense::click()),
                    );
                    if resp.on_hover_text("Click to sort").clicked() {
                        clicked = Some(column);
                    }
                });
            }
        })
        .body(|body| {
            body.rows(20.0, table.len(), |mut row| {
                let Some(spot) = table.row(row.index()) else { return };
                for column in Column::ALL {
                    let text = column.display(spot);
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                        if column.is_numeric() {
                            ui.with_layout(Layout::right_to_left(Align::Center), |ui| { ui.label(text); });
                        } else {
                            ui.label(text);
                        }
                    });
                }
            });
        });

    clicked
}
