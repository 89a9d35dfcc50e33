// src/gui/components/create_form.rs
//
// "Add spot" window. Numbers are typed as text and validated on submit.

use eframe::egui;

use crate::{gui::{actions, app::App}, model::Spot};

/// Raw form contents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SpotDraft {
    pub title: String,
    pub director: String,
    pub label: String,
    pub date: String,
    pub duration: String,
    pub genre: String,
    pub views: String,
    pub comments: String,
    pub likes: String,
    /// Comma-separated
    pub performers: String,
}

impl SpotDraft {
    /// Validate into a Spot. Empty numeric fields count as 0.
    pub fn to_spot(&self) -> Result<Spot, String> {
        if self.title.trim().is_empty() {
            return Err(s!("Naslov is required"));
        }
        Ok(Spot {
            title: s!(self.title.trim()),
            director: s!(self.director.trim()),
            label: s!(self.label.trim()),
            date: s!(self.date.trim()),
            duration_secs: parse_count("Trajanje_sekunde", &self.duration)?,
            genre: s!(self.genre.trim()),
            views: parse_count("pregledi", &self.views)?,
            comments: parse_count("komentari", &self.comments)?,
            likes: parse_count("lajkovi", &self.likes)?,
            performers: self
                .performers
                .split(',')
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(String::from)
                .collect(),
        })
    }
}

fn parse_count(field: &str, raw: &str) -> Result<i64, String> {
    let t = raw.trim();
    if t.is_empty() {
        return Ok(0);
    }
    match t.parse::<i64>() {
        Ok(n) if n >= 0 => Ok(n),
        Ok(_) => Err(format!("{field} must not be negative")),
        Err(_) => Err(format!("{field} must be a whole number, got {t:?}")),
    }
}

pub fn window(ctx: &egui::Context, app: &mut App) {
    let mut open = app.state.gui.show_create;
    let mut submit = false;
    let mut cancel = false;

    egui::Window::new("Add spot")
        .open(&mut open)
        .resizable(false)
        .collapsible(false)
        .show(ctx, |ui| {
            let d = &mut app.draft;
            egui::Grid::new("create_spot_grid").num_columns(2).spacing([8.0, 4.0]).show(ui, |ui| {
                let field = |ui: &mut egui::Ui, name: &str, value: &mut String| {
                    ui.label(name);
                    ui.text_edit_singleline(value);
                    ui.end_row();
                };
                field(ui, "Naslov", &mut d.title);
                field(ui, "Redatelj", &mut d.director);
                field(ui, "Label", &mut d.label);
                field(ui, "Datum (YYYY-MM-DD)", &mut d.date);
                field(ui, "Trajanje_sekunde", &mut d.duration);
                field(ui, "Zanr", &mut d.genre);
                field(ui, "pregledi", &mut d.views);
                field(ui, "komentari", &mut d.comments);
                field(ui, "lajkovi", &mut d.likes);
                field(ui, "izvodaci (a, b, …)", &mut d.performers);
            });
            ui.separator();
            ui.horizontal(|ui| {
                submit = ui.button("Create").clicked();
                cancel = ui.button("Cancel").clicked();
            });
        });

    if submit {
        actions::create(app);
    }
    app.state.gui.show_create = open && !cancel && !(submit && !app.status_is_error);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_parses_performers_and_numbers() {
        let draft = SpotDraft {
            title: s!(" Novi "),
            duration: s!("200"),
            views: s!(""),
            performers: s!("Ana, Marko,, "),
            ..SpotDraft::default()
        };
        let spot = draft.to_spot().unwrap();
        assert_eq!(spot.title, "Novi");
        assert_eq!(spot.duration_secs, 200);
        assert_eq!(spot.views, 0);
        assert_eq!(spot.performers, vec![s!("Ana"), s!("Marko")]);
    }

    #[test]
    fn draft_rejects_bad_input() {
        assert!(SpotDraft::default().to_spot().is_err());
        let draft = SpotDraft { title: s!("x"), likes: s!("lots"), ..SpotDraft::default() };
        assert!(draft.to_spot().unwrap_err().contains("lajkovi"));
        let draft = SpotDraft { title: s!("x"), views: s!("-1"), ..SpotDraft::default() };
        assert!(draft.to_spot().is_err());
    }
}
