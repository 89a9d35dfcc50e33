// src/gui/actions/create.rs
use crate::{gui::app::App, gui::components::create_form::SpotDraft};

/// Validate the form and POST it. The loader refetches on success.
pub fn create(app: &mut App) {
    match app.draft.to_spot() {
        Ok(spot) => {
            logf!("Create: Begin title={:?}", spot.title);
            let title = spot.title.clone();
            app.loader.request_create(spot);
            app.draft = SpotDraft::default();
            app.status(format!("Creating {title:?}…"));
        }
        Err(msg) => {
            logd!("Create: invalid form: {}", msg);
            app.error_status(msg);
        }
    }
}
