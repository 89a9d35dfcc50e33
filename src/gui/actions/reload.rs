// src/gui/actions/reload.rs
use crate::gui::app::App;

/// Start a fetch; the result lands in `App::update` via the loader.
pub fn reload(app: &mut App) {
    let generation = app.loader.request_fetch();
    logf!("Reload: Begin #{}", generation);
    app.status("Loading…");
}
