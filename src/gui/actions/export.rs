// src/gui/actions/export.rs
use crate::{
    config::options::ExportFormat,
    download::DirSink,
    export,
    gui::app::App,
};

pub fn export(app: &mut App, format: ExportFormat) {
    // normalize out dir first (mutates app) before any &app borrows
    app.state.commit_out_dir();

    let Some(table) = app.table.as_ref() else {
        logd!("Export: Clicked, but no data is loaded");
        app.status("Nothing to export (no data loaded)");
        return;
    };

    let rows = table.len();
    let mut sink = DirSink::new(&app.state.options.export.out_dir);

    match export::export(table, format, &mut sink) {
        Ok(path) => {
            logf!("Export: OK rows={} → {}", rows, path.display());
            app.status(format!("Exported {rows} row(s) → {}", path.display()));
        }
        Err(e) => {
            loge!("Export: Error: {}", e);
            app.error_status(format!("Export error: {e}"));
        }
    }
}
