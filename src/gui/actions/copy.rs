// src/gui/actions/copy.rs
use eframe::egui;
use crate::{
    config::options::ExportFormat,
    download::DownloadSink,
    error::ExportError,
    export::{self, Download},
    gui::app::App,
};

/// Puts the serialized export on the clipboard instead of a file.
struct ClipboardSink<'a> {
    ctx: &'a egui::Context,
}

impl DownloadSink for ClipboardSink<'_> {
    type Receipt = usize;

    fn deliver(&mut self, download: Download) -> Result<usize, ExportError> {
        let n = download.content.len();
        self.ctx.copy_text(download.content);
        Ok(n)
    }
}

pub fn copy(app: &mut App, ui_ctx: &egui::Context, format: ExportFormat) {
    let Some(table) = app.table.as_ref() else {
        logd!("Copy: Clicked, but no data is loaded");
        app.status("Nothing to copy (no data loaded)");
        return;
    };

    let rows = table.len();
    let mut sink = ClipboardSink { ctx: ui_ctx };

    match export::export(table, format, &mut sink) {
        Ok(bytes) => {
            logf!("Copy: format={:?} rows={} bytes={}", format, rows, bytes);
            app.status(format!("Copied {rows} row(s) as {}", format.label()));
        }
        Err(e) => {
            loge!("Copy: Error: {}", e);
            app.error_status(format!("Copy error: {e}"));
        }
    }
}
