// src/export.rs
//
// Filtered export: read the table's visible rows, serialize, hand the bytes
// to a DownloadSink.
//
// JSON: pretty-printed array, fields in canonical order, numbers stay
//       numbers, performers stay an array.
// CSV:  header + one line per row, every field quoted, quotes doubled,
//       performers joined with "; ", '\n' line endings.

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::config::options::ExportFormat;
use crate::download::DownloadSink;
use crate::error::ExportError;
use crate::model::{Column, Spot};
use crate::table::SpotTable;

/// Serialized export, ready for a sink.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Download {
    pub filename: String,
    pub mime: &'static str,
    pub content: String,
}

impl Download {
    pub fn bytes(&self) -> &[u8] {
        self.content.as_bytes()
    }
}

pub fn to_json(rows: &[Spot]) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(rows)?)
}

pub fn to_csv(rows: &[Spot]) -> Result<String, ExportError> {
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    wtr.write_record(Column::ALL.iter().map(|c| c.name()))?;
    for spot in rows {
        wtr.write_record(Column::ALL.iter().map(|c| c.export_value(spot)))?;
    }

    let buf = wtr.into_inner().map_err(|e| e.into_error())?;
    // fields are all String, so the buffer is UTF-8
    Ok(String::from_utf8(buf)?)
}

/// Serialize `rows` in `format`.
pub fn render(rows: &[Spot], format: ExportFormat) -> Result<Download, ExportError> {
    let content = match format {
        ExportFormat::Json => to_json(rows)?,
        ExportFormat::Csv => to_csv(rows)?,
    };
    Ok(Download { filename: format.file_name(), mime: format.mime(), content })
}

/// Export exactly what the table shows right now.
pub fn export<S>(table: &SpotTable, format: ExportFormat, sink: &mut S) -> Result<S::Receipt, ExportError>
where
    S: DownloadSink + ?Sized,
{
    let rows = table.current_filtered_rows();
    logf!(
        "Export: Begin format={:?} rows={}/{} query={:?} scope={}",
        format, rows.len(), table.total(), table.filter().query, table.filter().scope
    );
    let download = render(&rows, format)?;
    sink.deliver(download)
}

pub fn export_json<S: DownloadSink + ?Sized>(table: &SpotTable, sink: &mut S) -> Result<S::Receipt, ExportError> {
    export(table, ExportFormat::Json, sink)
}

pub fn export_csv<S: DownloadSink + ?Sized>(table: &SpotTable, sink: &mut S) -> Result<S::Receipt, ExportError> {
    export(table, ExportFormat::Csv, sink)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_view_is_header_only() {
        let csv = to_csv(&[]).unwrap();
        assert_eq!(
            csv,
            "\"Naslov\",\"Redatelj\",\"Label\",\"Datum\",\"Trajanje_sekunde\",\"Zanr\",\"pregledi\",\"komentari\",\"lajkovi\",\"izvodaci\"\n"
        );
        assert_eq!(to_json(&[]).unwrap(), "[]");
    }

    #[test]
    fn embedded_quotes_are_doubled() {
        let spot = Spot { title: s!("Say \"hi\", ok"), ..Spot::default() };
        let csv = to_csv(&[spot]).unwrap();
        let line = csv.lines().nth(1).unwrap();
        assert!(line.starts_with("\"Say \"\"hi\"\", ok\","), "{line}");
    }

    #[test]
    fn non_ascii_text_survives_and_bad_bytes_are_encoding_errors() {
        let spot = Spot { title: s!("Noć"), director: s!("Bistričić"), ..Spot::default() };
        let csv = to_csv(&[spot]).unwrap();
        assert!(csv.lines().nth(1).unwrap().starts_with("\"Noć\",\"Bistričić\","));

        let err: ExportError = String::from_utf8(vec![0xff]).unwrap_err().into();
        assert!(matches!(err, ExportError::Encoding(_)));
    }
}
