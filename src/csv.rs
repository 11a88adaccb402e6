// src/csv.rs
use crate::{
    config::consts::{CSV_FILE_NAME, CSV_HEADERS, CSV_MIME, PLACEHOLDER},
    model::ScrapeRecord,
};

/* ---------------- Writing ---------------- */

/// Append one row with every field quoted and inner quotes doubled.
/// No line terminator; the caller decides how rows are joined.
pub fn push_row<S: AsRef<str>>(out: &mut String, row: &[S]) {
    let mut first = true;
    for cell in row {
        if !first { out.push(','); } else { first = false; }
        out.push('"');
        out.push_str(&cell.as_ref().replace('"', "\"\""));
        out.push('"');
    }
}

/// Record → export cells. Blank fields become `-`; summary is NOT shortened.
pub fn export_cells(rec: &ScrapeRecord) -> [&str; 4] {
    [
        rec.url.as_str(),
        rec.title().unwrap_or(PLACEHOLDER),
        rec.date().unwrap_or(PLACEHOLDER),
        rec.summary().unwrap_or(PLACEHOLDER),
    ]
}

/// Header + one row per record, joined by `\n` (no trailing newline).
pub fn records_to_string(records: &[ScrapeRecord]) -> String {
    let mut out = String::new();

    push_row(&mut out, &CSV_HEADERS);
    for rec in records {
        out.push('\n');
        push_row(&mut out, &export_cells(rec));
    }
    out
}

/* ---------------- Artifact ---------------- */

/// A finished export, ready to be saved or copied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CsvArtifact {
    pub file_name: &'static str,
    pub mime: &'static str,
    pub contents: String,
}

/// `None` when there is nothing to export.
pub fn export_csv(records: &[ScrapeRecord]) -> Option<CsvArtifact> {
    if records.is_empty() {
        return None;
    }
    Some(CsvArtifact {
        file_name: CSV_FILE_NAME,
        mime: CSV_MIME,
        contents: records_to_string(records),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_field_is_quoted() {
        let mut out = String::new();
        push_row(&mut out, &["a", "b,c", ""]);
        assert_eq!(out, r#""a","b,c","""#);
    }

    #[test]
    fn newlines_stay_inside_quotes() {
        let mut out = String::new();
        push_row(&mut out, &["line1\nline2"]);
        assert_eq!(out, "\"line1\nline2\"");
    }
}
