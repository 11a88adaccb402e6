// src/present.rs
//! Display policy for scraped records.
//!
//! - `url` is shown as-is, never shortened.
//! - `title` / `date` / `summary`: blank or missing → `-`.
//! - `summary` longer than 150 characters is cut to 150 and gets `...`.
//!
//! This is display-only. CSV export reads the records directly and never
//! sees the shortened summary.

use crate::{
    config::consts::{CSV_HEADERS, ELLIPSIS, PLACEHOLDER, SUMMARY_MAX_CHARS},
    model::ScrapeRecord,
};

/// One table row, already formatted for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayRow {
    pub url: String,
    pub title: String,
    pub date: String,
    pub summary: String,
}

impl DisplayRow {
    pub fn from_record(rec: &ScrapeRecord) -> Self {
        Self {
            url: rec.url.clone(),
            title: or_placeholder(rec.title()),
            date: or_placeholder(rec.date()),
            summary: rec.summary().map(truncate_summary).unwrap_or_else(|| PLACEHOLDER.to_string()),
        }
    }

    pub fn cells(&self) -> [&str; 4] {
        [&self.url, &self.title, &self.date, &self.summary]
    }
}

pub fn or_placeholder(field: Option<&str>) -> String {
    field.unwrap_or(PLACEHOLDER).to_string()
}

/// Cut on character boundaries, not bytes.
pub fn truncate_summary(s: &str) -> String {
    match s.char_indices().nth(SUMMARY_MAX_CHARS) {
        Some((cut, _)) => {
            let mut out = String::with_capacity(cut + ELLIPSIS.len());
            out.push_str(&s[..cut]);
            out.push_str(ELLIPSIS);
            out
        }
        None => s.to_string(),
    }
}

/// What the table widget draws. Built once per successful fetch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableModel {
    rows: Vec<DisplayRow>,
}

impl TableModel {
    pub fn empty() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn from_records(records: &[ScrapeRecord]) -> Self {
        Self { rows: records.iter().map(DisplayRow::from_record).collect() }
    }

    pub fn headers(&self) -> &'static [&'static str; 4] {
        &CSV_HEADERS
    }

    pub fn rows(&self) -> &[DisplayRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    pub fn ncols(&self) -> usize {
        CSV_HEADERS.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_summary_untouched() {
        assert_eq!(truncate_summary("hello"), "hello");
        let exact = "x".repeat(150);
        assert_eq!(truncate_summary(&exact), exact);
    }

    #[test]
    fn truncation_counts_chars_not_bytes() {
        let s = "é".repeat(151);
        let t = truncate_summary(&s);
        assert_eq!(t.chars().count(), 153);
        assert!(t.ends_with("é..."));
    }
}
