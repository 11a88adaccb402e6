// src/model.rs
//! Wire types for the scrape endpoint.
//!
//! Request:  `{ "url": "...", "pages": 1 }`
//! Response: `{ "data": [ { "url": "...", "title"?: "...", "date"?: "...", "summary"?: "..." } ] }`
//!
//! The endpoint also sends envelope fields (`message`, `items`) and a
//! per-record `links` list. Serde drops those silently.

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScrapeRequest {
    pub url: String,
    pub pages: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapeRecord {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
}

impl ScrapeRecord {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into(), ..Self::default() }
    }

    pub fn title(&self) -> Option<&str> { present(&self.title) }
    pub fn date(&self) -> Option<&str> { present(&self.date) }
    pub fn summary(&self) -> Option<&str> { present(&self.summary) }
}

/// `"url": null` decodes like a missing url.
fn null_as_empty<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Option::<String>::deserialize(d).map(Option::unwrap_or_default)
}

/// A field counts as present only if it has something besides whitespace.
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.trim().is_empty())
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ScrapeResponse {
    #[serde(default)]
    data: Option<Vec<ScrapeRecord>>,
}

impl ScrapeResponse {
    /// Absent or `null` data means "nothing found", not an error.
    pub fn into_records(self) -> Vec<ScrapeRecord> {
        self.data.unwrap_or_default()
    }
}
