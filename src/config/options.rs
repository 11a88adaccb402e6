// src/config/options.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub endpoint: EndpointOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EndpointOptions {
    pub url: String,
    pub timeout: Duration,
}

impl Default for EndpointOptions {
    fn default() -> Self {
        Self {
            url: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }
}

impl EndpointOptions {
    /// Parse GUI text into the endpoint URL. Blank input restores the default.
    pub fn set_url(&mut self, text: &str) {
        let s = text.trim();
        self.url = if s.is_empty() { DEFAULT_ENDPOINT.to_string() } else { s.to_string() };
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    out_dir: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { out_dir: PathBuf::from(DEFAULT_OUT_DIR) }
    }
}

impl ExportOptions {
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Parse GUI text into the export directory.
    /// A pasted file path keeps only its directory; the file name is fixed.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        if s.is_empty() {
            self.out_dir = PathBuf::from(DEFAULT_OUT_DIR);
            return;
        }
        let p = Path::new(s);
        let looks_like_file = p
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);

        self.out_dir = match (looks_like_file, p.parent()) {
            (true, Some(parent)) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            (true, _) => PathBuf::from("."),
            (false, _) => p.to_path_buf(),
        };
    }
}
