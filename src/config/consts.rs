// src/config/consts.rs

// Net config
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/scrape";
pub const REQUEST_TIMEOUT_SECS: u64 = 120;
pub const USER_AGENT: &str = concat!("scrape_desk/", env!("CARGO_PKG_VERSION"));

// Form
pub const DEFAULT_PAGES: u32 = 1;

// Success banner
pub const NOTIFICATION_SECS: u64 = 7;

// Display
pub const SUMMARY_MAX_CHARS: usize = 150;
pub const ELLIPSIS: &str = "...";
pub const PLACEHOLDER: &str = "-";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const CSV_FILE_NAME: &str = "scraped_data.csv";
pub const CSV_MIME: &str = "text/csv; charset=utf-8";
pub const CSV_HEADERS: [&str; 4] = ["URL", "Title", "Date", "Summary"];

// User-facing failure text. Never carries status codes or transport detail.
pub const REQUEST_FAILED_MSG: &str = "This website cannot be scraped. It may be protected by \
    security systems like Cloudflare or block automated requests.";
