// tests/app_sync.rs
//
// The table and status line shown by the App must follow the controller
// through every completion, reset and rejected submit.
//
use std::sync::Arc;
use std::time::{Duration, Instant};

use eframe::egui;
use scrape_desk::config::options::AppOptions;
use scrape_desk::controller::{PendingScrape, SubmitOutcome, UiState};
use scrape_desk::error::ScrapeError;
use scrape_desk::gui::actions;
use scrape_desk::gui::app::App;
use scrape_desk::model::{ScrapeRecord, ScrapeRequest};
use scrape_desk::net::ScrapeClient;
use scrape_desk::worker::Completion;

/// Always answers with the same records.
struct CannedClient(Vec<ScrapeRecord>);

impl ScrapeClient for CannedClient {
    fn scrape(&self, _req: &ScrapeRequest) -> Result<Vec<ScrapeRecord>, ScrapeError> {
        Ok(self.0.clone())
    }
}

fn two_records() -> Vec<ScrapeRecord> {
    vec![ScrapeRecord::new("http://a"), ScrapeRecord::new("http://b")]
}

fn app_with(records: Vec<ScrapeRecord>) -> App {
    App::with_client(AppOptions::default(), Arc::new(CannedClient(records)))
}

fn submitted(app: &mut App) -> PendingScrape {
    app.controller.input.url = "https://example.com".into();
    match app.controller.submit().unwrap() {
        SubmitOutcome::Dispatched(p) => p,
        SubmitOutcome::Busy => panic!("expected a dispatch"),
    }
}

fn finish(app: &mut App, generation: u64, outcome: Result<Vec<ScrapeRecord>, ScrapeError>) {
    actions::finish_scrape(app, Completion { generation, outcome }, Instant::now());
}

fn pump_until_settled(app: &mut App) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while app.controller.is_loading() {
        assert!(Instant::now() < deadline, "worker never replied");
        app.pump(Instant::now());
        std::thread::sleep(Duration::from_millis(5));
    }
}

#[test]
fn success_fills_table_and_status() {
    let mut app = app_with(Vec::new());
    let p = submitted(&mut app);
    finish(&mut app, p.generation, Ok(two_records()));

    assert_eq!(app.table.nrows(), 2);
    assert_eq!(app.table.rows()[0].url, "http://a");
    assert_eq!(app.status, "Ready (2 rows)");
}

#[test]
fn empty_success_shows_no_rows() {
    let mut app = app_with(Vec::new());
    let p = submitted(&mut app);
    finish(&mut app, p.generation, Ok(Vec::new()));

    assert!(app.table.is_empty());
    assert_eq!(app.status, "No results");
}

#[test]
fn failure_after_success_clears_table() {
    let mut app = app_with(Vec::new());
    let p = submitted(&mut app);
    finish(&mut app, p.generation, Ok(two_records()));

    let p = submitted(&mut app);
    finish(&mut app, p.generation, Err(ScrapeError::Status(502)));

    assert!(app.table.is_empty());
    assert!(app.controller.error_message().is_some());
    assert_eq!(app.status, "Scrape failed");
}

#[test]
fn stale_reply_leaves_table_alone() {
    let mut app = app_with(Vec::new());
    let old = submitted(&mut app);
    actions::reset(&mut app);
    let new = submitted(&mut app);
    finish(&mut app, new.generation, Ok(vec![ScrapeRecord::new("http://c")]));

    finish(&mut app, old.generation, Ok(two_records()));

    assert_eq!(app.table.nrows(), 1);
    assert_eq!(app.table.rows()[0].url, "http://c");
    assert_eq!(app.status, "Ready (1 rows)");
}

#[test]
fn reset_empties_table() {
    let mut app = app_with(Vec::new());
    let p = submitted(&mut app);
    finish(&mut app, p.generation, Ok(two_records()));

    actions::reset(&mut app);

    assert_eq!(app.controller.state(), &UiState::Idle);
    assert!(app.table.is_empty());
    assert!(!app.has_records());
    assert_eq!(app.status, "Idle");
}

#[test]
fn scrape_action_drops_old_rows_then_shows_new_ones() {
    let ctx = egui::Context::default();
    let mut app = app_with(vec![ScrapeRecord::new("http://fresh")]);
    let p = submitted(&mut app);
    finish(&mut app, p.generation, Ok(two_records()));
    assert_eq!(app.table.nrows(), 2);

    actions::scrape(&mut app, &ctx);
    assert!(app.controller.is_loading());
    assert!(app.table.is_empty());
    assert_eq!(app.status, "Scraping...");

    pump_until_settled(&mut app);
    assert_eq!(app.table.nrows(), 1);
    assert_eq!(app.table.rows()[0].url, "http://fresh");
    assert_eq!(app.status, "Ready (1 rows)");
}

#[test]
fn rejected_submit_leaves_status_untouched() {
    let ctx = egui::Context::default();
    let mut app = app_with(two_records());

    app.controller.input.url = "   ".into();
    actions::scrape(&mut app, &ctx);
    assert_eq!(app.controller.state(), &UiState::Idle);
    assert_eq!(app.status, "Idle");

    app.controller.input.url = "https://example.com".into();
    app.controller.input.pages = 0;
    actions::scrape(&mut app, &ctx);
    assert_eq!(app.controller.state(), &UiState::Idle);
    assert_eq!(app.status, "Idle");
    assert_eq!(app.worker.in_flight(), 0);
}
