// tests/worker.rs
//
// Worker threads + controller together, with a canned client instead of HTTP.
//
use std::sync::{mpsc, Arc, Mutex};
use std::time::{Duration, Instant};

use scrape_desk::controller::{RequestController, SubmitOutcome, UiState};
use scrape_desk::error::ScrapeError;
use scrape_desk::model::{ScrapeRecord, ScrapeRequest};
use scrape_desk::net::ScrapeClient;
use scrape_desk::worker::{Completion, ScrapeWorker};

/// Replies with one record per requested page, after `gate` lets it through.
struct GatedClient {
    gate: Mutex<mpsc::Receiver<()>>,
    seen: Mutex<Vec<ScrapeRequest>>,
}

impl ScrapeClient for GatedClient {
    fn scrape(&self, req: &ScrapeRequest) -> Result<Vec<ScrapeRecord>, ScrapeError> {
        self.seen.lock().unwrap().push(req.clone());
        let _ = self.gate.lock().unwrap().recv();
        Ok((0..req.pages).map(|i| ScrapeRecord::new(format!("{}/{}", req.url, i))).collect())
    }
}

struct PanickingClient;

impl ScrapeClient for PanickingClient {
    fn scrape(&self, _req: &ScrapeRequest) -> Result<Vec<ScrapeRecord>, ScrapeError> {
        panic!("boom");
    }
}

fn wait_for(worker: &mut ScrapeWorker) -> Vec<Completion> {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        let got = worker.poll();
        if !got.is_empty() {
            return got;
        }
        assert!(Instant::now() < deadline, "worker never replied");
        std::thread::sleep(Duration::from_millis(5));
    }
}

#[test]
fn one_request_per_submit_and_reply_lands() {
    let (open, gate) = mpsc::channel();
    let client = Arc::new(GatedClient { gate: Mutex::new(gate), seen: Mutex::new(Vec::new()) });
    let mut worker = ScrapeWorker::new(client.clone());
    let mut ctl = RequestController::new();
    ctl.input.url = "http://site".into();
    ctl.input.pages = 2;

    let SubmitOutcome::Dispatched(p) = ctl.submit().unwrap() else { panic!("not dispatched") };
    worker.dispatch(p, || {});

    // Double click while loading: no second request.
    assert_eq!(ctl.submit().unwrap(), SubmitOutcome::Busy);
    assert_eq!(worker.in_flight(), 1);

    open.send(()).unwrap();
    for done in wait_for(&mut worker) {
        assert!(ctl.complete(done.generation, done.outcome, Instant::now()));
    }

    assert_eq!(client.seen.lock().unwrap().len(), 1);
    assert_eq!(ctl.records().len(), 2);
    assert_eq!(worker.in_flight(), 0);
}

#[test]
fn reply_for_reset_request_is_dropped() {
    let (open, gate) = mpsc::channel();
    let client = Arc::new(GatedClient { gate: Mutex::new(gate), seen: Mutex::new(Vec::new()) });
    let mut worker = ScrapeWorker::new(client);
    let mut ctl = RequestController::new();
    ctl.input.url = "http://site".into();

    let SubmitOutcome::Dispatched(p) = ctl.submit().unwrap() else { panic!("not dispatched") };
    worker.dispatch(p, || {});
    ctl.reset();

    open.send(()).unwrap();
    for done in wait_for(&mut worker) {
        assert!(!ctl.complete(done.generation, done.outcome, Instant::now()));
    }
    assert_eq!(ctl.state(), &UiState::Idle);
}

#[test]
fn on_done_runs_after_reply() {
    let (open, gate) = mpsc::channel();
    let client = Arc::new(GatedClient { gate: Mutex::new(gate), seen: Mutex::new(Vec::new()) });
    let mut worker = ScrapeWorker::new(client);
    let mut ctl = RequestController::new();
    ctl.input.url = "http://site".into();

    let (pinged_tx, pinged_rx) = mpsc::channel();
    let SubmitOutcome::Dispatched(p) = ctl.submit().unwrap() else { panic!("not dispatched") };
    worker.dispatch(p, move || { let _ = pinged_tx.send(()); });

    open.send(()).unwrap();
    pinged_rx.recv_timeout(Duration::from_secs(5)).unwrap();
    assert_eq!(wait_for(&mut worker).len(), 1);
}

#[test]
fn panicking_client_becomes_request_failure() {
    let mut worker = ScrapeWorker::new(Arc::new(PanickingClient));
    let mut ctl = RequestController::new();
    ctl.input.url = "http://site".into();

    let SubmitOutcome::Dispatched(p) = ctl.submit().unwrap() else { panic!("not dispatched") };
    worker.dispatch(p, || {});

    let done = wait_for(&mut worker);
    assert_eq!(done.len(), 1);
    assert!(matches!(done[0].outcome, Err(ScrapeError::Disconnected)));

    let Completion { generation, outcome } = done.into_iter().next().unwrap();
    assert!(ctl.complete(generation, outcome, Instant::now()));
    assert!(ctl.error_message().is_some());
}
