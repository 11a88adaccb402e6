// src/worker.rs
// Runs scrape requests off the UI thread. One thread per request; results
// come back over a channel tagged with the generation they were issued under.

use std::{
    sync::{mpsc, Arc},
    thread::{self, JoinHandle},
};

use crate::{
    controller::PendingScrape,
    error::ScrapeError,
    model::ScrapeRecord,
    net::ScrapeClient,
};

#[derive(Debug)]
pub struct Completion {
    pub generation: u64,
    pub outcome: Result<Vec<ScrapeRecord>, ScrapeError>,
}

pub struct ScrapeWorker {
    client: Arc<dyn ScrapeClient>,
    tx: mpsc::Sender<Completion>,
    rx: mpsc::Receiver<Completion>,
    // A reset can leave an old request running next to a new one.
    in_flight: Vec<(u64, JoinHandle<()>)>,
}

impl ScrapeWorker {
    pub fn new(client: Arc<dyn ScrapeClient>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self { client, tx, rx, in_flight: Vec::new() }
    }

    pub fn set_client(&mut self, client: Arc<dyn ScrapeClient>) {
        self.client = client;
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    /// Start the request. `on_done` runs on the worker thread after the
    /// result is sent (the GUI uses it to request a repaint).
    pub fn dispatch<F>(&mut self, pending: PendingScrape, on_done: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        let PendingScrape { generation, request } = pending;

        let handle = thread::spawn(move || {
            let outcome = client.scrape(&request);
            // Receiver gone means the app is shutting down.
            let _ = tx.send(Completion { generation, outcome });
            on_done();
        });
        self.in_flight.push((generation, handle));
    }

    /// Everything that finished since the last call, in arrival order.
    /// A thread that died without replying is reported as `Disconnected`.
    pub fn poll(&mut self) -> Vec<Completion> {
        // Snapshot which threads are done *before* draining, so a reply sent
        // just before exit is never mistaken for a missing one.
        let finished: Vec<u64> = self
            .in_flight
            .iter()
            .filter(|(_, h)| h.is_finished())
            .map(|(g, _)| *g)
            .collect();

        let mut out: Vec<Completion> = self.rx.try_iter().collect();

        // Replied: detach, the thread is on its way out.
        self.in_flight
            .retain(|(g, _)| !out.iter().any(|c| c.generation == *g));

        for g in finished {
            let Some(pos) = self.in_flight.iter().position(|(gen_, _)| *gen_ == g) else {
                continue;
            };
            let (_, handle) = self.in_flight.swap_remove(pos);
            if handle.join().is_err() {
                tracing::error!("Worker: request gen={} panicked", g);
            }
            out.push(Completion { generation: g, outcome: Err(ScrapeError::Disconnected) });
        }
        out
    }
}
