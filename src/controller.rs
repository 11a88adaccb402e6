// src/controller.rs
//! Request lifecycle: `Idle -> Loading -> Success | Error`, plus `reset`.
//!
//! The controller never touches the network. `submit` hands back a
//! [`PendingScrape`] for whoever runs requests (see `worker`), and the
//! outcome comes back through [`RequestController::complete`] tagged with
//! the generation it was issued under. Anything from an older generation is
//! dropped, which is how `reset` (or a newer submit) makes an in-flight
//! request irrelevant without cancelling it.
//!
//! Time is passed in explicitly so the notification window can be tested
//! without sleeping.

use std::time::{Duration, Instant};

use crate::{
    config::consts::{DEFAULT_PAGES, NOTIFICATION_SECS},
    error::{ScrapeError, ValidationError},
    model::{ScrapeRecord, ScrapeRequest},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiState {
    Idle,
    Loading,
    Success(Vec<ScrapeRecord>),
    Error(String),
}

/// What the user has typed. Owned here so `reset` clears it with everything else.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormInput {
    pub url: String,
    pub pages: u32,
}

impl Default for FormInput {
    fn default() -> Self {
        Self { url: String::new(), pages: DEFAULT_PAGES }
    }
}

impl FormInput {
    pub fn validate(&self) -> Result<ScrapeRequest, ValidationError> {
        let url = self.url.trim();
        if url.is_empty() {
            return Err(ValidationError::EmptyUrl);
        }
        if self.pages < 1 {
            return Err(ValidationError::InvalidPages(self.pages));
        }
        Ok(ScrapeRequest { url: url.to_string(), pages: self.pages })
    }
}

/// Success banner, shown until `expires_at`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub count: usize,
    pub expires_at: Instant,
}

impl Notification {
    pub fn message(&self) -> String {
        format!("Scraped successfully. {} results found.", self.count)
    }

    pub fn remaining(&self, now: Instant) -> Duration {
        self.expires_at.saturating_duration_since(now)
    }
}

/// A request the controller has committed to. Run it, then report back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingScrape {
    pub generation: u64,
    pub request: ScrapeRequest,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Dispatched(PendingScrape),
    /// A request is already in flight; nothing changed.
    Busy,
}

#[derive(Debug)]
pub struct RequestController {
    pub input: FormInput,
    state: UiState,
    generation: u64,
    notification: Option<Notification>,
    notify_for: Duration,
}

impl Default for RequestController {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestController {
    pub fn new() -> Self {
        Self::with_notification_window(Duration::from_secs(NOTIFICATION_SECS))
    }

    pub fn with_notification_window(notify_for: Duration) -> Self {
        Self {
            input: FormInput::default(),
            state: UiState::Idle,
            generation: 0,
            notification: None,
            notify_for,
        }
    }

    /* ---------- reads ---------- */

    pub fn state(&self) -> &UiState { &self.state }

    pub fn is_loading(&self) -> bool { matches!(self.state, UiState::Loading) }

    pub fn generation(&self) -> u64 { self.generation }

    /// Records are only ever held in `Success`.
    pub fn records(&self) -> &[ScrapeRecord] {
        match &self.state {
            UiState::Success(records) => records,
            _ => &[],
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            UiState::Error(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    /* ---------- transitions ---------- */

    /// Validate the form and move to `Loading`.
    ///
    /// Invalid input leaves every piece of state as it was. While a request
    /// is in flight this returns `Busy` and does nothing else.
    pub fn submit(&mut self) -> Result<SubmitOutcome, ValidationError> {
        if self.is_loading() {
            return Ok(SubmitOutcome::Busy);
        }
        let request = self.input.validate()?;

        self.generation += 1;
        self.notification = None;
        self.state = UiState::Loading;

        Ok(SubmitOutcome::Dispatched(PendingScrape { generation: self.generation, request }))
    }

    /// Feed a finished request back in. Returns `false` if it was stale.
    pub fn complete(
        &mut self,
        generation: u64,
        outcome: Result<Vec<ScrapeRecord>, ScrapeError>,
        now: Instant,
    ) -> bool {
        if generation != self.generation || !self.is_loading() {
            return false;
        }

        match outcome {
            Ok(records) => {
                self.notification = (!records.is_empty()).then(|| Notification {
                    count: records.len(),
                    expires_at: now + self.notify_for,
                });
                self.state = UiState::Success(records);
            }
            Err(e) => {
                self.notification = None;
                self.state = UiState::Error(e.user_message().to_string());
            }
        }
        true
    }

    /// Expire the success banner. Returns `true` if it was just cleared.
    pub fn tick(&mut self, now: Instant) -> bool {
        match &self.notification {
            Some(n) if now >= n.expires_at => {
                self.notification = None;
                true
            }
            _ => false,
        }
    }

    /// Back to a blank form. Any response still in flight will be ignored.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.input = FormInput::default();
        self.notification = None;
        self.state = UiState::Idle;
    }
}
