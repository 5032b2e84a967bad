//! Suggest input state management
//!
//! Owns the interaction state of one widget instance: the query text, the
//! suggestion list, the highlighted index, and the open/closed flag, plus
//! the request-id bookkeeping that keeps superseded responses from ever
//! overwriting the list.

use std::collections::VecDeque;

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

use super::debouncer::Debouncer;
use super::fetcher::{FetchRequest, FetchResponse, SuggestRequest};
use super::suggestion::Suggestion;
use super::warn::{LogSink, WarnSink};
use crate::config::SuggestConfig;

/// Keyboard navigation direction within the dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// Notifications toward the embedding application, drained via
/// [`SuggestState::poll_event`].
#[derive(Debug, Clone, PartialEq)]
pub enum SuggestEvent {
    /// The input gained focus
    Focused,
    /// The input lost focus; carries the first current suggestion so
    /// form-validation style hosts can inspect it
    Blurred { first: Option<Suggestion> },
    /// The user committed a suggestion (mouse press or Enter)
    SelectionMade { suggestion: Suggestion, index: usize },
}

/// Interaction state of one suggest input instance
pub struct SuggestState {
    query: String,
    suggestions: Vec<Suggestion>,
    /// Highlighted dropdown row; `None` means no highlight
    focused: Option<usize>,
    open: bool,

    min_query_length: usize,
    max_results: usize,
    token: Option<String>,
    locations: Vec<serde_json::Value>,

    /// Per-instance debounce deadline for fetch dispatch
    debouncer: Debouncer,
    /// Integrator warning destination (injectable for tests)
    warn: Box<dyn WarnSink>,
    events: VecDeque<SuggestEvent>,

    /// Channel to send requests to the fetch worker
    request_tx: Option<UnboundedSender<FetchRequest>>,
    /// Channel to receive responses from the fetch worker
    response_rx: Option<UnboundedReceiver<FetchResponse>>,
    /// Current request ID, incremented for each dispatched fetch.
    /// Responses carrying an older ID are discarded.
    request_id: u64,
    /// ID of the currently in-flight request, if any
    in_flight_request_id: Option<u64>,
}

impl SuggestState {
    pub fn new(config: &SuggestConfig) -> Self {
        Self::with_warn_sink(config, Box::new(LogSink))
    }

    /// Create a state with a custom warning sink.
    ///
    /// Validates credential presence once at configuration time; a missing
    /// token suppresses network calls but leaves all local interaction
    /// state working.
    pub fn with_warn_sink(config: &SuggestConfig, warn: Box<dyn WarnSink>) -> Self {
        let token = normalize_token(config.token.clone());
        let mut state = Self {
            query: config.query.clone(),
            suggestions: Vec::new(),
            focused: None,
            open: false,
            min_query_length: config.min_query_length,
            max_results: config.max_results,
            token,
            locations: config.locations.clone(),
            debouncer: Debouncer::new(config.debounce_ms),
            warn,
            events: VecDeque::new(),
            request_tx: None,
            response_rx: None,
            request_id: 0,
            in_flight_request_id: None,
        };
        if state.token.is_none() {
            state.warn_missing_token();
        }
        state
    }

    /// Connect the state to a spawned fetch worker.
    pub fn set_channels(
        &mut self,
        request_tx: UnboundedSender<FetchRequest>,
        response_rx: UnboundedReceiver<FetchResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn focused_index(&self) -> Option<usize> {
        self.focused
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }

    pub fn has_in_flight_request(&self) -> bool {
        self.in_flight_request_id.is_some()
    }

    /// Next pending host notification, oldest first.
    pub fn poll_event(&mut self) -> Option<SuggestEvent> {
        self.events.pop_front()
    }

    /// The user edited the query text.
    ///
    /// Below the minimum length the list is cleared and nothing is fetched;
    /// a pending debounce or in-flight request for the old text is
    /// cancelled. At or above the threshold the fetch is (re)scheduled;
    /// the payload is built when the deadline fires, so a burst of edits
    /// results in one request carrying the final text.
    pub fn on_query_change(&mut self, text: &str) {
        self.query = text.to_string();
        self.open = true;

        if self.query.chars().count() < self.min_query_length {
            self.cancel_in_flight_request();
            self.debouncer.cancel();
            self.replace_suggestions(Vec::new());
        } else if self.token.is_some() {
            self.cancel_in_flight_request();
            self.debouncer.schedule();
        }
    }

    /// The input gained focus; the dropdown may reopen over the current
    /// list.
    pub fn on_focus(&mut self) {
        self.open = true;
        self.events.push_back(SuggestEvent::Focused);
    }

    /// The input lost focus: close the dropdown and drop the highlight.
    pub fn on_blur(&mut self) {
        self.open = false;
        self.focused = None;
        let first = self.suggestions.first().cloned();
        self.events.push_back(SuggestEvent::Blurred { first });
    }

    /// Move the highlight up or down, wrapping within the configured
    /// result count. The wrap bound is `max_results`, not the actual list
    /// length - the highlight can sit past the end of a short list, where
    /// Enter is a no-op (see DESIGN.md).
    pub fn navigate(&mut self, direction: Direction) {
        if self.max_results == 0 {
            return;
        }
        let last = self.max_results - 1;

        self.focused = Some(match (direction, self.focused) {
            (Direction::Next, None) => 0,
            (Direction::Next, Some(index)) if index >= last => 0,
            (Direction::Next, Some(index)) => index + 1,
            (Direction::Previous, None) => last,
            (Direction::Previous, Some(0)) => last,
            (Direction::Previous, Some(index)) => index - 1,
        });
    }

    /// Mouse entered a dropdown row.
    pub fn on_hover(&mut self, index: usize) {
        self.focused = Some(index);
    }

    /// Commit the highlighted suggestion, if it points at a real row.
    pub fn select_focused(&mut self) {
        if let Some(index) = self.focused
            && index < self.suggestions.len()
        {
            self.select(index);
        }
    }

    /// Commit the suggestion at `index`: the query becomes its display
    /// value, the dropdown closes, and the host is notified with the full
    /// record.
    pub fn select(&mut self, index: usize) {
        let Some(suggestion) = self.suggestions.get(index).cloned() else {
            return;
        };
        self.query = suggestion.value.clone();
        self.open = false;
        self.events
            .push_back(SuggestEvent::SelectionMade { suggestion, index });
    }

    /// Host re-supplied the initial query text; update what is displayed
    /// without fetching.
    pub fn set_initial_query(&mut self, text: &str) {
        self.query = text.to_string();
    }

    /// Host re-supplied the credential; re-validate presence and warn if
    /// it is now absent.
    pub fn set_token(&mut self, token: Option<String>) {
        let token = normalize_token(token);
        if token != self.token && token.is_none() {
            self.warn_missing_token();
        }
        self.token = token;
    }

    /// Drive time-based work: fire a due debounce deadline and drain any
    /// fetch responses. Call once per UI tick.
    pub fn pump(&mut self) {
        if self.debouncer.fire_ready() {
            self.dispatch_fetch();
        }
        self.poll_responses();
    }

    /// Send a cancel for the in-flight request, if there is one.
    ///
    /// Returns true if a cancel was sent. The worker-side abort is
    /// best-effort; the id filter in [`Self::poll_responses`] is what
    /// guarantees a superseded response never lands.
    pub fn cancel_in_flight_request(&mut self) -> bool {
        if let Some(request_id) = self.in_flight_request_id
            && let Some(ref tx) = self.request_tx
            && tx.send(FetchRequest::Cancel { request_id }).is_ok()
        {
            log::debug!("sent cancel for request {request_id}");
            self.in_flight_request_id = None;
            return true;
        }
        false
    }

    /// Issue the fetch for the current query. Called when the debounce
    /// deadline fires, so the payload carries the latest text.
    fn dispatch_fetch(&mut self) {
        let Some(token) = self.token.clone() else {
            return;
        };
        let Some(ref tx) = self.request_tx else {
            return;
        };

        self.request_id = self.request_id.wrapping_add(1);
        self.in_flight_request_id = Some(self.request_id);

        let payload = SuggestRequest {
            query: self.query.clone(),
            count: self.max_results,
            locations: self.locations.clone(),
        };

        if tx
            .send(FetchRequest::Query {
                payload,
                token,
                request_id: self.request_id,
            })
            .is_err()
        {
            log::debug!("fetch worker unavailable, dropping request");
            self.in_flight_request_id = None;
        }
    }

    fn poll_responses(&mut self) {
        let Some(rx) = self.response_rx.as_mut() else {
            return;
        };
        let mut batch = Vec::new();
        while let Ok(response) = rx.try_recv() {
            batch.push(response);
        }
        for response in batch {
            self.apply_response(response);
        }
    }

    fn apply_response(&mut self, response: FetchResponse) {
        match response {
            FetchResponse::Loaded {
                suggestions,
                request_id,
            } => {
                if self.in_flight_request_id != Some(request_id) {
                    log::debug!("discarding stale response for request {request_id}");
                    return;
                }
                self.in_flight_request_id = None;
                self.replace_suggestions(suggestions);
            }
            FetchResponse::Failed {
                message,
                request_id,
            } => {
                // Prior suggestions stay; the dropdown simply does not update
                if self.in_flight_request_id == Some(request_id) {
                    self.in_flight_request_id = None;
                }
                log::debug!("suggestion request {request_id} failed: {message}");
            }
            FetchResponse::Cancelled { request_id } => {
                log::debug!("suggestion request {request_id} cancelled");
            }
        }
    }

    /// Replace the list wholesale. The highlight is only meaningful
    /// relative to the list it was set against, so it resets here.
    fn replace_suggestions(&mut self, suggestions: Vec<Suggestion>) {
        self.suggestions = suggestions;
        self.focused = None;
    }

    fn warn_missing_token(&mut self) {
        self.warn.warn(
            "no API token configured; address suggestions are disabled \
             (see https://dadata.ru/api/suggest/)",
        );
    }
}

fn normalize_token(token: Option<String>) -> Option<String> {
    token.filter(|t| !t.is_empty())
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
