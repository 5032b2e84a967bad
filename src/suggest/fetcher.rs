//! Suggestion fetch worker
//!
//! Runs HTTP requests against the suggestion service in a background
//! thread to avoid blocking the UI. Receives requests via channel and
//! sends responses back to the main thread, each tagged with the request
//! id that issued it.
//!
//! At most one request is serviced at a time. When a newer message
//! arrives while a transfer is in flight, the in-flight future is dropped
//! (best-effort transport abort) and a `Cancelled` response is reported
//! for it. The authoritative stale-response guard is the request id
//! comparison on the state side; the abort here only saves bandwidth.

use reqwest::StatusCode;
use reqwest::header;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use super::suggestion::Suggestion;

/// Default suggestion endpoint (DaData address completion).
pub const DADATA_SUGGEST_URL: &str =
    "https://suggestions.dadata.ru/suggestions/api/4_1/rs/suggest/address";

/// Request body understood by the suggestion service.
#[derive(Debug, Clone, Serialize)]
pub struct SuggestRequest {
    pub query: String,
    pub count: usize,
    pub locations: Vec<serde_json::Value>,
}

/// Response envelope: an ordered list under a `suggestions` field.
/// Payloads without that field fail deserialization and are treated as
/// malformed.
#[derive(Debug, Deserialize)]
struct SuggestResponse {
    suggestions: Vec<Suggestion>,
}

/// Request messages sent to the fetch worker
#[derive(Debug)]
pub enum FetchRequest {
    /// Fetch suggestions for the given payload
    Query {
        payload: SuggestRequest,
        /// Opaque credential forwarded as the authorization header
        token: String,
        /// Unique ID for this request, used to filter stale responses
        request_id: u64,
    },
    /// Cancel the request with the given ID
    Cancel { request_id: u64 },
}

/// Response messages received from the fetch worker
#[derive(Debug)]
pub enum FetchResponse {
    /// The service answered with an ordered suggestion list
    Loaded {
        suggestions: Vec<Suggestion>,
        request_id: u64,
    },
    /// Network failure, non-success status, or malformed payload
    Failed { message: String, request_id: u64 },
    /// The request was superseded or explicitly cancelled
    Cancelled { request_id: u64 },
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server returned status {0}")]
    Status(StatusCode),

    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Channel handles for a spawned fetch worker.
pub struct FetcherHandle {
    pub request_tx: UnboundedSender<FetchRequest>,
    pub response_rx: UnboundedReceiver<FetchResponse>,
}

/// HTTP client for the suggestion service.
pub struct SuggestClient {
    http: reqwest::Client,
    endpoint: String,
}

impl SuggestClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// POST the payload and parse the suggestion list out of the reply.
    pub async fn fetch(
        &self,
        payload: &SuggestRequest,
        token: &str,
    ) -> Result<Vec<Suggestion>, FetchError> {
        let response = self
            .http
            .post(&self.endpoint)
            .header(header::ACCEPT, "application/json")
            .header(header::AUTHORIZATION, format!("Token {token}"))
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body: SuggestResponse = response
            .json()
            .await
            .map_err(|e| FetchError::Malformed(e.to_string()))?;

        Ok(body.suggestions)
    }
}

/// Spawn the fetch worker thread
///
/// The worker drives a current-thread tokio runtime; the UI side talks to
/// it through the returned channel handles and never blocks.
pub fn spawn_fetcher(endpoint: impl Into<String>) -> FetcherHandle {
    let (request_tx, request_rx) = mpsc::unbounded_channel();
    let (response_tx, response_rx) = mpsc::unbounded_channel();
    let endpoint = endpoint.into();

    std::thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build();

        match runtime {
            Ok(runtime) => {
                let client = SuggestClient::new(endpoint);
                runtime.block_on(worker_loop(client, request_rx, response_tx));
            }
            Err(e) => log::error!("failed to start fetch runtime: {e}"),
        }
    });

    FetcherHandle {
        request_tx,
        response_rx,
    }
}

/// Main worker loop - services requests until the channel is closed
async fn worker_loop(
    client: SuggestClient,
    mut request_rx: UnboundedReceiver<FetchRequest>,
    response_tx: UnboundedSender<FetchResponse>,
) {
    let mut next = request_rx.recv().await;

    while let Some(request) = next.take() {
        match request {
            FetchRequest::Cancel { request_id } => {
                // Cancel received when nothing is in flight - just acknowledge
                let _ = response_tx.send(FetchResponse::Cancelled { request_id });
                log::debug!("cancelled request {request_id} (no active request)");
                next = request_rx.recv().await;
            }
            FetchRequest::Query {
                payload,
                token,
                request_id,
            } => {
                let fetch = client.fetch(&payload, &token);
                tokio::pin!(fetch);

                tokio::select! {
                    outcome = &mut fetch => {
                        let response = match outcome {
                            Ok(suggestions) => FetchResponse::Loaded { suggestions, request_id },
                            Err(e) => FetchResponse::Failed { message: e.to_string(), request_id },
                        };
                        if response_tx.send(response).is_err() {
                            // Main thread disconnected, stop working
                            return;
                        }
                        next = request_rx.recv().await;
                    }
                    superseding = request_rx.recv() => {
                        // A newer message aborts the transfer by dropping the future
                        let _ = response_tx.send(FetchResponse::Cancelled { request_id });
                        log::debug!("request {request_id} superseded while in flight");
                        match superseding {
                            Some(request) => next = Some(request),
                            None => return,
                        }
                    }
                }
            }
        }
    }

    log::debug!("fetch worker shutting down");
}

#[cfg(test)]
#[path = "fetcher_tests.rs"]
mod fetcher_tests;
