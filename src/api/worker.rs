//! Background request worker.
//!
//! The UI thread owns the engine and must never block on the network. Requests
//! are queued to a worker thread that owns the [`ProductSource`]; outcomes come
//! back on a channel and are drained by the event loop, which is the only place
//! the cache is mutated.
//!
//! Requests are executed one at a time in submission order, so outcomes arrive
//! in the same order.

use super::ProductSource;
use crate::model::{ApiError, Product, ProductId, ProductPatch, ProductPayload};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::thread;
use std::time::Duration;
use tracing::{debug, error};

/// Work for the remote service.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    /// Load the whole catalog.
    FetchAll,
    /// Create a product.
    Create(ProductPayload),
    /// Overwrite product `id`.
    Update {
        /// Target product.
        id: ProductId,
        /// Full write body.
        payload: ProductPayload,
    },
}

/// Result of one [`Request`], tagged with what was asked.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestOutcome {
    /// Answer to [`Request::FetchAll`].
    Fetched(Result<Vec<Product>, ApiError>),
    /// Answer to [`Request::Create`].
    Created(Result<Product, ApiError>),
    /// Answer to [`Request::Update`].
    Updated {
        /// Product the update targeted.
        id: ProductId,
        /// Echoed fields, or the failure.
        result: Result<ProductPatch, ApiError>,
    },
}

/// Handle to the worker thread.
pub struct RequestWorker {
    requests: Sender<Request>,
    outcomes: Receiver<RequestOutcome>,
    in_flight: usize,
}

impl RequestWorker {
    /// Start a worker thread that owns `source`.
    ///
    /// The thread exits once this handle is dropped and its queue is drained.
    pub fn spawn<S>(source: S) -> Self
    where
        S: ProductSource + Send + 'static,
    {
        let (request_tx, request_rx) = mpsc::channel::<Request>();
        let (outcome_tx, outcome_rx) = mpsc::channel();

        thread::spawn(move || {
            for request in request_rx {
                let outcome = execute(&source, request);
                if outcome_tx.send(outcome).is_err() {
                    break;
                }
            }
            debug!("Request worker stopped");
        });

        Self {
            requests: request_tx,
            outcomes: outcome_rx,
            in_flight: 0,
        }
    }

    /// Queue a request. Returns `false` if the worker thread is gone.
    pub fn submit(&mut self, request: Request) -> bool {
        debug!(?request, "Submitting request");
        match self.requests.send(request) {
            Ok(()) => {
                self.in_flight += 1;
                true
            }
            Err(_) => {
                error!("Request worker is not running");
                false
            }
        }
    }

    /// Drain every outcome that has arrived, without blocking.
    pub fn poll(&mut self) -> Vec<RequestOutcome> {
        let mut ready = Vec::new();
        loop {
            match self.outcomes.try_recv() {
                Ok(outcome) => {
                    self.in_flight = self.in_flight.saturating_sub(1);
                    ready.push(outcome);
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        ready
    }

    /// Block up to `timeout` for the next outcome.
    pub fn wait(&mut self, timeout: Duration) -> Option<RequestOutcome> {
        match self.outcomes.recv_timeout(timeout) {
            Ok(outcome) => {
                self.in_flight = self.in_flight.saturating_sub(1);
                Some(outcome)
            }
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }

    /// Requests submitted but not yet drained.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Whether any request is still outstanding.
    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }
}

/// Run one request synchronously against `source`.
pub fn execute<S: ProductSource + ?Sized>(source: &S, request: Request) -> RequestOutcome {
    match request {
        Request::FetchAll => RequestOutcome::Fetched(source.fetch_all()),
        Request::Create(payload) => RequestOutcome::Created(source.create(&payload)),
        Request::Update { id, payload } => RequestOutcome::Updated {
            id,
            result: source.update(id, &payload),
        },
    }
}
