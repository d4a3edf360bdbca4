use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, trace, warn};

use crate::error::SearchError;
use crate::executor::{FailureReporter, QueryExecutor};
use crate::store::SearchStore;
use crate::suggestion::Suggestion;
use crate::token::TokenManager;

/// One settled request, routed back to the thread that owns the controller.
struct Settled {
    id: u64,
    query: String,
    outcome: Result<Vec<Suggestion>, SearchError>,
}

/// Orchestrates query-change events into consistent result commits.
///
/// Each query change mints a new token (aborting the previous in-flight
/// request), marks the store as loading, and spawns the executor. Settled
/// outcomes are applied by [`pump`](Self::pump) or
/// [`settle_next`](Self::settle_next) on the owning thread, behind a single
/// liveness guard: last request wins, not last response.
///
/// `on_query_change` must run inside a tokio runtime context so the executor
/// task can be spawned.
pub struct SearchController {
    executor: Arc<dyn QueryExecutor>,
    reporter: Arc<dyn FailureReporter>,
    tokens: TokenManager,
    store: SearchStore,
    settled_tx: UnboundedSender<Settled>,
    settled_rx: UnboundedReceiver<Settled>,
    disposed: bool,
}

impl SearchController {
    pub fn new(executor: Arc<dyn QueryExecutor>, reporter: Arc<dyn FailureReporter>) -> Self {
        let (settled_tx, settled_rx) = mpsc::unbounded_channel();
        Self {
            executor,
            reporter,
            tokens: TokenManager::default(),
            store: SearchStore::default(),
            settled_tx,
            settled_rx,
            disposed: false,
        }
    }

    /// Read-only view of the current `{results, is_loading}` state.
    pub fn store(&self) -> &SearchStore {
        &self.store
    }

    /// Entry point for new query text; every call supersedes the previous
    /// in-flight request. Raw keystrokes are fine here: cancellation, not
    /// debouncing, is the load-bearing mechanism.
    pub fn on_query_change(&mut self, text: &str) {
        if self.disposed {
            return;
        }

        // Token invalidation and minting are synchronous, so no interleaving
        // window exists where two tokens appear live.
        let token = self.tokens.begin_new();
        self.store.set_loading();
        debug!(query = %text, id = token.id(), "issuing search");

        let executor = Arc::clone(&self.executor);
        let settled_tx = self.settled_tx.clone();
        let cancel = token.cancellation();
        let id = token.id();
        let query = text.to_string();
        tokio::spawn(async move {
            let outcome = executor.execute(&query, cancel).await;
            // The receiver half lives as long as the controller; a send
            // failure just means the controller is gone.
            let _ = settled_tx.send(Settled { id, query, outcome });
        });
    }

    /// Apply every settled request waiting on the channel without blocking.
    /// Stale and cancelled outcomes are dropped.
    pub fn pump(&mut self) {
        while let Ok(settled) = self.settled_rx.try_recv() {
            self.apply(settled);
        }
    }

    /// Await and apply the next settled request. Returns `false` once the
    /// channel is closed.
    pub async fn settle_next(&mut self) -> bool {
        match self.settled_rx.recv().await {
            Some(settled) => {
                self.apply(settled);
                true
            }
            None => false,
        }
    }

    /// Idempotent teardown: aborts the in-flight request and ignores every
    /// outcome that settles afterwards.
    pub fn dispose(&mut self) {
        self.tokens.teardown();
        self.disposed = true;
    }

    fn apply(&mut self, settled: Settled) {
        if !self.tokens.is_live(settled.id) {
            trace!(query = %settled.query, id = settled.id, "dropping superseded outcome");
            return;
        }
        match settled.outcome {
            Ok(results) => {
                self.store.commit(settled.query, results);
            }
            // A cancellation means a newer query superseded this one; it is
            // discarded silently even when the token is somehow still live.
            Err(SearchError::Cancelled) => {}
            Err(err) => {
                warn!(query = %settled.query, %err, "search failed");
                self.store.fail();
                self.reporter.report("Could not perform search", &err.to_string());
            }
        }
    }
}

impl Drop for SearchController {
    fn drop(&mut self) {
        self.dispose();
    }
}
