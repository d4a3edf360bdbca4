//! Incremental search client with abort-based request supersession.
//!
//! The crate turns a stream of query-text changes into a consistent stream of
//! committed result sets. Every query change mints a fresh cancellation token
//! and aborts the previous in-flight request; a settled request is only
//! allowed to touch the state store while its token is still the live one, so
//! a slow early response can never overwrite the results of a faster later
//! query.
//!
//! The moving parts, leaf first:
//!
//! - [`Suggestion`] and [`SearchError`] — the result rows and the failure
//!   taxonomy every executor must classify into.
//! - [`QueryExecutor`] — one request per call, cancellable through a
//!   [`tokio_util::sync::CancellationToken`]. [`HttpExecutor`] is the
//!   reqwest-backed implementation for public suggestion endpoints described
//!   by a [`Provider`].
//! - [`SearchStore`] — the `{results, is_loading}` pair a UI renders from.
//! - [`SearchController`] — the orchestrator owning the single live token.
//!
//! Entry points are synchronous and must run on the thread that owns the
//! controller; only the executor suspends. Callers pump settled outcomes back
//! into the store with [`SearchController::pump`] (non-blocking, per frame)
//! or [`SearchController::settle_next`] (awaiting).

pub mod controller;
pub mod error;
pub mod executor;
pub mod http;
pub mod provider;
pub mod store;
pub mod suggestion;
mod token;

pub use controller::SearchController;
pub use error::SearchError;
pub use executor::{FailureReporter, QueryExecutor, SilentReporter};
pub use http::HttpExecutor;
pub use provider::{Provider, SuggestFormat};
pub use store::SearchStore;
pub use suggestion::Suggestion;
