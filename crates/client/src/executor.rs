use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::error::SearchError;
use crate::suggestion::Suggestion;

/// Issues a single remote request for a query string.
///
/// Implementations classify every failure into [`SearchError`] and must
/// watch `cancel` so that a superseded request settles promptly with
/// [`SearchError::Cancelled`] instead of hanging until the transport gives
/// up. The empty query is not an error: it resolves to the provider's
/// default result set.
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    async fn execute(
        &self,
        query: &str,
        cancel: CancellationToken,
    ) -> Result<Vec<Suggestion>, SearchError>;
}

/// Out-of-band sink for user-visible failures, fire-and-forget.
///
/// Invoked by the controller exactly once per live non-cancellation failure.
pub trait FailureReporter: Send + Sync {
    fn report(&self, title: &str, message: &str);
}

/// Reporter that drops every message, for headless use and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl FailureReporter for SilentReporter {
    fn report(&self, _title: &str, _message: &str) {}
}
