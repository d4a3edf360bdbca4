use thiserror::Error;

/// Failure taxonomy for a single search request.
///
/// Executors catch raw transport and decoding errors and reclassify them into
/// these three kinds; the controller never sees an unclassified error.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The transport failed or the endpoint answered with a non-success
    /// status.
    #[error("search request failed: {0}")]
    Network(String),

    /// The endpoint answered, but the body did not match the expected shape.
    #[error("unexpected suggestion payload: {0}")]
    Parse(String),

    /// The request was superseded by a newer query or torn down before it
    /// settled. Not a failure: never reported, never shown in the UI.
    #[error("request cancelled")]
    Cancelled,
}

impl SearchError {
    /// True for the cancellation outcome, which is silently discarded.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancellation_is_not_a_failure() {
        assert!(SearchError::Cancelled.is_cancelled());
        assert!(!SearchError::Network("boom".into()).is_cancelled());
        assert!(!SearchError::Parse("boom".into()).is_cancelled());
    }
}
