use crate::suggestion::Suggestion;

/// Authoritative `{results, is_loading}` pair the UI renders from.
///
/// `results` always reflects the most recently completed, non-superseded
/// request. While a refinement is in flight the previous results stay
/// visible (`set_loading` does not clear them), which avoids flicker during
/// incremental search; the same holds after a failure.
#[derive(Debug, Default)]
pub struct SearchStore {
    query: String,
    results: Vec<Suggestion>,
    is_loading: bool,
}

impl SearchStore {
    /// Last committed query text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Current authoritative result list, in the order the remote source
    /// returned it.
    pub fn results(&self) -> &[Suggestion] {
        &self.results
    }

    /// True while a request for the current query is outstanding.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Mark a request as outstanding without touching `results`.
    pub(crate) fn set_loading(&mut self) {
        self.is_loading = true;
    }

    /// Replace the result list and clear the loading flag. Callers must have
    /// confirmed the originating token is still live.
    pub(crate) fn commit(&mut self, query: String, results: Vec<Suggestion>) {
        self.query = query;
        self.results = results;
        self.is_loading = false;
    }

    /// Clear the loading flag after a non-cancellation failure, keeping the
    /// last valid results on screen.
    pub(crate) fn fail(&mut self) {
        self.is_loading = false;
    }
}
