use tokio_util::sync::CancellationToken;

/// Handle identifying one issued search invocation.
///
/// A token is minted when a query begins processing and becomes stale the
/// instant a newer one is minted. The embedded cancellation token is shared
/// with the executor so supersession aborts the in-flight request.
#[derive(Debug, Clone)]
pub(crate) struct SearchToken {
    id: u64,
    cancel: CancellationToken,
}

impl SearchToken {
    pub(crate) fn id(&self) -> u64 {
        self.id
    }

    /// Clone of the abort signal handed to the executor.
    pub(crate) fn cancellation(&self) -> CancellationToken {
        self.cancel.clone()
    }
}

/// Owns the single live token slot.
///
/// Only [`begin_new`](Self::begin_new) and [`teardown`](Self::teardown)
/// mutate the slot, and both run synchronously to completion, so no settle
/// path can ever observe two live tokens.
#[derive(Debug, Default)]
pub(crate) struct TokenManager {
    live: Option<SearchToken>,
    next_id: u64,
}

impl TokenManager {
    /// Invalidate the previous live token, aborting its request, and mint a
    /// fresh one.
    pub(crate) fn begin_new(&mut self) -> SearchToken {
        self.invalidate();
        self.next_id += 1;
        let token = SearchToken {
            id: self.next_id,
            cancel: CancellationToken::new(),
        };
        self.live = Some(token.clone());
        token
    }

    /// True iff `id` belongs to the most recently minted, not-torn-down
    /// token.
    pub(crate) fn is_live(&self, id: u64) -> bool {
        self.live.as_ref().is_some_and(|token| token.id == id)
    }

    /// Invalidate the live token with no replacement. Safe to call any
    /// number of times.
    pub(crate) fn teardown(&mut self) {
        self.invalidate();
    }

    fn invalidate(&mut self) {
        // take() guarantees each token is cancelled at most once.
        if let Some(previous) = self.live.take() {
            previous.cancel.cancel();
        }
    }
}
