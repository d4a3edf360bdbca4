use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::error::SearchError;
use crate::executor::QueryExecutor;
use crate::provider::Provider;
use crate::suggestion::{self, Suggestion};

const USER_AGENT: &str = concat!("sayt/", env!("CARGO_PKG_VERSION"));

/// reqwest-backed executor for public suggestion endpoints.
///
/// The network future is raced against the cancellation token; losing the
/// race drops the request future, which aborts the underlying transfer
/// rather than letting it run to completion client-side.
pub struct HttpExecutor {
    client: reqwest::Client,
    provider: Provider,
}

impl HttpExecutor {
    /// Build an executor with a pooled client for `provider`.
    pub fn new(provider: Provider) -> Result<Self, SearchError> {
        provider.validate()?;
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|err| SearchError::Network(format!("failed to build HTTP client: {err}")))?;
        Ok(Self { client, provider })
    }

    /// Build an executor reusing an existing client.
    pub fn with_client(client: reqwest::Client, provider: Provider) -> Result<Self, SearchError> {
        provider.validate()?;
        Ok(Self { client, provider })
    }

    pub fn provider(&self) -> &Provider {
        &self.provider
    }

    async fn fetch(&self, query: &str) -> Result<Vec<Suggestion>, SearchError> {
        let url = self.provider.suggest_endpoint(query)?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| SearchError::Network(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Network(format!(
                "{} responded with {status}",
                self.provider.label
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|err| SearchError::Network(err.to_string()))?;
        let payload: serde_json::Value = serde_json::from_str(&body)
            .map_err(|err| SearchError::Parse(format!("response was not valid JSON: {err}")))?;

        let names = self.provider.format.parse(&payload)?;
        let mut entries = Vec::with_capacity(names.len());
        for name in names {
            let link = self.provider.search_link(&name)?;
            entries.push(Suggestion::new(name, link));
        }
        let query_link = self.provider.search_link(query)?;
        Ok(suggestion::with_literal_entry(query, query_link, entries))
    }
}

#[async_trait]
impl QueryExecutor for HttpExecutor {
    async fn execute(
        &self,
        query: &str,
        cancel: CancellationToken,
    ) -> Result<Vec<Suggestion>, SearchError> {
        // Empty query: serve the configured default set without touching the
        // network.
        if query.is_empty() {
            return Ok(self.provider.default_results.clone());
        }

        debug!(provider = %self.provider.label, %query, "issuing suggestion request");
        tokio::select! {
            _ = cancel.cancelled() => Err(SearchError::Cancelled),
            outcome = self.fetch(query) => outcome,
        }
    }
}
