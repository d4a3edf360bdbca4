use serde::Deserialize;
use serde_json::Value;

use crate::error::SearchError;
use crate::suggestion::Suggestion;

/// Payload shape served by a provider's suggestion endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SuggestFormat {
    /// OpenSearch-style `["query", ["s1", "s2", ...]]` array.
    #[default]
    OpenSearch,
    /// Array of objects carrying a string `phrase` field:
    /// `[{"phrase": "..."}]`.
    PhraseObjects,
}

impl SuggestFormat {
    /// Extract the suggestion texts from a decoded payload.
    pub fn parse(self, payload: &Value) -> Result<Vec<String>, SearchError> {
        match self {
            Self::OpenSearch => parse_opensearch(payload),
            Self::PhraseObjects => parse_phrase_objects(payload),
        }
    }
}

fn parse_opensearch(payload: &Value) -> Result<Vec<String>, SearchError> {
    let entries = payload
        .as_array()
        .ok_or_else(|| SearchError::Parse("expected a top-level array".into()))?;
    let names = entries
        .get(1)
        .and_then(Value::as_array)
        .ok_or_else(|| SearchError::Parse("expected a suggestion array at index 1".into()))?;
    names
        .iter()
        .map(|value| {
            value
                .as_str()
                .map(str::to_string)
                .ok_or_else(|| SearchError::Parse("expected string suggestions".into()))
        })
        .collect()
}

fn parse_phrase_objects(payload: &Value) -> Result<Vec<String>, SearchError> {
    let entries = payload
        .as_array()
        .ok_or_else(|| SearchError::Parse("expected a top-level array".into()))?;
    entries
        .iter()
        .map(|entry| {
            entry
                .get("phrase")
                .and_then(Value::as_str)
                .map(str::to_string)
                .ok_or_else(|| {
                    SearchError::Parse("expected objects with a string `phrase` field".into())
                })
        })
        .collect()
}

/// A suggestion source plus the search page its entries open.
///
/// The request/response shape of the remote endpoint is treated as an opaque
/// contract; everything that varies per integration lives here.
#[derive(Debug, Clone)]
pub struct Provider {
    /// Human-readable name shown in the prompt and in error messages.
    pub label: String,
    /// Suggestion endpoint; the query is appended as `suggest_param`.
    pub suggest_url: String,
    pub suggest_param: String,
    /// Search page opened for the literal entry and each suggestion.
    pub search_url: String,
    pub search_param: String,
    pub format: SuggestFormat,
    /// Served for the empty query instead of a network round-trip. Empty by
    /// default; providers with a trending feed can pre-populate it.
    pub default_results: Vec<Suggestion>,
}

impl Provider {
    pub fn brave() -> Self {
        Self {
            label: "Brave".into(),
            suggest_url: "https://search.brave.com/api/suggest".into(),
            suggest_param: "q".into(),
            search_url: "https://search.brave.com/search".into(),
            search_param: "q".into(),
            format: SuggestFormat::OpenSearch,
            default_results: Vec::new(),
        }
    }

    pub fn ecosia() -> Self {
        Self {
            label: "Ecosia".into(),
            suggest_url: "https://ac.ecosia.org/autocomplete".into(),
            suggest_param: "q".into(),
            search_url: "https://www.ecosia.org/search".into(),
            search_param: "q".into(),
            format: SuggestFormat::OpenSearch,
            default_results: Vec::new(),
        }
    }

    pub fn duckduckgo() -> Self {
        Self {
            label: "DuckDuckGo".into(),
            suggest_url: "https://duckduckgo.com/ac/".into(),
            suggest_param: "q".into(),
            search_url: "https://duckduckgo.com/".into(),
            search_param: "q".into(),
            format: SuggestFormat::PhraseObjects,
            default_results: Vec::new(),
        }
    }

    /// Look up a builtin provider by its CLI/config name.
    pub fn builtin(name: &str) -> Option<Self> {
        match name {
            "brave" => Some(Self::brave()),
            "ecosia" => Some(Self::ecosia()),
            "duckduckgo" => Some(Self::duckduckgo()),
            _ => None,
        }
    }

    pub fn builtin_names() -> &'static [&'static str] {
        &["brave", "ecosia", "duckduckgo"]
    }

    /// Fully encoded suggestion endpoint URL for `query`.
    pub fn suggest_endpoint(&self, query: &str) -> Result<reqwest::Url, SearchError> {
        reqwest::Url::parse_with_params(&self.suggest_url, [(self.suggest_param.as_str(), query)])
            .map_err(|err| SearchError::Network(format!("invalid suggestion endpoint: {err}")))
    }

    /// Search page URL opened for `text`.
    pub fn search_link(&self, text: &str) -> Result<String, SearchError> {
        reqwest::Url::parse_with_params(&self.search_url, [(self.search_param.as_str(), text)])
            .map(String::from)
            .map_err(|err| SearchError::Network(format!("invalid search page URL: {err}")))
    }

    /// Check both endpoint templates parse before any request is issued.
    pub fn validate(&self) -> Result<(), SearchError> {
        self.suggest_endpoint("probe")?;
        self.search_link("probe")?;
        Ok(())
    }
}
