use serde::{Deserialize, Serialize};

/// A single actionable search entry: the label shown in the list and the URL
/// it opens. Entries have no identity beyond their name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub name: String,
    pub url: String,
}

impl Suggestion {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Prepend the literal query as the first entry and drop suggestions that
/// repeat it. The comparison is case-sensitive; remote order is preserved for
/// everything else.
pub fn with_literal_entry(
    query: &str,
    query_url: String,
    suggestions: Vec<Suggestion>,
) -> Vec<Suggestion> {
    let mut results = Vec::with_capacity(suggestions.len() + 1);
    results.push(Suggestion::new(query, query_url));
    results.extend(suggestions.into_iter().filter(|entry| entry.name != query));
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str) -> Suggestion {
        Suggestion::new(name, format!("https://example.com/search?q={name}"))
    }

    #[test]
    fn literal_query_comes_first() {
        let results = with_literal_entry(
            "rust",
            "https://example.com/search?q=rust".into(),
            vec![entry("rust lang"), entry("rustup")],
        );
        let names: Vec<_> = results.iter().map(|entry| entry.name.as_str()).collect();
        assert_eq!(names, ["rust", "rust lang", "rustup"]);
    }

    #[test]
    fn suggestions_equal_to_the_query_are_dropped() {
        let results = with_literal_entry(
            "rust",
            "https://example.com/search?q=rust".into(),
            vec![entry("rust"), entry("rust lang")],
        );
        let names: Vec<_> = results.iter().map(|entry| entry.name.as_str()).collect();
        assert_eq!(names, ["rust", "rust lang"]);
    }

    #[test]
    fn deduplication_is_case_sensitive() {
        let results = with_literal_entry(
            "rust",
            "https://example.com/search?q=rust".into(),
            vec![entry("Rust")],
        );
        let names: Vec<_> = results.iter().map(|entry| entry.name.as_str()).collect();
        assert_eq!(names, ["rust", "Rust"]);
    }
}
