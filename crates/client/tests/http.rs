//! HTTP executor tests against a local mock server: payload normalization,
//! status/shape classification, and the empty-query fast path.

use mockito::Matcher;
use tokio_util::sync::CancellationToken;

use sayt_client::{
    HttpExecutor, Provider, QueryExecutor, SearchError, SuggestFormat, Suggestion,
};

fn mock_provider(server: &mockito::ServerGuard, format: SuggestFormat) -> Provider {
    Provider {
        label: "Mock".into(),
        suggest_url: format!("{}/suggest", server.url()),
        suggest_param: "q".into(),
        search_url: format!("{}/search", server.url()),
        search_param: "q".into(),
        format,
        default_results: Vec::new(),
    }
}

#[tokio::test]
async fn literal_query_is_prepended_and_duplicates_dropped() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/suggest")
        .match_query(Matcher::UrlEncoded("q".into(), "rust".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"["rust", ["rust", "rust lang", "rustup"]]"#)
        .create_async()
        .await;

    let provider = mock_provider(&server, SuggestFormat::OpenSearch);
    let executor = HttpExecutor::new(provider).unwrap();
    let results = executor
        .execute("rust", CancellationToken::new())
        .await
        .unwrap();

    let names: Vec<_> = results.iter().map(|entry| entry.name.as_str()).collect();
    assert_eq!(names, ["rust", "rust lang", "rustup"]);
    assert!(results[0].url.ends_with("/search?q=rust"));
    assert!(results[1].url.contains("q=rust+lang"));
    mock.assert_async().await;
}

#[tokio::test]
async fn phrase_object_payloads_are_normalized() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/suggest")
        .match_query(Matcher::UrlEncoded("q".into(), "ferris".into()))
        .with_status(200)
        .with_body(r#"[{"phrase": "ferris"}, {"phrase": "ferris wheel"}]"#)
        .create_async()
        .await;

    let provider = mock_provider(&server, SuggestFormat::PhraseObjects);
    let executor = HttpExecutor::new(provider).unwrap();
    let results = executor
        .execute("ferris", CancellationToken::new())
        .await
        .unwrap();

    let names: Vec<_> = results.iter().map(|entry| entry.name.as_str()).collect();
    assert_eq!(names, ["ferris", "ferris wheel"]);
}

#[tokio::test]
async fn non_success_status_maps_to_network_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/suggest")
        .match_query(Matcher::Any)
        .with_status(503)
        .with_body("upstream down")
        .create_async()
        .await;

    let provider = mock_provider(&server, SuggestFormat::OpenSearch);
    let executor = HttpExecutor::new(provider).unwrap();
    let err = executor
        .execute("rust", CancellationToken::new())
        .await
        .unwrap_err();

    match err {
        SearchError::Network(message) => assert!(message.contains("503")),
        other => panic!("expected a network error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_payload_maps_to_parse_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/suggest")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"unexpected": true}"#)
        .create_async()
        .await;

    let provider = mock_provider(&server, SuggestFormat::OpenSearch);
    let executor = HttpExecutor::new(provider).unwrap();
    let err = executor
        .execute("rust", CancellationToken::new())
        .await
        .unwrap_err();

    assert!(matches!(err, SearchError::Parse(_)));
}

#[tokio::test]
async fn non_json_body_maps_to_parse_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/suggest")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("<html>not json</html>")
        .create_async()
        .await;

    let provider = mock_provider(&server, SuggestFormat::OpenSearch);
    let executor = HttpExecutor::new(provider).unwrap();
    let err = executor
        .execute("rust", CancellationToken::new())
        .await
        .unwrap_err();

    assert!(matches!(err, SearchError::Parse(_)));
}

#[tokio::test]
async fn empty_query_serves_defaults_without_a_request() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/suggest")
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let mut provider = mock_provider(&server, SuggestFormat::OpenSearch);
    provider.default_results = vec![Suggestion::new("trending", "https://example.com/t")];
    let executor = HttpExecutor::new(provider).unwrap();
    let results = executor
        .execute("", CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "trending");
    mock.assert_async().await;
}

#[tokio::test]
async fn cancelled_token_settles_with_cancelled() {
    let server = mockito::Server::new_async().await;
    // No mock registered: a real request would fail, but the pre-cancelled
    // token must win the race first.
    let provider = mock_provider(&server, SuggestFormat::OpenSearch);
    let executor = HttpExecutor::new(provider).unwrap();

    let cancel = CancellationToken::new();
    cancel.cancel();
    let err = executor.execute("rust", cancel).await.unwrap_err();
    assert!(err.is_cancelled());
}
