mod common;

use http_url_shortener::client::{ClientError, ShortenerClient};
use std::net::SocketAddr;

async fn spawn_server(entries: &[(&str, &str)]) -> SocketAddr {
    let (state, _repo) = common::create_memory_state(entries);
    let app = http_url_shortener::routes::router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

#[tokio::test]
async fn test_client_shorten_and_resolve() {
    let addr = spawn_server(&[]).await;
    let client = ShortenerClient::new(format!("http://{addr}")).unwrap();

    let short_url = client.shorten("https://example.com/a/b").await.unwrap();
    let prefix = format!("http://{addr}/");
    assert!(short_url.starts_with(&prefix), "got {short_url}");

    let code = short_url.trim_start_matches(&prefix);
    assert_eq!(code.len(), 4);

    let location = client.resolve(code).await.unwrap();
    assert_eq!(location, "https://example.com/a/b");
}

#[tokio::test]
async fn test_client_resolve_existing_code() {
    let addr = spawn_server(&[("http://bbc.co.uk", "ABC1")]).await;
    let client = ShortenerClient::new(format!("http://{addr}/")).unwrap();

    assert_eq!(client.resolve("ABC1").await.unwrap(), "http://bbc.co.uk");
}

#[tokio::test]
async fn test_client_resolve_unknown_code() {
    let addr = spawn_server(&[]).await;
    let client = ShortenerClient::new(format!("http://{addr}")).unwrap();

    let err = client.resolve("ZZZZ").await.unwrap_err();
    assert!(matches!(err, ClientError::UnknownShortCode(_)));
    assert_eq!(
        err.to_string(),
        "Shortcode ZZZZ does not refer to a short URL"
    );
}

#[tokio::test]
async fn test_client_shorten_invalid_url() {
    let addr = spawn_server(&[]).await;
    let client = ShortenerClient::new(format!("http://{addr}")).unwrap();

    let err = client.shorten("not a url").await.unwrap_err();
    assert!(matches!(err, ClientError::Api(_)));
    assert_eq!(err.to_string(), "`url` is not a valid URL");
}

#[tokio::test]
async fn test_client_unexpected_status() {
    let addr = spawn_server(&[]).await;
    let client = ShortenerClient::new(format!("http://{addr}")).unwrap();

    // `/health` answers 200, which is not a redirect
    let err = client.resolve("health").await.unwrap_err();
    assert!(matches!(err, ClientError::UnexpectedStatus(200)));
}
