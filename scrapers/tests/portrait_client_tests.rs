//! Integration tests for HttpPortraitClient using HTTP stubbing.

mod common;

use std::time::Duration;

use common::http_mock::MockHttpServer;
use common::TEST_USER_AGENT;
use tinycongress_scrapers::congress::{HttpPortraitClient, PortraitApiError, PortraitClient};

fn client() -> HttpPortraitClient {
    HttpPortraitClient::new(TEST_USER_AGENT, Duration::from_secs(5)).expect("client build")
}

/// Test successful download returns the body unchanged.
#[tokio::test]
async fn test_fetch_portrait_success() {
    let server = MockHttpServer::start().await;

    server
        .expect_get("/P000197.jpg")
        .with_header("User-Agent", TEST_USER_AGENT)
        .respond_with_bytes(vec![0xFF, 0xD8, 0xFF, 0xE0])
        .mount()
        .await;

    let url = format!("{}/P000197.jpg", server.url());
    let bytes = client().fetch_portrait(&url).await.expect("should succeed");

    assert_eq!(bytes, vec![0xFF, 0xD8, 0xFF, 0xE0]);
}

/// Test 404 response is handled as NotFound error.
#[tokio::test]
async fn test_fetch_portrait_not_found() {
    let server = MockHttpServer::start().await;

    server
        .expect_get("/X000000.jpg")
        .respond_with_status(404)
        .mount()
        .await;

    let url = format!("{}/X000000.jpg", server.url());
    let result = client().fetch_portrait(&url).await;

    assert!(matches!(result, Err(PortraitApiError::NotFound { url: u }) if u == url));
}

/// Test other error statuses keep their code.
#[tokio::test]
async fn test_fetch_portrait_status_error() {
    let server = MockHttpServer::start().await;

    server
        .expect_get("/P000197.jpg")
        .respond_with_status(403)
        .mount()
        .await;

    let url = format!("{}/P000197.jpg", server.url());
    let result = client().fetch_portrait(&url).await;

    let err = result.unwrap_err();
    assert!(matches!(err, PortraitApiError::Status { status: 403, .. }));
    assert!(err.to_string().contains("403"));
}

/// Test a stalled origin trips the request timeout instead of hanging.
#[tokio::test]
async fn test_request_timeout() {
    let server = MockHttpServer::start().await;

    server
        .expect_get("/P000197.jpg")
        .respond_with_bytes(b"late".to_vec())
        .respond_with_delay(Duration::from_secs(5))
        .mount()
        .await;

    let client = HttpPortraitClient::new(TEST_USER_AGENT, Duration::from_millis(100))
        .expect("client build");

    let url = format!("{}/P000197.jpg", server.url());
    let result = client.fetch_portrait(&url).await;

    assert!(matches!(result, Err(PortraitApiError::Request(e)) if e.is_timeout()));
}

/// Test each call makes exactly one request; there is no retry.
#[tokio::test]
async fn test_no_retry_on_failure() {
    let server = MockHttpServer::start().await;

    server
        .expect_get("/P000197.jpg")
        .respond_with_status(503)
        .expect_times(1)
        .mount()
        .await;

    let url = format!("{}/P000197.jpg", server.url());
    let result = client().fetch_portrait(&url).await;

    assert!(matches!(
        result,
        Err(PortraitApiError::Status { status: 503, .. })
    ));
    server.verify().await;
}

/// Test the default reqwest agent is not what goes on the wire.
#[tokio::test]
async fn test_user_agent_is_sent() {
    let server = MockHttpServer::start().await;

    server
        .expect_get("/P000197.jpg")
        .with_header("User-Agent", "expected-agent")
        .respond_with_bytes(b"jpeg".to_vec())
        .mount()
        .await;

    let url = format!("{}/P000197.jpg", server.url());

    let wrong = HttpPortraitClient::new("other-agent", Duration::from_secs(5)).expect("build");
    let result = wrong.fetch_portrait(&url).await;
    // Mock returns 404 because header didn't match
    assert!(matches!(result, Err(PortraitApiError::NotFound { .. })));

    let right = HttpPortraitClient::with_client(reqwest::Client::new(), "expected-agent");
    let bytes = right.fetch_portrait(&url).await.expect("should succeed");
    assert_eq!(bytes, b"jpeg");
}

/// Test an unreachable origin surfaces as a transport error.
#[tokio::test]
async fn test_connection_refused() {
    // Grab a free port, then release it so nothing is listening
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().expect("addr").port();
    drop(listener);
    let url = format!("http://127.0.0.1:{port}/P000197.jpg");

    let result = client().fetch_portrait(&url).await;

    assert!(matches!(result, Err(PortraitApiError::Request(_))));
}
