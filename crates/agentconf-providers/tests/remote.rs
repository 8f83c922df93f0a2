//! HTTP and S3 provider tests against an in-process server.

use agentconf_core::{FetchError, SchemeProvider, split_scheme};
use agentconf_providers::{HttpProvider, ProviderSettings, S3Provider};
use agentconf_test_utils::ConfigServer;
use pretty_assertions::assert_eq;

fn locator(location: &str) -> &str {
    split_scheme(location).expect("scheme").1
}

/// Successful responses return the body unchanged.
#[tokio::test]
async fn http_fetch_returns_body() {
    let server = ConfigServer::start([("/agent.yaml", 200, "receivers: {otlp: {}}\n")]).await;
    let provider = HttpProvider::http(&ProviderSettings::default()).expect("provider");

    let location = server.location("/agent.yaml");
    let content = provider.fetch(locator(&location)).await.expect("fetch");
    assert_eq!(content, b"receivers: {otlp: {}}\n");
}

/// Non-success statuses surface as fetch errors naming the URL.
#[tokio::test]
async fn http_non_success_status_fails() {
    let server = ConfigServer::start([("/broken.yaml", 500, "oops")]).await;
    let provider = HttpProvider::http(&ProviderSettings::default()).expect("provider");

    for (path, expected_status) in [("/broken.yaml", 500), ("/absent.yaml", 404)] {
        let location = server.location(path);
        let err = provider.fetch(locator(&location)).await.unwrap_err();
        match err {
            FetchError::Status { url, status } => {
                assert_eq!(url, location);
                assert_eq!(status, expected_status);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}

/// Connection failures are transport errors.
#[tokio::test]
async fn http_transport_failure() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let location = format!("http://{}/agent.yaml", listener.local_addr().expect("addr"));
    drop(listener);

    let settings =
        ProviderSettings::default().with_http_timeout(std::time::Duration::from_secs(2));
    let provider = HttpProvider::http(&settings).expect("provider");
    let err = provider.fetch(locator(&location)).await.unwrap_err();
    assert!(matches!(err, FetchError::Transport(_)));
}

/// S3 objects are read through the configured endpoint.
#[tokio::test]
async fn s3_fetch_maps_statuses() {
    let server = ConfigServer::start([
        ("/agent-config/prod/agent.yaml", 200, "exporters: {awsemf: {}}\n"),
        ("/locked/agent.yaml", 403, "denied"),
        ("/flaky/agent.yaml", 503, "later"),
    ])
    .await;
    let settings = ProviderSettings::default().with_s3_endpoint(server.base_url());
    let provider = S3Provider::from_settings(&settings).expect("provider");

    let content = provider
        .fetch("//agent-config.s3.us-west-2.amazonaws.com/prod/agent.yaml")
        .await
        .expect("fetch");
    assert_eq!(content, b"exporters: {awsemf: {}}\n");

    let missing = provider
        .fetch("//agent-config.s3.us-west-2.amazonaws.com/absent.yaml")
        .await
        .unwrap_err();
    assert!(matches!(missing, FetchError::NotFound(_)));

    let denied = provider
        .fetch("//locked.s3.us-west-2.amazonaws.com/agent.yaml")
        .await
        .unwrap_err();
    assert!(matches!(denied, FetchError::AccessDenied(_)));

    let unavailable = provider
        .fetch("//flaky.s3.us-west-2.amazonaws.com/agent.yaml")
        .await
        .unwrap_err();
    assert!(matches!(unavailable, FetchError::Status { status: 503, .. }));
}
