//! End-to-end client tests against a local mock Jira.

use lt_config::TrackerConfig;
use lt_core::{IssueKey, IssueTracker, build_outcome};
use lt_tracker::{JiraClient, TrackerError};
use mockito::{Matcher, Server};
use pretty_assertions::assert_eq;

const TOKEN: &str = "test-token";

const ISSUE_BODY: &str = r#"{
    "key": "PROJ-1",
    "changelog": {
        "startAt": 0,
        "maxResults": 100,
        "total": 3,
        "histories": [
            { "created": "2024-01-01T08:00:00.000+0000",
              "items": [ { "field": "status", "fromString": "To Do", "toString": "In Progress" } ] },
            { "created": "2024-01-05T08:00:00.000+0000",
              "items": [ { "field": "status", "fromString": "In Progress", "toString": "Blocked" } ] },
            { "created": "2024-01-11T08:00:00.000+0000",
              "items": [ { "field": "status", "fromString": "Blocked", "toString": "Done" } ] }
        ]
    }
}"#;

fn client_for(server: &Server) -> JiraClient {
    JiraClient::new(&TrackerConfig {
        url: server.url(),
        api_token: TOKEN.into(),
        ..Default::default()
    })
    .expect("client builds")
}

#[tokio::test]
async fn connect_sends_bearer_token() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/rest/api/2/myself")
        .match_header("authorization", "Bearer test-token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{ "name": "jdoe", "displayName": "Jane Doe" }"#)
        .create_async()
        .await;

    client_for(&server).connect().await.expect("connects");
    mock.assert_async().await;
}

#[tokio::test]
async fn connect_reports_rejected_token() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/rest/api/2/myself")
        .with_status(401)
        .create_async()
        .await;

    let err = client_for(&server).connect().await.unwrap_err();
    assert!(matches!(err, TrackerError::Unauthorized { status: 401 }));
}

#[tokio::test]
async fn connect_reports_unreachable_host() {
    let client = JiraClient::new(&TrackerConfig {
        url: "http://127.0.0.1:9".into(),
        api_token: TOKEN.into(),
        timeout_secs: 2,
        ..Default::default()
    })
    .unwrap();

    let err = client.connect().await.unwrap_err();
    assert!(matches!(err, TrackerError::Http(_)));
}

#[tokio::test]
async fn fetch_history_returns_status_events() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/rest/api/2/issue/PROJ-1")
        .match_query(Matcher::UrlEncoded("expand".into(), "changelog".into()))
        .match_header("authorization", "Bearer test-token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(ISSUE_BODY)
        .create_async()
        .await;

    let events = client_for(&server).fetch_history("PROJ-1").await.unwrap();
    mock.assert_async().await;

    let targets: Vec<_> = events.iter().filter_map(|e| e.to_status()).collect();
    assert_eq!(targets, vec!["In Progress", "Blocked", "Done"]);

    let outcome = build_outcome(IssueKey::parse("PROJ-1").unwrap(), events);
    assert_eq!(outcome.report_fields(), [
        "2024-01-01".to_string(),
        "2024-01-11".to_string(),
        "10".to_string()
    ]);
}

#[tokio::test]
async fn fetch_history_maps_not_found() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/rest/api/2/issue/NOPE-9")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_body(r#"{"errorMessages":["Issue Does Not Exist"],"errors":{}}"#)
        .create_async()
        .await;

    let err = client_for(&server).fetch_history("NOPE-9").await.unwrap_err();
    assert!(matches!(err, TrackerError::IssueNotFound(ref key) if key == "NOPE-9"));
}

#[tokio::test]
async fn fetch_history_reports_rate_limit_without_retrying() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/rest/api/2/issue/PROJ-2")
        .match_query(Matcher::Any)
        .with_status(429)
        .with_header("retry-after", "15")
        .expect(1)
        .create_async()
        .await;

    let err = client_for(&server).fetch_history("PROJ-2").await.unwrap_err();
    assert!(matches!(
        err,
        TrackerError::RateLimited {
            retry_after_secs: 15
        }
    ));
    mock.assert_async().await;
}

#[tokio::test]
async fn fetch_history_reports_server_errors() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/rest/api/2/issue/PROJ-3")
        .match_query(Matcher::Any)
        .with_status(502)
        .with_body("bad gateway")
        .create_async()
        .await;

    let err = client_for(&server).fetch_history("PROJ-3").await.unwrap_err();
    assert!(matches!(err, TrackerError::Api { status: 502, ref message } if message == "bad gateway"));
}
