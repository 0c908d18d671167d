mod common;

use async_trait::async_trait;
use common::mock_source::serve;
use common::{users_in, users_json};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use userdeck::ui::events::AppEvent;
use userdeck::ui::runtime::spawn_fetch;
use userdeck::users::{HttpUserSource, SourceError, SourceTimeouts, UserRecord, UserSource};

fn timeouts() -> SourceTimeouts {
    SourceTimeouts {
        connect: Duration::from_secs(2),
        request: Duration::from_secs(5),
    }
}

#[tokio::test]
async fn fetches_whole_collection_with_one_plain_get() {
    let users = users_in("US", 25);
    let endpoint = serve(200, users_json(&users)).await;

    let source = HttpUserSource::new(endpoint.url(), timeouts()).unwrap();
    let fetched = source.fetch_users().await.unwrap();

    assert_eq!(fetched, users);
    assert_eq!(endpoint.request_count(), 1);
    assert_eq!(endpoint.requests.lock().unwrap()[0], "/users");
}

#[tokio::test]
async fn keeps_unparseable_timestamps_verbatim() {
    let endpoint = serve(
        200,
        r#"[{"id":"1","userName":"Ada","country":"UK","createdAt":"not a date"}]"#,
    )
    .await;

    let source = HttpUserSource::new(endpoint.url(), timeouts()).unwrap();
    let fetched = source.fetch_users().await.unwrap();

    assert_eq!(fetched[0].created_at, "not a date");
    assert_eq!(fetched[0].created_at_display(), "Invalid Date");
}

#[tokio::test]
async fn http_error_status_is_reported() {
    let endpoint = serve(503, r#"{"error":"down"}"#).await;
    let source = HttpUserSource::new(endpoint.url(), timeouts()).unwrap();

    match source.fetch_users().await.unwrap_err() {
        SourceError::Status { status, .. } => assert_eq!(status, 503),
        other => panic!("Expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn non_array_body_is_a_decode_error() {
    let endpoint = serve(200, r#"{"users":[]}"#).await;
    let source = HttpUserSource::new(endpoint.url(), timeouts()).unwrap();

    assert!(matches!(
        source.fetch_users().await.unwrap_err(),
        SourceError::Decode { .. }
    ));
}

#[tokio::test]
async fn unreachable_endpoint_is_a_request_error() {
    // Bind then drop to get a port with nothing listening.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let source =
        HttpUserSource::new(format!("http://127.0.0.1:{port}/users"), timeouts()).unwrap();

    assert!(matches!(
        source.fetch_users().await.unwrap_err(),
        SourceError::Request { .. }
    ));
}

struct CountingSource {
    result: fn() -> Result<Vec<UserRecord>, SourceError>,
    calls: AtomicUsize,
}

#[async_trait]
impl UserSource for CountingSource {
    async fn fetch_users(&self) -> Result<Vec<UserRecord>, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        (self.result)()
    }
}

#[tokio::test]
async fn spawn_fetch_posts_users_once() {
    let source = Arc::new(CountingSource {
        result: || Ok(users_in("US", 3)),
        calls: AtomicUsize::new(0),
    });
    let (tx, rx) = mpsc::channel();

    spawn_fetch(&Handle::current(), source.clone(), tx)
        .await
        .unwrap();

    match rx.try_recv() {
        Ok(AppEvent::UsersLoaded(users)) => assert_eq!(users.len(), 3),
        _ => panic!("Expected UsersLoaded"),
    }
    assert!(rx.try_recv().is_err());
    assert_eq!(source.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn spawn_fetch_failure_posts_nothing() {
    let source = Arc::new(CountingSource {
        result: || {
            Err(SourceError::Status {
                endpoint: "http://mock/users".to_string(),
                status: 500,
            })
        },
        calls: AtomicUsize::new(0),
    });
    let (tx, rx) = mpsc::channel();

    spawn_fetch(&Handle::current(), source, tx).await.unwrap();

    assert!(rx.try_recv().is_err());
}
