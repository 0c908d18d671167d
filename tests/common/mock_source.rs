//! Mock users endpoint for testing the HTTP data source.

#![allow(dead_code)]

use axum::http::header::CONTENT_TYPE;
use axum::http::{StatusCode, Uri};
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

/// A running mock endpoint.
pub struct MockEndpoint {
    pub addr: SocketAddr,
    /// Request URIs in arrival order.
    pub requests: Arc<Mutex<Vec<String>>>,
}

impl MockEndpoint {
    pub fn url(&self) -> String {
        format!("http://{}/users", self.addr)
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

/// Serve `body` with `status` on `GET /users`.
pub async fn serve(status: u16, body: impl Into<String>) -> MockEndpoint {
    let body: String = body.into();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let captured = Arc::clone(&requests);

    let app = Router::new().route(
        "/users",
        get(move |uri: Uri| {
            let body = body.clone();
            let captured = Arc::clone(&captured);
            async move {
                captured.lock().unwrap().push(uri.to_string());
                (
                    StatusCode::from_u16(status).unwrap(),
                    [(CONTENT_TYPE, "application/json")],
                    body,
                )
            }
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock endpoint");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockEndpoint { addr, requests }
}
