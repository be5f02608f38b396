use std::{
    net::SocketAddr,
    sync::{Arc, Mutex},
};

use axum::{
    Router,
    extract::{RawQuery, State},
    http::StatusCode,
    routing::get,
};

/// Scripted response of the mock classes API
#[derive(Clone)]
struct MockState {
    status: StatusCode,
    body: String,
    queries: Arc<Mutex<Vec<Option<String>>>>,
}

/// A local `GET /classes` server answering every request with the same
/// status and body, recording the raw query string of each request.
pub struct MockClassesServer {
    addr: SocketAddr,
    queries: Arc<Mutex<Vec<Option<String>>>>,
}

impl MockClassesServer {
    pub async fn start(status: StatusCode, body: &str) -> Self {
        let queries = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            status,
            body: body.to_string(),
            queries: queries.clone(),
        };

        let app = Router::new()
            .route("/classes", get(list_classes))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().expect("Mock server has no address");

        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Mock server failed");
        });

        Self { addr, queries }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Raw query strings received so far, in arrival order
    pub fn queries(&self) -> Vec<Option<String>> {
        self.queries.lock().unwrap().clone()
    }
}

async fn list_classes(
    State(state): State<MockState>,
    RawQuery(query): RawQuery,
) -> (StatusCode, String) {
    state.queries.lock().unwrap().push(query);
    (state.status, state.body.clone())
}
