#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use redirector::infrastructure::metrics::CountingMetrics;
use redirector::infrastructure::store::InMemoryStore;
use redirector::state::AppState;
use tower::ServiceExt;

/// Application state wired to an in-memory store and counting metrics.
pub struct TestContext {
    pub state: AppState,
    pub store: Arc<InMemoryStore>,
    pub metrics: Arc<CountingMetrics>,
}

pub fn create_test_state() -> TestContext {
    create_test_state_with(InMemoryStore::new())
}

pub fn create_test_state_with(store: InMemoryStore) -> TestContext {
    let store = Arc::new(store);
    let metrics = Arc::new(CountingMetrics::new());

    let state = AppState::new(store.clone(), metrics.clone(), None);

    TestContext {
        state,
        store,
        metrics,
    }
}

/// Sends a raw request through `app` without any client-side URL handling.
pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub fn get(host: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("host", host)
        .body(Body::empty())
        .unwrap()
}
