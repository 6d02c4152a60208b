//! Shared harness for the end-to-end pipeline tests: the full axum router
//! over a real in-memory SQLite store, with a scripted classifier standing
//! in for the external moderation service.

use std::sync::Arc;

use api_adapters::{create_router, AppState};
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use domains::ContentClassifier;
use services::{BoardService, ModerationGate};
use storage_adapters::SqliteMessageRepo;
use tower::ServiceExt;

pub const TEST_ADMIN_SECRET: &str = "test-admin-secret";

/// Deterministic stand-in for the external classifier: flags any text
/// containing one of the configured terms, or errors on every call.
pub struct StubClassifier {
    flagged_terms: Vec<String>,
    fail: bool,
}

impl StubClassifier {
    pub fn clean() -> Self {
        Self {
            flagged_terms: Vec::new(),
            fail: false,
        }
    }

    pub fn flagging(terms: &[&str]) -> Self {
        Self {
            flagged_terms: terms.iter().map(|t| t.to_string()).collect(),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            flagged_terms: Vec::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl ContentClassifier for StubClassifier {
    async fn is_flagged(&self, text: &str) -> anyhow::Result<bool> {
        if self.fail {
            anyhow::bail!("classifier offline");
        }
        Ok(self
            .flagged_terms
            .iter()
            .any(|term| text.contains(term.as_str())))
    }
}

pub struct TestApp {
    pub router: Router,
    /// Direct handle on the store, for seeding rows the pipeline would
    /// refuse (back-dated timestamps) and for asserting on raw contents.
    pub repo: Arc<SqliteMessageRepo>,
}

pub async fn test_app(classifier: StubClassifier) -> TestApp {
    let repo = Arc::new(SqliteMessageRepo::in_memory().await.expect("in-memory store"));
    let moderation = ModerationGate::new(Arc::new(classifier), false);
    let board = BoardService::new(repo.clone(), moderation, TEST_ADMIN_SECRET.to_string());
    let router = create_router(Arc::new(AppState { board }));
    TestApp { router, repo }
}

pub async fn post_json(
    router: &Router,
    path: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(router, request).await
}

pub async fn get(router: &Router, path: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder().uri(path).body(Body::empty()).unwrap();
    send(router, request).await
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}
