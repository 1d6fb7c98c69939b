//! Shared helpers for API integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use mergington_api::{router, AppContext};
use mergington_domain::{Config, DatabaseConfig, SeedConfig};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

/// Build a context over a fresh database file.
///
/// Returns the temp dir alongside so the file outlives the test body.
pub async fn create_test_context(seed: bool) -> (Arc<AppContext>, TempDir) {
    let temp_dir = TempDir::new().expect("temp dir created");
    let config = Config {
        database: DatabaseConfig {
            path: temp_dir.path().join("mergington.db").to_string_lossy().to_string(),
            pool_size: 4,
        },
        seed: SeedConfig { enabled: seed },
        ..Config::default()
    };

    let ctx = AppContext::new_with_config(config).await.expect("context created");
    (Arc::new(ctx), temp_dir)
}

pub async fn test_app() -> (Router, Arc<AppContext>, TempDir) {
    let (ctx, dir) = create_test_context(true).await;
    (router(Arc::clone(&ctx)), ctx, dir)
}

/// Send one request and return the status with the JSON body (or `Null`).
pub async fn send(app: &Router, method: &str, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri).body(Body::empty()).unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}
