#![allow(dead_code)]

use std::sync::Arc;

use anyhow::Result;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use mockdata_server::{
    api,
    config::{AppConfig, DatabaseConfig},
    repository::{self, Repository, MIGRATOR},
    services::Services,
    AppState,
};
use serde_json::Value;
use sqlx::{Pool, Sqlite};
use tempfile::TempDir;
use tower::util::ServiceExt;

pub struct TestContext {
    pub temp_dir: TempDir,
    pub pool: Pool<Sqlite>,
    pub state: AppState,
    pub app: axum::Router,
}

/// Fresh migrated database in a temp directory, no sample data
pub async fn build_test_context() -> Result<TestContext> {
    let temp_dir = tempfile::tempdir()?;
    let db_path = temp_dir.path().join("mockdata.db");

    let config = AppConfig {
        database: DatabaseConfig {
            url: format!("sqlite://{}?mode=rwc", db_path.display()),
            ..DatabaseConfig::default()
        },
        ..AppConfig::default()
    };

    let pool = repository::connect(&config.database).await?;
    MIGRATOR.run(&pool).await?;

    let services = Services::new(Repository::new(pool.clone()));

    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };
    let app = api::create_router(state.clone());

    Ok(TestContext {
        temp_dir,
        pool,
        state,
        app,
    })
}

/// Same as [`build_test_context`] with the startup sample data loaded
pub async fn build_seeded_context() -> Result<TestContext> {
    let ctx = build_test_context().await?;
    ctx.state.services.seed().await?;
    Ok(ctx)
}

pub async fn request_json(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let req_body = body.unwrap_or(Value::Null).to_string();
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(req_body))
        .expect("request should build");

    send(app, req).await
}

pub async fn request_no_body(app: &axum::Router, method: &str, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("request should build");

    send(app, req).await
}

async fn send(app: &axum::Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app
        .clone()
        .oneshot(req)
        .await
        .expect("request should be handled");

    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("body should read");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice::<Value>(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).to_string()))
    };

    (status, json)
}

/// Titles of a JSON array of books, in response order
pub fn titles(body: &Value) -> Vec<String> {
    body.as_array()
        .expect("body should be an array")
        .iter()
        .map(|b| b["title"].as_str().unwrap_or_default().to_string())
        .collect()
}

/// Value of `field` for every element of a JSON array, in response order
pub fn field_values(body: &Value, field: &str) -> Vec<Value> {
    body.as_array()
        .expect("body should be an array")
        .iter()
        .map(|e| e[field].clone())
        .collect()
}
