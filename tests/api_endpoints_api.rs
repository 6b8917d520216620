mod common;

use axum::http::StatusCode;
use common::{build_test_context, field_values, request_json, request_no_body};
use serde_json::{json, Value};

async fn create(app: &axum::Router, body: Value) -> Value {
    let (status, created) = request_json(app, "POST", "/api/apis", Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    created
}

#[tokio::test]
async fn create_then_get_returns_same_record() {
    let ctx = build_test_context().await.expect("test context should build");

    let created = create(
        &ctx.app,
        json!({
            "name": "List books",
            "description": "Returns every book",
            "method": "GET",
            "path": "/api/books",
            "requiresAuth": false
        }),
    )
    .await;

    assert!(created["id"].as_i64().is_some());
    assert_eq!(created["isActive"], true);
    assert!(created["createdAt"].is_string());
    assert_eq!(created["updatedAt"], Value::Null);

    let id = created["id"].as_i64().unwrap();
    let (status, fetched) = request_no_body(&ctx.app, "GET", &format!("/api/apis/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn update_keeps_path_id_and_creation_time() {
    let ctx = build_test_context().await.expect("test context should build");

    let created = create(
        &ctx.app,
        json!({"name": "Old", "method": "GET", "path": "/old"}),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let (status, updated) = request_json(
        &ctx.app,
        "PUT",
        &format!("/api/apis/{id}"),
        Some(json!({
            "id": 999,
            "name": "New",
            "method": "POST",
            "path": "/new",
            "requiresAuth": true,
            "isActive": false
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], id);
    assert_eq!(updated["name"], "New");
    assert_eq!(updated["method"], "POST");
    assert_eq!(updated["requiresAuth"], true);
    assert_eq!(updated["isActive"], false);
    assert_eq!(updated["createdAt"], created["createdAt"]);
    assert!(updated["updatedAt"].is_string());

    let (status, _) = request_no_body(&ctx.app, "GET", "/api/apis/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn missing_id_returns_404_with_empty_body() {
    let ctx = build_test_context().await.expect("test context should build");

    let (status, body) = request_no_body(&ctx.app, "GET", "/api/apis/42").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, Value::Null);

    let (status, body) = request_json(
        &ctx.app,
        "PUT",
        "/api/apis/42",
        Some(json!({"name": "x", "method": "GET", "path": "/x"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, Value::Null);

    let (status, body) = request_no_body(&ctx.app, "DELETE", "/api/apis/42").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn delete_twice_returns_200_then_404() {
    let ctx = build_test_context().await.expect("test context should build");

    let created = create(&ctx.app, json!({"name": "Gone", "method": "DELETE", "path": "/gone"})).await;
    let uri = format!("/api/apis/{}", created["id"]);

    let (status, body) = request_no_body(&ctx.app, "DELETE", &uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Null);

    let (status, _) = request_no_body(&ctx.app, "DELETE", &uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = request_no_body(&ctx.app, "GET", &uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn method_filter_ignores_case() {
    let ctx = build_test_context().await.expect("test context should build");

    create(&ctx.app, json!({"name": "a", "method": "GET", "path": "/a"})).await;
    create(&ctx.app, json!({"name": "b", "method": "post", "path": "/b"})).await;
    create(&ctx.app, json!({"name": "c", "method": "Get", "path": "/c"})).await;

    let (status, body) = request_no_body(&ctx.app, "GET", "/api/apis/method/get").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(field_values(&body, "name"), vec![json!("a"), json!("c")]);

    let (_, body) = request_no_body(&ctx.app, "GET", "/api/apis/method/POST").await;
    assert_eq!(field_values(&body, "name"), vec![json!("b")]);

    let (_, body) = request_no_body(&ctx.app, "GET", "/api/apis/method/PATCH").await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn active_and_requires_auth_filters() {
    let ctx = build_test_context().await.expect("test context should build");

    create(
        &ctx.app,
        json!({"name": "open", "method": "GET", "path": "/open"}),
    )
    .await;
    create(
        &ctx.app,
        json!({"name": "secured", "method": "GET", "path": "/secured", "requiresAuth": true}),
    )
    .await;
    create(
        &ctx.app,
        json!({"name": "retired", "method": "GET", "path": "/retired", "isActive": false}),
    )
    .await;

    let (status, body) = request_no_body(&ctx.app, "GET", "/api/apis/active").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(field_values(&body, "name"), vec![json!("open"), json!("secured")]);

    let (_, body) = request_no_body(&ctx.app, "GET", "/api/apis/requires-auth/true").await;
    assert_eq!(field_values(&body, "name"), vec![json!("secured")]);

    let (_, body) = request_no_body(&ctx.app, "GET", "/api/apis/requires-auth/false").await;
    assert_eq!(field_values(&body, "name"), vec![json!("open"), json!("retired")]);

    let (status, _) = request_no_body(&ctx.app, "GET", "/api/apis/requires-auth/maybe").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn name_search_falls_back_to_all() {
    let ctx = build_test_context().await.expect("test context should build");

    create(&ctx.app, json!({"name": "List Books", "method": "GET", "path": "/books"})).await;
    create(&ctx.app, json!({"name": "List Users", "method": "GET", "path": "/users"})).await;

    let (status, body) = request_no_body(&ctx.app, "GET", "/api/apis/search?name=BOOK").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(field_values(&body, "name"), vec![json!("List Books")]);

    let (_, all) = request_no_body(&ctx.app, "GET", "/api/apis").await;
    let (_, unfiltered) = request_no_body(&ctx.app, "GET", "/api/apis/search").await;
    assert_eq!(unfiltered, all);
    assert_eq!(all.as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn invalid_fields_are_rejected() {
    let ctx = build_test_context().await.expect("test context should build");

    let (status, body) = request_json(
        &ctx.app,
        "POST",
        "/api/apis",
        Some(json!({"name": "", "method": "GET", "path": "/x"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");

    let (_, all) = request_no_body(&ctx.app, "GET", "/api/apis").await;
    assert_eq!(all, json!([]));
}
