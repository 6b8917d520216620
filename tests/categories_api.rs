mod common;

use axum::http::StatusCode;
use common::{build_seeded_context, build_test_context, field_values, request_json, request_no_body};
use serde_json::{json, Value};

#[tokio::test]
async fn create_update_delete_category() {
    let ctx = build_test_context().await.expect("test context should build");

    let (status, created) = request_json(
        &ctx.app,
        "POST",
        "/api/categories",
        Some(json!({"name": "Poetry", "description": "Verse"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["isActive"], true);

    let uri = format!("/api/categories/{}", created["id"]);
    let (status, fetched) = request_no_body(&ctx.app, "GET", &uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, updated) = request_json(
        &ctx.app,
        "PUT",
        &uri,
        Some(json!({"name": "Poems", "isActive": false})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["name"], "Poems");
    assert_eq!(updated["description"], Value::Null);
    assert_eq!(updated["isActive"], false);

    let (status, _) = request_no_body(&ctx.app, "DELETE", &uri).await;
    assert_eq!(status, StatusCode::OK);
    let (status, body) = request_no_body(&ctx.app, "GET", &uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn search_without_match_returns_empty_list() {
    let ctx = build_seeded_context().await.expect("test context should build");

    let (status, body) =
        request_no_body(&ctx.app, "GET", "/api/categories/search?name=zzzz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, body) =
        request_no_body(&ctx.app, "GET", "/api/categories/search/query?q=zzzz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn search_without_name_equals_list() {
    let ctx = build_seeded_context().await.expect("test context should build");

    let (_, all) = request_no_body(&ctx.app, "GET", "/api/categories").await;
    let (status, unfiltered) = request_no_body(&ctx.app, "GET", "/api/categories/search").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(unfiltered, all);

    let (_, empty_name) = request_no_body(&ctx.app, "GET", "/api/categories/search?name=").await;
    assert_eq!(empty_name, all);
}

#[tokio::test]
async fn name_search_is_case_insensitive_substring() {
    let ctx = build_seeded_context().await.expect("test context should build");

    let (_, body) = request_no_body(&ctx.app, "GET", "/api/categories/search?name=FICTION").await;
    assert_eq!(
        field_values(&body, "name"),
        vec![json!("Fiction"), json!("Non-Fiction")]
    );
}

#[tokio::test]
async fn free_text_search_matches_description() {
    let ctx = build_seeded_context().await.expect("test context should build");

    let (status, body) =
        request_no_body(&ctx.app, "GET", "/api/categories/search/query?q=research").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(field_values(&body, "name"), vec![json!("Science")]);
}

#[tokio::test]
async fn free_text_search_requires_q() {
    let ctx = build_seeded_context().await.expect("test context should build");

    let (status, _) = request_no_body(&ctx.app, "GET", "/api/categories/search/query").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn active_filter_hides_inactive_categories() {
    let ctx = build_seeded_context().await.expect("test context should build");

    request_json(
        &ctx.app,
        "POST",
        "/api/categories",
        Some(json!({"name": "Archive", "isActive": false})),
    )
    .await;

    let (_, all) = request_no_body(&ctx.app, "GET", "/api/categories").await;
    assert_eq!(all.as_array().map(Vec::len), Some(4));

    let (status, active) = request_no_body(&ctx.app, "GET", "/api/categories/active").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        field_values(&active, "name"),
        vec![json!("Fiction"), json!("Non-Fiction"), json!("Science")]
    );
}

#[tokio::test]
async fn lookup_by_exact_name() {
    let ctx = build_seeded_context().await.expect("test context should build");

    let (status, body) = request_no_body(&ctx.app, "GET", "/api/categories/name/science").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Science");

    let (status, body) = request_no_body(&ctx.app, "GET", "/api/categories/name/Sci").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn lookups_fold_non_ascii_case() {
    let ctx = build_test_context().await.expect("test context should build");

    let (status, created) = request_json(
        &ctx.app,
        "POST",
        "/api/categories",
        Some(json!({"name": "Économie", "description": "Ökonomie"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) =
        request_no_body(&ctx.app, "GET", "/api/categories/search?name=%C3%A9conomie").await;
    assert_eq!(body, json!([created.clone()]));

    let (_, body) =
        request_no_body(&ctx.app, "GET", "/api/categories/search/query?q=%C3%B6konomie").await;
    assert_eq!(body, json!([created.clone()]));

    let (status, body) =
        request_no_body(&ctx.app, "GET", "/api/categories/name/%C3%89CONOMIE").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, created);
}
