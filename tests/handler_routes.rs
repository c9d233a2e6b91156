mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};
use sqlx::PgPool;

#[sqlx::test]
async fn test_retrieve_token_with_trailing_slash(pool: PgPool) {
    common::create_user(&pool, "alice", "s3cret").await;
    let server = common::create_app_server(pool);

    let response = server
        .post("/retrieve-token/")
        .json(&json!({ "username": "alice", "password": "s3cret" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["username"], "alice");
}

#[sqlx::test]
async fn test_retrieve_token_with_trailing_slash_invalid_json(pool: PgPool) {
    let server = common::create_app_server(pool);

    let response = server.post("/retrieve-token/").text("{bad").await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>(), json!({ "error": "Invalid JSON" }));
}

#[sqlx::test]
async fn test_retrieve_token_with_trailing_slash_empty_object(pool: PgPool) {
    let server = common::create_app_server(pool);

    let response = server.post("/retrieve-token/").json(&json!({})).await;

    response.assert_status_bad_request();

    let body = response.json::<Value>();
    assert_eq!(body["errors"]["username"], json!(["This field is required."]));
    assert_eq!(body["errors"]["password"], json!(["This field is required."]));
}

#[sqlx::test]
async fn test_create_rule_with_trailing_slash_requires_auth(pool: PgPool) {
    let server = common::create_app_server(pool.clone());

    let response = server
        .post("/url/")
        .json(&json!({ "redirect_url": "https://test.com" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(common::count_rules(&pool).await, 0);
}

#[sqlx::test]
async fn test_create_rule_with_trailing_slash(pool: PgPool) {
    let (_, auth) = common::create_authenticated_user(&pool, "alice").await;
    let server = common::create_app_server(pool.clone());

    let response = server
        .post("/url/")
        .add_header("Authorization", auth)
        .json(&json!({ "redirect_url": "https://test.com" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["redirect_url"], "https://test.com");
    assert_eq!(common::count_rules(&pool).await, 1);
}

#[sqlx::test]
async fn test_list_rules_with_trailing_slash(pool: PgPool) {
    let (user_id, auth) = common::create_authenticated_user(&pool, "alice").await;
    common::create_test_rule(&pool, "slashRule1", "https://a.com", false, Some(user_id)).await;
    let server = common::create_app_server(pool);

    let response = server
        .get("/url/redirect_rules/")
        .add_header("Authorization", auth)
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>().as_array().unwrap().len(), 1);
}

#[sqlx::test]
async fn test_public_redirect_with_trailing_slash(pool: PgPool) {
    common::create_test_rule(&pool, "slashRule2", "https://b.com", false, None).await;
    let server = common::create_app_server(pool);

    let response = server.get("/redirect/public/slashRule2/").await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.json::<Value>()["redirect_url"], "https://b.com");
}

#[sqlx::test]
async fn test_routes_without_trailing_slash_still_match(pool: PgPool) {
    let (_, auth) = common::create_authenticated_user(&pool, "alice").await;
    let server = common::create_app_server(pool);

    let response = server
        .post("/url")
        .add_header("Authorization", auth)
        .json(&json!({ "redirect_url": "https://test.com" }))
        .await;

    response.assert_status(StatusCode::CREATED);
}
