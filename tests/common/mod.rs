#![allow(dead_code)]

use axum::ServiceExt;
use axum::extract::Request;
use axum_test::TestServer;
use chrono::{Duration, Utc};
use redirect_rules::application::services::{TokenService, TokenSettings, TokenType};
use redirect_rules::domain::entities::User;
use redirect_rules::routes::{app_router, router};
use redirect_rules::state::AppState;
use redirect_rules::utils::password::hash_password_with_cost;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

pub const TEST_SECRET: &str = "test-signing-secret";

/// Minimum bcrypt cost keeps fixtures fast.
const TEST_BCRYPT_COST: u32 = 4;

pub fn token_settings() -> TokenSettings {
    TokenSettings::new(TEST_SECRET)
}

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(pool), token_settings())
}

/// Full router (auth middleware included), without trailing-slash normalization.
pub fn create_test_server(pool: PgPool) -> TestServer {
    TestServer::new(router(create_test_state(pool))).unwrap()
}

/// Production router, trailing-slash normalization included.
pub fn create_app_server(pool: PgPool) -> TestServer {
    let app = app_router(create_test_state(pool));
    TestServer::new(ServiceExt::<Request>::into_make_service(app)).unwrap()
}

pub async fn create_user(pool: &PgPool, username: &str, password: &str) -> i64 {
    let hash = hash_password_with_cost(password, TEST_BCRYPT_COST).unwrap();

    sqlx::query_scalar("INSERT INTO users (username, password_hash) VALUES ($1, $2) RETURNING id")
        .bind(username)
        .bind(hash)
        .fetch_one(pool)
        .await
        .unwrap()
}

fn token_user(user_id: i64, username: &str) -> User {
    User::new(user_id, username.to_string(), String::new(), Utc::now())
}

pub fn access_token(user_id: i64, username: &str) -> String {
    TokenService::new(token_settings())
        .issue_access(&token_user(user_id, username))
        .unwrap()
        .token
}

pub fn refresh_token(user_id: i64, username: &str) -> String {
    TokenService::new(token_settings())
        .issue_refresh(&token_user(user_id, username))
        .unwrap()
        .token
}

pub fn expired_access_token(user_id: i64, username: &str) -> String {
    TokenService::new(token_settings())
        .issue(
            &token_user(user_id, username),
            TokenType::Access,
            Duration::minutes(-5),
        )
        .unwrap()
        .token
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Creates a user and returns `(user_id, "Bearer <access token>")`.
pub async fn create_authenticated_user(pool: &PgPool, username: &str) -> (i64, String) {
    let user_id = create_user(pool, username, "password").await;
    (user_id, bearer(&access_token(user_id, username)))
}

pub async fn create_test_rule(
    pool: &PgPool,
    identifier: &str,
    url: &str,
    is_private: bool,
    user_id: Option<i64>,
) -> Uuid {
    let id = Uuid::new_v4();

    sqlx::query(
        "INSERT INTO redirect_rules (id, redirect_url, is_private, redirect_identifier, user_id) \
         VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(id)
    .bind(url)
    .bind(is_private)
    .bind(identifier)
    .bind(user_id)
    .execute(pool)
    .await
    .unwrap();

    id
}

pub async fn count_rules(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM redirect_rules")
        .fetch_one(pool)
        .await
        .unwrap()
}
