//! HTTP-level integration tests for registration, login, token refresh,
//! and logout.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_json, post_json_auth, register_user};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_and_me(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "email": "  Ada@Example.COM ",
        "display_name": "Ada",
        "password": "correct-horse",
    });
    let response = post_json(app.clone(), "/api/v1/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    // Email is normalized; the password hash never leaves the server.
    assert_eq!(json["user"]["email"], "ada@example.com");
    assert!(json["user"].get("password_hash").is_none());
    assert!(json["access_token"].is_string());
    assert!(json["refresh_token"].is_string());

    let token = json["access_token"].as_str().unwrap();
    let response = get_auth(app, "/api/v1/auth/me", token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let me = body_json(response).await;
    assert_eq!(me["display_name"], "Ada");
    assert!(me["active_workspace_id"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_duplicate_email_conflicts(pool: PgPool) {
    let app = common::build_test_app(pool);
    register_user(app.clone(), "ada@example.com", "correct-horse").await;

    let body = serde_json::json!({
        "email": "Ada@example.com",
        "display_name": "Other Ada",
        "password": "another-password",
    });
    let response = post_json(app, "/api/v1/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_weak_password_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let body = serde_json::json!({
        "email": "ada@example.com",
        "display_name": "Ada",
        "password": "short",
    });
    let response = post_json(app, "/api/v1/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_wrong_password(pool: PgPool) {
    let app = common::build_test_app(pool);
    register_user(app.clone(), "ada@example.com", "correct-horse").await;

    let body = serde_json::json!({ "email": "ada@example.com", "password": "incorrect" });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_refresh_rotates_token(pool: PgPool) {
    let app = common::build_test_app(pool);
    register_user(app.clone(), "ada@example.com", "correct-horse").await;

    let body = serde_json::json!({ "email": "ada@example.com", "password": "correct-horse" });
    let response = post_json(app.clone(), "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let login = body_json(response).await;
    let refresh_token = login["refresh_token"].as_str().unwrap().to_string();

    let body = serde_json::json!({ "refresh_token": refresh_token });
    let response = post_json(app.clone(), "/api/v1/auth/refresh", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let refreshed = body_json(response).await;
    assert_ne!(
        refreshed["refresh_token"].as_str().unwrap(),
        refresh_token,
        "refresh token must rotate on use"
    );

    // The consumed token is dead.
    let body = serde_json::json!({ "refresh_token": refresh_token });
    let response = post_json(app, "/api/v1/auth/refresh", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_logout_revokes_sessions(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (token, _) = register_user(app.clone(), "ada@example.com", "correct-horse").await;

    let body = serde_json::json!({ "email": "ada@example.com", "password": "correct-horse" });
    let response = post_json(app.clone(), "/api/v1/auth/login", body).await;
    let login = body_json(response).await;
    let refresh_token = login["refresh_token"].as_str().unwrap().to_string();

    let response =
        post_json_auth(app.clone(), "/api/v1/auth/logout", &token, serde_json::json!({})).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let body = serde_json::json!({ "refresh_token": refresh_token });
    let response = post_json(app, "/api/v1/auth/refresh", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_protected_route_requires_token(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = common::get(app.clone(), "/api/v1/auth/me").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = get_auth(app, "/api/v1/auth/me", "garbage-token").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
