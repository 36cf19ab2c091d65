//! HTTP-level integration tests for the auth endpoints and RBAC enforcement.

mod common;

use apnaghar_core::status::UserRole;
use axum::http::StatusCode;
use common::{body_json, get, get_auth, post_json, post_json_auth, TEST_PASSWORD};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_register_returns_token_and_user(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let body = json!({
        "name": "Asha",
        "email": "Asha@Example.com",
        "password": "secret12",
        "phone": "9000000001",
    });
    let response = post_json(app.clone(), "/api/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert!(json["data"]["token"].is_string());
    assert_eq!(json["data"]["user"]["email"], "asha@example.com");
    assert_eq!(json["data"]["user"]["role"], "user");
    assert!(json["data"]["user"].get("password_hash").is_none());

    let token = json["data"]["token"].as_str().unwrap();
    let me = get_auth(app, "/api/auth/me", token).await;
    assert_eq!(me.status(), StatusCode::OK);
    assert_eq!(body_json(me).await["data"]["name"], "Asha");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_register_rejects_short_password_and_duplicates(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let short = json!({ "name": "A", "email": "a@test.com", "password": "123" });
    let response = post_json(app.clone(), "/api/auth/register", short).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "VALIDATION_ERROR");

    let ok = json!({ "name": "A", "email": "a@test.com", "password": "123456" });
    let first = post_json(app.clone(), "/api/auth/register", ok.clone()).await;
    assert_eq!(first.status(), StatusCode::CREATED);
    let second = post_json(app, "/api/auth/register", ok).await;
    assert_eq!(second.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_success_and_wrong_password(pool: PgPool) {
    common::create_user(&pool, "buyer@test.com", UserRole::User).await;
    let app = common::build_test_app(pool).await;

    let good = json!({ "email": "buyer@test.com", "password": TEST_PASSWORD });
    let response = post_json(app.clone(), "/api/auth/login", good).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["data"]["token"].is_string());
    assert_eq!(json["data"]["user"]["role"], "user");

    let bad = json!({ "email": "buyer@test.com", "password": "nope" });
    let response = post_json(app.clone(), "/api/auth/login", bad).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let ghost = json!({ "email": "ghost@test.com", "password": "whatever" });
    let response = post_json(app, "/api/auth/login", ghost).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_me_requires_valid_token(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let response = get(app.clone(), "/api/auth/me").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = get_auth(app, "/api/auth/me", "not-a-jwt").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_admin_routes_reject_regular_users(pool: PgPool) {
    let (_user, token) = common::create_user(&pool, "buyer@test.com", UserRole::User).await;
    let app = common::build_test_app(pool).await;

    let response = post_json_auth(app.clone(), "/api/plots", common::plot_body("A-1"), &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(response).await["code"], "FORBIDDEN");

    let response = post_json(app, "/api/plots", common::plot_body("A-1")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_bootstrap_admin_is_idempotent(pool: PgPool) {
    let admin = apnaghar_api::config::AdminBootstrap {
        email: "Owner@ApnaGhar.com".to_string(),
        password: "owner-pass".to_string(),
        name: "Owner".to_string(),
    };

    assert!(apnaghar_api::bootstrap::ensure_admin(&pool, &admin).await.unwrap());
    assert!(!apnaghar_api::bootstrap::ensure_admin(&pool, &admin).await.unwrap());

    let app = common::build_test_app(pool).await;
    let login = json!({ "email": "owner@apnaghar.com", "password": "owner-pass" });
    let response = post_json(app, "/api/auth/login", login).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["user"]["role"], "admin");
}
