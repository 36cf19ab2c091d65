//! HTTP-level integration tests for site settings and owner profiles.

mod common;

use apnaghar_core::status::UserRole;
use axum::http::StatusCode;
use common::{body_json, delete_auth, get, post_json_auth, put_json_auth};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_settings_list_is_a_key_value_map(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let response = get(app, "/api/settings").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["default_language"], "hi");
    assert_eq!(json["data"]["default_contact_email"], "contact@apnagharplots.com");
    assert_eq!(json["data"].as_object().unwrap().len(), 4);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_setting_by_key(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let json = body_json(get(app.clone(), "/api/settings/default_contact_phone").await).await;
    assert_eq!(json["data"]["key"], "default_contact_phone");
    assert_eq!(json["data"]["value"], "+91 9876543210");

    let response = get(app, "/api/settings/no_such_key").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_setting_upsert(pool: PgPool) {
    let admin = common::admin_token(&pool).await;
    let (_user, token) = common::create_user(&pool, "buyer@test.com", UserRole::User).await;
    let app = common::build_test_app(pool).await;

    let body = json!({ "value": "en" });
    let response = put_json_auth(app.clone(), "/api/settings/default_language", body.clone(), &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = put_json_auth(app.clone(), "/api/settings/default_language", body, &admin).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["value"], "en");
    assert!(json["data"]["description"].as_str().unwrap().contains("Default language"));

    let body = json!({ "value": "10:00-18:00", "description": "Office hours" });
    let response = put_json_auth(app.clone(), "/api/settings/office_hours", body, &admin).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(get(app.clone(), "/api/settings").await).await;
    assert_eq!(json["data"]["default_language"], "en");
    assert_eq!(json["data"]["office_hours"], "10:00-18:00");

    let response = put_json_auth(app, "/api/settings/office_hours", json!({ "value": " " }), &admin).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Owner info
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_owner_info_ordering_and_visibility(pool: PgPool) {
    let admin = common::admin_token(&pool).await;
    let app = common::build_test_app(pool).await;

    let profiles = [
        json!({ "name": "Second", "display_order": 2 }),
        json!({ "name": "First", "name_hi": "पहला", "display_order": 1 }),
        json!({ "name": "Retired", "display_order": 0, "is_active": false }),
    ];
    for body in profiles {
        let response = post_json_auth(app.clone(), "/api/owner-info", body, &admin).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let json = body_json(get(app.clone(), "/api/owner-info").await).await;
    assert_eq!(json["count"], 2);
    assert_eq!(json["data"][0]["name"], "First");
    assert_eq!(json["data"][0]["name_hi"], "पहला");
    assert_eq!(json["data"][1]["name"], "Second");

    let json = body_json(get(app, "/api/owner-info?show_all=true").await).await;
    assert_eq!(json["count"], 3);
    assert_eq!(json["data"][0]["name"], "Retired");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_owner_info_crud(pool: PgPool) {
    let admin = common::admin_token(&pool).await;
    let (_user, token) = common::create_user(&pool, "buyer@test.com", UserRole::User).await;
    let app = common::build_test_app(pool).await;

    let body = json!({ "name": "Suresh Sharma", "designation": "Founder" });
    let response = post_json_auth(app.clone(), "/api/owner-info", body.clone(), &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = post_json_auth(app.clone(), "/api/owner-info", json!({ "name": "" }), &admin).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json_auth(app.clone(), "/api/owner-info", body, &admin).await;
    let created = body_json(response).await;
    assert_eq!(created["data"]["is_active"], true);
    assert_eq!(created["data"]["display_order"], 0);
    let id = created["data"]["id"].as_i64().unwrap();
    let uri = format!("/api/owner-info/{id}");

    let update = json!({ "bio": "Twenty years in Jaipur real estate", "is_active": false });
    let response = put_json_auth(app.clone(), &uri, update, &admin).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["designation"], "Founder");
    assert_eq!(json["data"]["is_active"], false);

    // Inactive profiles stay reachable by id.
    assert_eq!(get(app.clone(), &uri).await.status(), StatusCode::OK);

    let response = delete_auth(app.clone(), &uri, &admin).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(get(app.clone(), &uri).await.status(), StatusCode::NOT_FOUND);
    assert_eq!(delete_auth(app, &uri, &admin).await.status(), StatusCode::NOT_FOUND);
}
