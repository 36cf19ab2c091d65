//! HTTP-level integration tests for the upload endpoints (local-disk backend).

mod common;

use apnaghar_core::status::UserRole;
use axum::http::StatusCode;
use common::{body_json, get, post_multipart_auth};
use http_body_util::BodyExt;
use sqlx::PgPool;

const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\nfake-image-data";

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_single_image_is_stored_and_served(pool: PgPool) {
    let admin = common::admin_token(&pool).await;
    let app = common::build_test_app(pool).await;

    let parts = [("image", "front.png", "image/png", PNG_BYTES)];
    let response = post_multipart_auth(app.clone(), "/api/upload/single", &parts, &admin).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["kind"], "image");
    assert_eq!(json["data"]["size"], PNG_BYTES.len());
    let url = json["data"]["url"].as_str().unwrap().to_string();
    assert!(url.starts_with("/uploads/"));
    assert!(url.ends_with(".png"));

    let response = get(app, &url).await;
    assert_eq!(response.status(), StatusCode::OK);
    let served = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&served[..], PNG_BYTES);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_multiple_images(pool: PgPool) {
    let admin = common::admin_token(&pool).await;
    let app = common::build_test_app(pool).await;

    let parts = [
        ("images", "a.jpg", "image/jpeg", PNG_BYTES),
        ("images", "b.webp", "image/webp", PNG_BYTES),
    ];
    let response = post_multipart_auth(app, "/api/upload/multiple", &parts, &admin).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["count"], 2);
    assert_eq!(json["message"], "2 images uploaded successfully");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_media_accepts_video(pool: PgPool) {
    let admin = common::admin_token(&pool).await;
    let app = common::build_test_app(pool).await;

    let parts = [
        ("media", "walkthrough.mp4", "video/mp4", b"fake-video".as_slice()),
        ("media", "front.png", "image/png", PNG_BYTES),
    ];
    let response = post_multipart_auth(app, "/api/upload/media", &parts, &admin).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"][0]["kind"], "video");
    assert_eq!(json["data"][1]["kind"], "image");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_rejected_file_fails_whole_request(pool: PgPool) {
    let admin = common::admin_token(&pool).await;
    let app = common::build_test_app(pool).await;

    let parts = [
        ("images", "a.png", "image/png", PNG_BYTES),
        ("images", "notes.pdf", "application/pdf", b"%PDF-1.4".as_slice()),
    ];
    let response = post_multipart_auth(app.clone(), "/api/upload/multiple", &parts, &admin).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "UPLOAD_REJECTED");

    // A video is not an image.
    let parts = [("image", "clip.mp4", "video/mp4", b"fake-video".as_slice())];
    let response = post_multipart_auth(app, "/api/upload/single", &parts, &admin).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_file_is_bad_request(pool: PgPool) {
    let admin = common::admin_token(&pool).await;
    let app = common::build_test_app(pool).await;

    let parts = [("wrong_field", "a.png", "image/png", PNG_BYTES)];
    let response = post_multipart_auth(app, "/api/upload/single", &parts, &admin).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "UPLOAD_REJECTED");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_too_many_files_for_single(pool: PgPool) {
    let admin = common::admin_token(&pool).await;
    let app = common::build_test_app(pool).await;

    let parts = [
        ("image", "a.png", "image/png", PNG_BYTES),
        ("image", "b.png", "image/png", PNG_BYTES),
    ];
    let response = post_multipart_auth(app, "/api/upload/single", &parts, &admin).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_upload_requires_admin(pool: PgPool) {
    let (_user, token) = common::create_user(&pool, "buyer@test.com", UserRole::User).await;
    let app = common::build_test_app(pool).await;

    let parts = [("image", "a.png", "image/png", PNG_BYTES)];
    let response = post_multipart_auth(app, "/api/upload/single", &parts, &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
