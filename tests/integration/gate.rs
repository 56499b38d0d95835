//! Session gate behaviour. None of these requests reach the database.

use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use chrono::{Duration, Utc};
use serde_json::json;

use socialhub_auth::jwt::{Claims, JwtEncoder, TokenType};
use socialhub_core::types::id::UserId;

use crate::common::{TestApp, TestResponse};

fn assert_unauthorized(status: StatusCode, body: &serde_json::Value) {
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Unauthorized");
}

#[tokio::test]
async fn test_profile_without_cookie_is_rejected() {
    let app = TestApp::without_database().await;

    let res = app.request(Method::GET, "/profile", None, None).await;

    assert_unauthorized(res.status, &res.body);
}

#[tokio::test]
async fn test_garbage_token_is_rejected() {
    let app = TestApp::without_database().await;

    let res = app
        .authed(Method::GET, "/profile", None, "not.a.jwt")
        .await;

    assert_unauthorized(res.status, &res.body);
}

#[tokio::test]
async fn test_token_signed_with_other_secret_is_rejected() {
    let app = TestApp::without_database().await;
    let mut foreign = app.config.auth.clone();
    foreign.jwt_secret = "some-other-secret-that-is-long-enough!!".to_string();
    let pair = JwtEncoder::new(&foreign)
        .generate_token_pair(UserId::from(42))
        .unwrap();

    let res = app
        .authed(Method::GET, "/profile", None, &pair.access_token)
        .await;

    assert_unauthorized(res.status, &res.body);
}

#[tokio::test]
async fn test_expired_token_is_rejected() {
    let app = TestApp::without_database().await;
    let claims = Claims::new(
        UserId::from(42),
        TokenType::Access,
        Utc::now() - Duration::hours(1),
        60,
    );
    let token = JwtEncoder::new(&app.config.auth).sign(&claims).unwrap();

    let res = app.authed(Method::GET, "/profile", None, &token).await;

    assert_unauthorized(res.status, &res.body);
}

#[tokio::test]
async fn test_refresh_token_cannot_open_the_gate() {
    let app = TestApp::without_database().await;
    let (_, refresh) = app.tokens_for(42);

    let res = app.authed(Method::GET, "/profile", None, &refresh).await;

    assert_unauthorized(res.status, &res.body);
}

#[tokio::test]
async fn test_valid_token_reaches_handler_with_user_id() {
    let app = TestApp::without_database().await;
    let (access, _) = app.tokens_for(42);

    let res = app.authed(Method::GET, "/profile", None, &access).await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body, json!({ "user_id": 42 }));
}

#[tokio::test]
async fn test_gate_runs_before_path_parsing() {
    let app = TestApp::without_database().await;

    let res = app.request(Method::GET, "/posts/abc", None, None).await;
    assert_unauthorized(res.status, &res.body);

    let (access, _) = app.tokens_for(42);
    let res = app.authed(Method::GET, "/posts/abc", None, &access).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_every_protected_route_requires_a_session() {
    let app = TestApp::without_database().await;
    let routes = [
        (Method::POST, "/create-post"),
        (Method::PUT, "/edit-post/1"),
        (Method::GET, "/posts"),
        (Method::DELETE, "/posts/1"),
        (Method::POST, "/engagements"),
        (Method::GET, "/engagements/1"),
        (Method::GET, "/notifications"),
        (Method::POST, "/follow"),
        (Method::GET, "/followers/1"),
        (Method::POST, "/search/posts"),
        (Method::POST, "/track-post-view"),
        (Method::GET, "/post-analytics/1"),
        (Method::POST, "/companies"),
        (Method::POST, "/companies/leave"),
        (Method::GET, "/roles"),
        (Method::POST, "/upload"),
        (Method::GET, "/files"),
    ];

    for (method, path) in routes {
        let res = app.request(method.clone(), path, None, None).await;
        assert_eq!(
            res.status,
            StatusCode::UNAUTHORIZED,
            "{method} {path} was not gated"
        );
    }
}

#[tokio::test]
async fn test_logout_expires_both_cookies() {
    let app = TestApp::without_database().await;

    let res = app.request(Method::POST, "/logout", None, None).await;

    assert_eq!(res.status, StatusCode::OK);
    let access = res.cookie("access_token").expect("access cookie cleared");
    let refresh = res.cookie("refresh_token").expect("refresh cookie cleared");
    assert!(access.contains("Max-Age=0"));
    assert!(refresh.contains("Max-Age=0"));
    assert!(refresh.contains("Path=/refresh"));
}

#[tokio::test]
async fn test_refresh_without_token_is_rejected() {
    let app = TestApp::without_database().await;

    let res = app.request(Method::POST, "/refresh", None, None).await;

    assert_unauthorized(res.status, &res.body);
}

#[tokio::test]
async fn test_refresh_rejects_access_token() {
    let app = TestApp::without_database().await;
    let (access, _) = app.tokens_for(42);

    let res = app
        .request(
            Method::POST,
            "/refresh",
            Some(json!({ "refresh_token": access })),
            None,
        )
        .await;

    assert_unauthorized(res.status, &res.body);
}

#[tokio::test]
async fn test_register_validates_before_touching_storage() {
    let app = TestApp::without_database().await;

    let res = app
        .request(
            Method::POST,
            "/register",
            Some(json!({ "username": "", "password": "pw" })),
            None,
        )
        .await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_absurd_page_number_is_a_bad_request() {
    let app = TestApp::without_database().await;
    let (access, _) = app.tokens_for(42);

    for path in [
        "/posts?page=184467440737095516&per_page=100",
        "/notifications?page=18446744073709551615",
    ] {
        let res = app.authed(Method::GET, path, None, &access).await;
        assert_eq!(res.status, StatusCode::BAD_REQUEST, "{path}");
        assert_eq!(res.body["code"], "VALIDATION");
    }
}

const BOUNDARY: &str = "socialhub-test-boundary";

/// Posts `contents` as the `file` field of a multipart body.
async fn upload(app: &TestApp, access: &str, file_name: &str, contents: &[u8]) -> TestResponse {
    let mut body = format!(
        "--{BOUNDARY}\r\n\
         Content-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\n\
         Content-Type: application/octet-stream\r\n\r\n"
    )
    .into_bytes();
    body.extend_from_slice(contents);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    let request = Request::builder()
        .method(Method::POST)
        .uri("/upload")
        .header(header::COOKIE, format!("access_token={access}"))
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap();
    app.send(request).await
}

#[tokio::test]
async fn test_upload_stores_file_and_lists_it() {
    let app = TestApp::without_database().await;
    let (access, _) = app.tokens_for(42);

    let res = upload(&app, &access, "note.txt", b"hello upload").await;

    assert_eq!(res.status, StatusCode::CREATED);
    let file_name = res.body["file_name"].as_str().unwrap().to_string();
    assert!(file_name.ends_with("_note.txt"), "{file_name}");
    assert_eq!(res.body["size_bytes"], 12);
    assert_eq!(res.body["mime_type"], "text/plain");
    assert_eq!(res.body["url"], format!("/uploads/{file_name}"));

    let res = app.authed(Method::GET, "/files", None, &access).await;
    assert_eq!(res.status, StatusCode::OK);
    let listed = res.body.as_array().unwrap();
    assert!(listed.iter().any(|f| f["file_name"] == file_name.as_str()));
}

#[tokio::test]
async fn test_oversized_upload_is_rejected() {
    let app = TestApp::without_database().await;
    let (access, _) = app.tokens_for(42);
    let contents = vec![b'x'; 2048];

    let res = upload(&app, &access, "big.txt", &contents).await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body["code"], "VALIDATION");
}

#[tokio::test]
async fn test_upload_without_file_field_is_rejected() {
    let app = TestApp::without_database().await;
    let (access, _) = app.tokens_for(42);
    let body = format!(
        "--{BOUNDARY}\r\n\
         Content-Disposition: form-data; name=\"caption\"\r\n\r\n\
         hi\r\n--{BOUNDARY}--\r\n"
    );
    let request = Request::builder()
        .method(Method::POST)
        .uri("/upload")
        .header(header::COOKIE, format!("access_token={access}"))
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap();

    let res = app.send(request).await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_upload_requires_session() {
    let app = TestApp::without_database().await;

    let res = app.request(Method::POST, "/upload", None, None).await;

    assert_unauthorized(res.status, &res.body);
}
