//! Full request flows against PostgreSQL.
//!
//! Run with `TEST_DATABASE_URL=postgres://... cargo test -- --ignored`.

use axum::http::{Method, StatusCode};
use serde_json::json;

use crate::common::{TestApp, TestResponse};

async fn register(app: &TestApp, username: &str, password: &str) -> TestResponse {
    app.request(
        Method::POST,
        "/register",
        Some(json!({ "username": username, "password": password })),
        None,
    )
    .await
}

async fn login(app: &TestApp, username: &str, password: &str) -> TestResponse {
    app.request(
        Method::POST,
        "/login",
        Some(json!({ "username": username, "password": password })),
        None,
    )
    .await
}

/// Registers and logs in, returning `(user_id, access_token)`.
async fn sign_up(app: &TestApp, username: &str) -> (i64, String) {
    let res = register(app, username, "s3cret").await;
    assert_eq!(res.status, StatusCode::CREATED);
    let res = login(app, username, "s3cret").await;
    assert_eq!(res.status, StatusCode::OK);
    let user_id = res.body["user_id"].as_i64().unwrap();
    let token = res.body["access_token"].as_str().unwrap().to_string();
    (user_id, token)
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_register_login_and_profile() {
    let app = TestApp::with_database().await;

    let res = register(&app, "alice", "s3cret").await;
    assert_eq!(res.status, StatusCode::CREATED);
    assert_eq!(res.body["message"], "User registered successfully");
    let user_id = res.body["user_id"].as_i64().unwrap();

    let res = login(&app, "alice", "s3cret").await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["user_id"], user_id);
    let cookie = res.cookie("access_token").unwrap();
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("Max-Age=900"));
    assert!(res.cookie("refresh_token").is_some());

    let cookie_pair = cookie.split(';').next().unwrap().to_string();
    let res = app
        .request(Method::GET, "/profile", None, Some(&cookie_pair))
        .await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["user_id"], user_id);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_bad_credentials_are_indistinguishable() {
    let app = TestApp::with_database().await;
    register(&app, "alice", "s3cret").await;

    let wrong_password = login(&app, "alice", "nope").await;
    let unknown_user = login(&app, "mallory", "s3cret").await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.body, unknown_user.body);
    assert_eq!(wrong_password.body["error"], "Invalid credentials");
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_duplicate_username_conflicts() {
    let app = TestApp::with_database().await;

    assert_eq!(register(&app, "alice", "a").await.status, StatusCode::CREATED);
    assert_eq!(register(&app, "alice", "b").await.status, StatusCode::CONFLICT);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_refresh_issues_new_access_cookie() {
    let app = TestApp::with_database().await;
    register(&app, "alice", "s3cret").await;
    let res = login(&app, "alice", "s3cret").await;
    let refresh = res.body["refresh_token"].as_str().unwrap().to_string();

    let res = app
        .request(
            Method::POST,
            "/refresh",
            None,
            Some(&format!("refresh_token={refresh}")),
        )
        .await;

    assert_eq!(res.status, StatusCode::OK);
    assert!(res.cookie("access_token").is_some());
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_post_lifecycle_and_ownership() {
    let app = TestApp::with_database().await;
    let (alice_id, alice) = sign_up(&app, "alice").await;
    let (_, bob) = sign_up(&app, "bob").await;

    let res = app
        .authed(
            Method::POST,
            "/create-post",
            Some(json!({ "content": "hello" })),
            &alice,
        )
        .await;
    assert_eq!(res.status, StatusCode::CREATED);
    assert_eq!(res.body["user_id"], alice_id);
    let post_id = res.body["id"].as_i64().unwrap();

    let edit = json!({ "content": "hijacked" });
    let res = app
        .authed(
            Method::PUT,
            &format!("/edit-post/{post_id}"),
            Some(edit.clone()),
            &bob,
        )
        .await;
    assert_eq!(res.status, StatusCode::FORBIDDEN);

    let res = app
        .authed(Method::DELETE, &format!("/posts/{post_id}"), None, &bob)
        .await;
    assert_eq!(res.status, StatusCode::FORBIDDEN);

    let res = app
        .authed(
            Method::PUT,
            &format!("/edit-post/{post_id}"),
            Some(json!({ "content": "edited" })),
            &alice,
        )
        .await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["content"], "edited");

    let res = app.authed(Method::GET, "/posts", None, &bob).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["total_items"], 1);

    let res = app
        .authed(Method::DELETE, &format!("/posts/{post_id}"), None, &alice)
        .await;
    assert_eq!(res.status, StatusCode::OK);

    let res = app
        .authed(Method::GET, &format!("/posts/{post_id}"), None, &alice)
        .await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_follow_rules() {
    let app = TestApp::with_database().await;
    let (alice_id, alice) = sign_up(&app, "alice").await;
    let (bob_id, bob) = sign_up(&app, "bob").await;

    let res = app
        .authed(
            Method::POST,
            "/follow",
            Some(json!({ "followingId": alice_id })),
            &alice,
        )
        .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);

    let follow = json!({ "followingId": alice_id });
    let res = app
        .authed(Method::POST, "/follow", Some(follow.clone()), &bob)
        .await;
    assert_eq!(res.status, StatusCode::CREATED);

    let res = app
        .authed(Method::POST, "/follow", Some(follow), &bob)
        .await;
    assert_eq!(res.status, StatusCode::CONFLICT);

    let res = app
        .authed(Method::GET, &format!("/followers/{alice_id}"), None, &alice)
        .await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body.as_array().map(Vec::len), Some(1));

    let res = app.authed(Method::GET, "/notifications", None, &alice).await;
    assert_eq!(res.status, StatusCode::OK);

    let res = app
        .authed(Method::DELETE, &format!("/unfollow/{alice_id}"), None, &bob)
        .await;
    assert_eq!(res.status, StatusCode::OK);

    let res = app
        .authed(Method::DELETE, &format!("/unfollow/{bob_id}"), None, &alice)
        .await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
}

async fn create_post(app: &TestApp, access: &str, content: &str) -> i64 {
    let res = app
        .authed(
            Method::POST,
            "/create-post",
            Some(json!({ "content": content })),
            access,
        )
        .await;
    assert_eq!(res.status, StatusCode::CREATED);
    res.body["id"].as_i64().unwrap()
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_engagement_lifecycle_and_ownership() {
    let app = TestApp::with_database().await;
    let (_, alice) = sign_up(&app, "alice").await;
    let (bob_id, bob) = sign_up(&app, "bob").await;
    let post_id = create_post(&app, &alice, "hello").await;

    let res = app
        .authed(
            Method::POST,
            "/engagements",
            Some(json!({ "postId": 9999, "like": true })),
            &bob,
        )
        .await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);

    let res = app
        .authed(
            Method::POST,
            "/engagements",
            Some(json!({ "postId": post_id, "like": true, "comment": "nice" })),
            &bob,
        )
        .await;
    assert_eq!(res.status, StatusCode::CREATED);
    assert_eq!(res.body["user_id"], bob_id);
    assert_eq!(res.body["liked"], true);
    let engagement_id = res.body["id"].as_i64().unwrap();

    let res = app
        .authed(Method::GET, &format!("/engagements/{post_id}"), None, &alice)
        .await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body.as_array().map(Vec::len), Some(1));

    let res = app.authed(Method::GET, "/notifications", None, &alice).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["items"][0]["message"], "bob liked and commented on your post");
    assert_eq!(res.body["items"][0]["actor_id"], bob_id);

    let path = format!("/engagements/{engagement_id}");
    let res = app
        .authed(Method::PUT, &path, Some(json!({ "like": false })), &alice)
        .await;
    assert_eq!(res.status, StatusCode::FORBIDDEN);

    let res = app.authed(Method::DELETE, &path, None, &alice).await;
    assert_eq!(res.status, StatusCode::FORBIDDEN);

    let res = app
        .authed(Method::PUT, &path, Some(json!({ "like": false })), &bob)
        .await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["liked"], false);

    let res = app.authed(Method::DELETE, &path, None, &bob).await;
    assert_eq!(res.status, StatusCode::OK);

    let res = app
        .authed(Method::GET, "/engagements/9999", None, &bob)
        .await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_only_recipient_marks_notification_read() {
    let app = TestApp::with_database().await;
    let (alice_id, alice) = sign_up(&app, "alice").await;
    let (bob_id, bob) = sign_up(&app, "bob").await;

    let res = app
        .authed(
            Method::POST,
            "/notifications",
            Some(json!({ "userId": bob_id, "message": "hi bob" })),
            &alice,
        )
        .await;
    assert_eq!(res.status, StatusCode::CREATED);
    assert_eq!(res.body["actor_id"], alice_id);
    assert_eq!(res.body["is_read"], false);
    let path = format!("/notifications/{}/read", res.body["id"].as_i64().unwrap());

    let res = app.authed(Method::PATCH, &path, None, &alice).await;
    assert_eq!(res.status, StatusCode::FORBIDDEN);

    let res = app.authed(Method::PATCH, &path, None, &bob).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["is_read"], true);
    assert!(res.body["read_at"].is_string());
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_role_ownership() {
    let app = TestApp::with_database().await;
    let (alice_id, alice) = sign_up(&app, "alice").await;
    let (_, bob) = sign_up(&app, "bob").await;

    let res = app
        .authed(Method::POST, "/roles", Some(json!({ "type": "admin" })), &alice)
        .await;
    assert_eq!(res.status, StatusCode::CREATED);
    assert_eq!(res.body["user_id"], alice_id);
    let path = format!("/roles/{}", res.body["id"].as_i64().unwrap());

    let res = app
        .authed(Method::PUT, &path, Some(json!({ "type": "owner" })), &bob)
        .await;
    assert_eq!(res.status, StatusCode::FORBIDDEN);

    let res = app.authed(Method::DELETE, &path, None, &bob).await;
    assert_eq!(res.status, StatusCode::FORBIDDEN);

    let res = app
        .authed(Method::PUT, &path, Some(json!({ "type": "editor" })), &alice)
        .await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["role_type"], "editor");

    let res = app.authed(Method::DELETE, &path, None, &alice).await;
    assert_eq!(res.status, StatusCode::OK);

    let res = app.authed(Method::GET, &path, None, &alice).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_company_ownership_and_membership() {
    let app = TestApp::with_database().await;
    let (alice_id, alice) = sign_up(&app, "alice").await;
    let (bob_id, bob) = sign_up(&app, "bob").await;

    let res = app
        .authed(
            Method::POST,
            "/companies",
            Some(json!({ "name": "Acme", "description": "Anvils" })),
            &alice,
        )
        .await;
    assert_eq!(res.status, StatusCode::CREATED);
    assert_eq!(res.body["owner_id"], alice_id);
    let company_id = res.body["id"].as_i64().unwrap();
    let path = format!("/companies/{company_id}");

    let res = app
        .authed(Method::PUT, &path, Some(json!({ "name": "Mine now" })), &bob)
        .await;
    assert_eq!(res.status, StatusCode::FORBIDDEN);

    let res = app.authed(Method::DELETE, &path, None, &bob).await;
    assert_eq!(res.status, StatusCode::FORBIDDEN);

    let res = app
        .authed(Method::POST, &format!("{path}/join"), None, &bob)
        .await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["name"], "Acme");
    let teams = res.body["teams"].as_array().unwrap();
    assert_eq!(teams.len(), 1);
    assert_eq!(teams[0]["id"], bob_id);
    assert_eq!(teams[0]["company_id"], company_id);
    assert!(teams[0].get("password_hash").is_none());

    let res = app.authed(Method::POST, "/companies/leave", None, &bob).await;
    assert_eq!(res.status, StatusCode::OK);

    let res = app.authed(Method::POST, "/companies/leave", None, &bob).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);

    let res = app.authed(Method::GET, &path, None, &alice).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["teams"].as_array().map(Vec::len), Some(0));

    let res = app
        .authed(Method::POST, "/companies/9999/join", None, &bob)
        .await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_post_analytics_counts() {
    let app = TestApp::with_database().await;
    let (alice_id, alice) = sign_up(&app, "alice").await;
    let (_, bob) = sign_up(&app, "bob").await;
    let (_, carol) = sign_up(&app, "carol").await;
    let post_id = create_post(&app, &alice, "measure me").await;

    for (token, body) in [
        (&bob, json!({ "postId": post_id, "like": true, "comment": "great" })),
        (&carol, json!({ "postId": post_id, "comment": "meh" })),
    ] {
        let res = app
            .authed(Method::POST, "/engagements", Some(body), token)
            .await;
        assert_eq!(res.status, StatusCode::CREATED);
    }

    for token in [&bob, &bob, &carol] {
        let res = app
            .authed(
                Method::POST,
                "/track-post-view",
                Some(json!({ "postId": post_id })),
                token,
            )
            .await;
        assert_eq!(res.status, StatusCode::CREATED);
        assert_eq!(res.body["post_id"], post_id);
    }

    let res = app
        .authed(
            Method::POST,
            "/track-post-view",
            Some(json!({ "postId": 9999 })),
            &bob,
        )
        .await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);

    let res = app
        .authed(Method::GET, &format!("/post-analytics/{post_id}"), None, &alice)
        .await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["likes"], 1);
    assert_eq!(res.body["comments"], 2);
    assert_eq!(res.body["views"], 3);
    assert_eq!(res.body["user_id"], alice_id);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_search_treats_wildcards_literally() {
    let app = TestApp::with_database().await;
    let (_, alice) = sign_up(&app, "alice").await;
    sign_up(&app, "a_b").await;
    sign_up(&app, "axb").await;
    create_post(&app, &alice, "everything 50% off").await;
    create_post(&app, &alice, "500 offers").await;

    let res = app
        .authed(
            Method::POST,
            "/search/posts",
            Some(json!({ "keyword": "0%" })),
            &alice,
        )
        .await;
    assert_eq!(res.status, StatusCode::OK);
    let posts = res.body.as_array().unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0]["content"], "everything 50% off");

    let res = app
        .authed(
            Method::POST,
            "/search/posts",
            Some(json!({ "keyword": "off" })),
            &alice,
        )
        .await;
    assert_eq!(res.body.as_array().map(Vec::len), Some(2));

    let res = app
        .authed(
            Method::POST,
            "/search/users",
            Some(json!({ "keyword": "a_" })),
            &alice,
        )
        .await;
    assert_eq!(res.status, StatusCode::OK);
    let users = res.body.as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["username"], "a_b");

    let res = app
        .authed(
            Method::POST,
            "/search/users",
            Some(json!({ "keyword": "" })),
            &alice,
        )
        .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
}
