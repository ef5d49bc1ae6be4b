use serde_json::Value;

use crate::helpers::{random_username, TestApp};

#[tokio::test]
async fn login_returns_a_bearer_token_pair() {
    let app = TestApp::new().await;
    let username = random_username();

    let created = app
        .register(username.clone(), "s3cret-pass!".into(), "level_1".into())
        .await;
    assert_eq!(created.status().as_u16(), 201);

    let response = app.login(username.clone(), "s3cret-pass!".into()).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.expect("token pair body");
    assert!(!body["access_token"].as_str().unwrap().is_empty());
    assert!(!body["refresh_token"].as_str().unwrap().is_empty());
    assert_eq!(body["token_type"], "Bearer");
    assert_eq!(body["expires_in"], 30 * 60);
}

#[tokio::test]
async fn login_with_wrong_password_is_unauthorized() {
    let app = TestApp::new().await;
    let username = random_username();

    let created = app
        .register(username.clone(), "s3cret-pass!".into(), "level_1".into())
        .await;
    assert_eq!(created.status().as_u16(), 201);

    let response = app.login(username, "wrong-pass!!".into()).await;
    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn login_with_unknown_user_is_unauthorized() {
    let app = TestApp::new().await;

    let response = app.login(random_username(), "s3cret-pass!".into()).await;
    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn register_rejects_duplicates_and_short_passwords() {
    let app = TestApp::new().await;
    let username = random_username();

    let created = app
        .register(username.clone(), "s3cret-pass!".into(), "level_1".into())
        .await;
    assert_eq!(created.status().as_u16(), 201);

    let duplicate = app
        .register(username.clone(), "s3cret-pass!".into(), "level_1".into())
        .await;
    assert_eq!(duplicate.status().as_u16(), 409);

    let short = app
        .register(random_username(), "short".into(), "level_1".into())
        .await;
    assert_eq!(short.status().as_u16(), 400);
}
