use chrono::Utc;
use serde_json::Value;

use account_service::domain::{TokenPayload, TokenType};
use account_service::services::token_codec::encode_payload;

use crate::helpers::TestApp;

#[tokio::test]
async fn refresh_returns_a_working_new_pair() {
    let app = TestApp::new().await;
    let (username, _, refresh) = app.signed_in_user("level_1").await;

    let response = app.refresh(refresh).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.expect("token pair body");
    assert_eq!(body["token_type"], "Bearer");
    let new_access = body["access_token"].as_str().expect("access token");

    // The new access token carries the same identity.
    let claims = app
        .token_service
        .verify(new_access, TokenType::Access)
        .expect("refreshed access token verifies");
    assert_eq!(claims.sub, username);
    assert_eq!(claims.extra["role"], "level_1");

    let me = app.get_me(Some(new_access)).await;
    assert_eq!(me.status().as_u16(), 200);
}

#[tokio::test]
async fn refresh_rejects_an_access_token() {
    let app = TestApp::new().await;
    let (_, access, _) = app.signed_in_user("level_1").await;

    let response = app.refresh(access).await;
    assert_eq!(response.status().as_u16(), 401);

    let body: Value = response.json().await.expect("error body");
    assert_eq!(body["code"], 401);
    assert_eq!(body["message"], "Token 无效");
}

#[tokio::test]
async fn refresh_rejects_garbage() {
    let app = TestApp::new().await;

    let response = app.refresh("not-a-token".to_string()).await;
    assert_eq!(response.status().as_u16(), 401);

    let body: Value = response.json().await.expect("error body");
    assert_eq!(body["message"], "Token 无效");
}

#[tokio::test]
async fn refresh_rejects_an_expired_refresh_token() {
    let app = TestApp::new().await;

    let past = Utc::now().timestamp() - 10_000;
    let expired = TokenPayload {
        sub: "42".to_string(),
        iat: past,
        exp: past + 60,
        token_type: TokenType::Refresh,
        extra: serde_json::Map::new(),
    };
    let token = encode_payload(&expired, &app.config).expect("encode");

    let response = app.refresh(token).await;
    assert_eq!(response.status().as_u16(), 401);

    let body: Value = response.json().await.expect("error body");
    assert_eq!(body["message"], "Token 已过期");
}
