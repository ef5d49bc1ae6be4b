use axum::extract::{Request, State};
use axum::http::{header, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::{debug, error};
use serde_json::json;
use thiserror::Error;

use crate::app_state::AppState;
use crate::domain::{RequestIdentity, TokenType};
use crate::services::TokenError;

/// Paths exempt from authentication, matched by prefix. Prefix matching is
/// deliberate: it also covers sub-routes such as the login/register
/// verification-code endpoints.
const ALLOW_LIST: &[&str] = &[
    "/api/account/user/login",
    "/api/account/user/register",
    "/api/account/user/refresh_token",
    "/docs",
    "/openapi.json",
    "/health",
];

const BEARER_PREFIX: &str = "Bearer ";

#[derive(Error, Debug)]
pub enum AuthGateError {
    #[error("缺少认证 Token")]
    MissingToken,
    #[error("Token 已过期")]
    ExpiredToken,
    #[error("Token 无效")]
    InvalidToken,
}

impl IntoResponse for AuthGateError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "code": 401,
            "message": self.to_string(),
        }));
        (StatusCode::UNAUTHORIZED, body).into_response()
    }
}

fn is_allow_listed(path: &str) -> bool {
    ALLOW_LIST.iter().any(|prefix| path.starts_with(prefix))
}

/// Authentication gate, layered over the whole router.
///
/// Allow-listed paths pass through untouched. Everything else needs a valid
/// `Authorization: Bearer <access token>` header; on success the verified
/// identity is attached to the request extensions for downstream handlers
/// and guards.
pub async fn authenticate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path();
    if is_allow_listed(path) {
        return next.run(request).await;
    }

    let bearer = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let token = match bearer.and_then(|header| header.strip_prefix(BEARER_PREFIX)) {
        Some(token) => token.to_owned(),
        None => {
            debug!("rejected {}: no bearer token", path);
            return AuthGateError::MissingToken.into_response();
        }
    };

    match state.token_service.verify(&token, TokenType::Access) {
        Ok(payload) => {
            request
                .extensions_mut()
                .insert(RequestIdentity::new(payload.sub, payload.extra));
            next.run(request).await
        }
        Err(TokenError::Expired) => {
            debug!("rejected {}: token expired", path);
            AuthGateError::ExpiredToken.into_response()
        }
        Err(TokenError::Invalid) => {
            debug!("rejected {}: invalid token", path);
            AuthGateError::InvalidToken.into_response()
        }
        // Not an authentication outcome; never disguise it as a 401.
        Err(err) => {
            error!("token verification failed unexpectedly: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
