use axum::{http::StatusCode, response::IntoResponse, Json};
use log::error;
use serde_json::json;
use thiserror::Error;

use crate::services::TokenError;

#[derive(Error, Debug)]
pub enum RefreshTokenError {
    #[error("Token 已过期")]
    ExpiredToken,

    #[error("Token 无效")]
    InvalidToken,

    #[error("token issuance failed")]
    InternalServerError,
}

impl From<TokenError> for RefreshTokenError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Expired => RefreshTokenError::ExpiredToken,
            TokenError::Invalid => RefreshTokenError::InvalidToken,
            TokenError::Encoding(e) => {
                error!("failed to sign refreshed token pair: {}", e);
                RefreshTokenError::InternalServerError
            }
        }
    }
}

impl IntoResponse for RefreshTokenError {
    fn into_response(self) -> axum::response::Response {
        match self {
            RefreshTokenError::ExpiredToken | RefreshTokenError::InvalidToken => {
                let body = Json(json!({ "code": 401, "message": self.to_string() }));
                (StatusCode::UNAUTHORIZED, body).into_response()
            }
            RefreshTokenError::InternalServerError => {
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
