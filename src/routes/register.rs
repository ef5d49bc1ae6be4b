use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::app_state::AppState;
use crate::domain::{RegisterRequestBody, RegisterResponse, User};
use crate::errors::RegisterError;
use crate::services::AuthService;

const MIN_PASSWORD_LEN: usize = 8;

pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequestBody>,
) -> Result<impl IntoResponse, RegisterError> {
    if request.username.trim().is_empty() {
        return Err(RegisterError::InvalidUsername);
    }
    if request.password.len() < MIN_PASSWORD_LEN {
        return Err(RegisterError::PasswordTooShort(MIN_PASSWORD_LEN));
    }

    let user = User::new(request.username, request.password, request.role);
    AuthService::register(state, user).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User created successfully".to_string(),
        }),
    ))
}
