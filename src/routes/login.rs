use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use log::{error, info};
use serde_json::{json, Map};

use crate::app_state::AppState;
use crate::domain::LoginRequestBody;
use crate::errors::LoginError;
use crate::services::AuthService;

pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequestBody>,
) -> Result<impl IntoResponse, LoginError> {
    let user = AuthService::login(state.clone(), &request.username, &request.password).await?;

    let mut extra = Map::new();
    extra.insert("role".to_string(), json!(user.role));
    extra.insert("username".to_string(), json!(user.username));

    let pair = state
        .token_service
        .issue_pair(&user.username, extra)
        .map_err(|e| {
            error!("failed to issue token pair for {}: {}", user.username, e);
            LoginError::InternalServerError
        })?;

    info!("user {} logged in", user.username);
    Ok(Json(pair))
}
