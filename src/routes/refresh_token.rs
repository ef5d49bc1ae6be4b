use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::app_state::AppState;
use crate::domain::RefreshTokenRequestBody;
use crate::errors::RefreshTokenError;

pub async fn refresh_token(
    State(state): State<AppState>,
    Json(request): Json<RefreshTokenRequestBody>,
) -> Result<impl IntoResponse, RefreshTokenError> {
    let pair = state.token_service.refresh(&request.refresh_token)?;
    Ok(Json(pair))
}
