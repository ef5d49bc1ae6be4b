use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::app_state::AppState;
use crate::domain::UserResponse;

pub async fn user_list(State(state): State<AppState>) -> impl IntoResponse {
    let users = state.user_store.read().await.list_users().await;
    let body: Vec<UserResponse> = users.iter().map(UserResponse::from).collect();
    Json(body)
}
