use axum::response::IntoResponse;
use axum::{Extension, Json};

use crate::domain::{MeResponse, RequestIdentity};

/// Echo the identity the authentication gate attached to this request.
pub async fn me(Extension(identity): Extension<RequestIdentity>) -> impl IntoResponse {
    Json(MeResponse {
        user_id: identity.subject,
        extra: identity.extra,
    })
}
