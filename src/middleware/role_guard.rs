use std::future::Future;
use std::pin::Pin;

use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::domain::RequestIdentity;

type GuardFuture = Pin<Box<dyn Future<Output = Response> + Send>>;

/// Per-route role guard factory, for use with `middleware::from_fn` as a
/// `route_layer`:
///
/// ```ignore
/// .route_layer(middleware::from_fn(require_role(&["admin", "level_1"])))
/// ```
///
/// Reads the `role` claim from the identity the authentication gate attached
/// to the request; any one matching role passes. Does no token parsing of
/// its own, so it must sit on a route the gate protects.
pub fn require_role(
    roles: &'static [&'static str],
) -> impl Fn(Request, Next) -> GuardFuture + Clone {
    move |request: Request, next: Next| {
        Box::pin(async move {
            let role = request
                .extensions()
                .get::<RequestIdentity>()
                .and_then(|identity| identity.extra.get("role"))
                .and_then(|value| value.as_str());

            match role {
                Some(role) if roles.iter().any(|allowed| *allowed == role) => {
                    next.run(request).await
                }
                _ => forbidden(),
            }
        })
    }
}

fn forbidden() -> Response {
    (StatusCode::FORBIDDEN, Json(json!({ "detail": "权限不足" }))).into_response()
}
