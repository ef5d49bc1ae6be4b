use axum::middleware::{from_fn, from_fn_with_state};
use axum::routing::{get, post};
use axum::Router;
use axum_server::bind;
use log::info;
use std::{error::Error, future::Future, pin::Pin};

use app_state::AppState;
use middleware::{authenticate, require_role};

pub mod app_state;
pub mod domain;
pub mod errors;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod utils;

type ServerFuture = Pin<Box<dyn Future<Output = Result<(), std::io::Error>> + Send>>;

pub fn app_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/account/user/register", post(routes::register))
        .route("/api/account/user/login", post(routes::login))
        .route("/api/account/user/refresh_token", post(routes::refresh_token))
        .route("/api/account/user/me", get(routes::me))
        .route(
            "/api/account/user/list",
            get(routes::user_list).route_layer(from_fn(require_role(&["admin"]))),
        )
        .route("/health", get(routes::health))
        // Runs before routing: every request passes the authentication gate.
        .layer(from_fn_with_state(app_state.clone(), authenticate))
        .with_state(app_state)
}

// This struct encapsulates our application-related logic.
pub struct Application {
    http_future: ServerFuture,
    // address is exposed as a public field,
    // so we have access to it in tests.
    pub address: String,
}

impl Application {
    pub async fn build(app_state: AppState, address: &str) -> Result<Self, Box<dyn Error>> {
        let router = app_router(app_state);

        let http_future = bind(address.parse()?).serve(router.into_make_service());

        Ok(Self {
            http_future: Box::pin(http_future),
            address: format!("http://{}", address),
        })
    }

    pub async fn run(self) -> Result<(), std::io::Error> {
        info!("listening on {}", &self.address);
        self.http_future.await
    }
}
