use std::sync::Arc;

use jsonwebtoken::Algorithm;
use reqwest::{Client, Response};
use tokio::net::TcpListener;
use tokio::spawn;
use tokio::sync::RwLock;
use uuid::Uuid;

use account_service::app_router;
use account_service::app_state::{AppState, UserStoreType};
use account_service::domain::{LoginRequestBody, RefreshTokenRequestBody, RegisterRequestBody};
use account_service::services::{HashmapUserStore, TokenService};
use account_service::utils::Config;

pub struct TestApp {
    pub address: String,
    pub http_client: Client,
    // Exposed so tests can mint/inspect tokens with the server's own config.
    pub token_service: Arc<TokenService>,
    pub config: Arc<Config>,
}

impl TestApp {
    pub async fn new() -> Self {
        let config = Arc::new(Config::new(
            "api-test-secret".to_string(),
            Algorithm::HS256,
            30,
            7,
        ));
        let token_service = Arc::new(TokenService::new(config.clone()));
        let user_store: UserStoreType = Arc::new(RwLock::new(HashmapUserStore::new()));
        let app_state = AppState::new(user_store, token_service.clone(), config.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed binding to an ephemeral port");

        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let server = axum::serve(listener, app_router(app_state));

        spawn(async move {
            if let Err(e) = server.await {
                eprintln!("Test server error: {}", e);
            }
        });

        TestApp {
            address,
            http_client: Client::new(),
            token_service,
            config,
        }
    }

    pub async fn register(&self, username: String, password: String, role: String) -> Response {
        let body = RegisterRequestBody {
            username,
            password,
            role,
        };

        self.http_client
            .post(format!("{}/api/account/user/register", &self.address))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute register request.")
    }

    pub async fn login(&self, username: String, password: String) -> Response {
        let body = LoginRequestBody { username, password };

        self.http_client
            .post(format!("{}/api/account/user/login", &self.address))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute login request.")
    }

    pub async fn refresh(&self, refresh_token: String) -> Response {
        let body = RefreshTokenRequestBody { refresh_token };

        self.http_client
            .post(format!("{}/api/account/user/refresh_token", &self.address))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute refresh request.")
    }

    pub async fn get_me(&self, bearer: Option<&str>) -> Response {
        let mut request = self
            .http_client
            .get(format!("{}/api/account/user/me", &self.address));

        if let Some(token) = bearer {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        request.send().await.expect("Failed to execute me request.")
    }

    pub async fn get_user_list(&self, token: &str) -> Response {
        self.http_client
            .get(format!("{}/api/account/user/list", &self.address))
            .header("Authorization", format!("Bearer {}", token))
            .send()
            .await
            .expect("Failed to execute user list request.")
    }

    pub async fn get_health(&self) -> Response {
        self.http_client
            .get(format!("{}/health", &self.address))
            .send()
            .await
            .expect("Failed to execute health request.")
    }

    /// Register + login in one go, returning the access and refresh tokens.
    pub async fn signed_in_user(&self, role: &str) -> (String, String, String) {
        let username = random_username();
        let password = "s3cret-pass!".to_string();

        let created = self
            .register(username.clone(), password.clone(), role.to_string())
            .await;
        assert_eq!(created.status().as_u16(), 201);

        let response = self.login(username.clone(), password).await;
        assert_eq!(response.status().as_u16(), 200);
        let body: serde_json::Value = response.json().await.expect("token pair body");

        let access = body["access_token"].as_str().expect("access token").to_string();
        let refresh = body["refresh_token"].as_str().expect("refresh token").to_string();
        (username, access, refresh)
    }
}

pub fn random_username() -> String {
    format!("user-{}", Uuid::new_v4())
}
