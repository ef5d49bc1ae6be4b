use std::sync::Arc;
use tokio::sync::RwLock;

use account_service::app_state::{AppState, UserStoreType};
use account_service::services::{HashmapUserStore, TokenService};
use account_service::utils::Config;
use account_service::Application;

#[tokio::main]
async fn main() {
    env_logger::init();

    let config = Arc::new(Config::from_env().expect("Failed to load config"));
    let token_service = Arc::new(TokenService::new(config.clone()));
    let user_store: UserStoreType = Arc::new(RwLock::new(HashmapUserStore::new()));

    let app_state = AppState::new(user_store, token_service, config.clone());

    let app = Application::build(app_state, &config.bind_address())
        .await
        .expect("Failed to build app");

    app.run().await.expect("Failed to run app");
}
