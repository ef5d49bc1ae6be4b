use crate::app_state::AppState;
use crate::domain::{User, UserStoreError};
use crate::errors::{LoginError, RegisterError};

pub struct AuthService {}

impl AuthService {
    pub async fn register(state: AppState, user: User) -> Result<(), RegisterError> {
        let username = user.username.clone();
        let result = state.user_store.write().await.add_user(user).await;
        result.map_err(|e| match e {
            UserStoreError::UserAlreadyExists => RegisterError::UserAlreadyExists(username),
            _ => RegisterError::InternalServerError,
        })
    }

    pub async fn login(
        state: AppState,
        username: &str,
        password: &str,
    ) -> Result<User, LoginError> {
        match state
            .user_store
            .read()
            .await
            .validate_user(username, password)
            .await
        {
            Ok(user) => Ok(user),
            Err(UserStoreError::UserNotFound) | Err(UserStoreError::InvalidCredentials) => {
                Err(LoginError::InvalidCredentials)
            }
            Err(_) => Err(LoginError::InternalServerError),
        }
    }
}
