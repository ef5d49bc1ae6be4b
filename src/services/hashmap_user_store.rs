use std::collections::HashMap;

use crate::domain::{User, UserStore, UserStoreError};

#[derive(Default)]
pub struct HashmapUserStore {
    users: HashMap<String, User>,
}

impl HashmapUserStore {
    pub fn new() -> Self {
        HashmapUserStore {
            users: HashMap::new(),
        }
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }
}

#[async_trait::async_trait]
impl UserStore for HashmapUserStore {
    async fn add_user(&mut self, user: User) -> Result<(), UserStoreError> {
        if self.users.contains_key(&user.username) {
            return Err(UserStoreError::UserAlreadyExists);
        }
        self.users.insert(user.username.clone(), user);
        Ok(())
    }

    async fn get_user(&self, username: &str) -> Result<User, UserStoreError> {
        self.users
            .get(username)
            .cloned()
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn validate_user(&self, username: &str, password: &str) -> Result<User, UserStoreError> {
        let user = self
            .users
            .get(username)
            .ok_or(UserStoreError::UserNotFound)?;
        if user.password != password {
            return Err(UserStoreError::InvalidCredentials);
        }
        Ok(user.clone())
    }

    async fn list_users(&self) -> Vec<User> {
        self.users.values().cloned().collect()
    }
}
