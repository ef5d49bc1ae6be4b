use serde::{Deserialize, Serialize};

use crate::domain::User;

/// Public view of a stored user; never exposes the password.
#[derive(Deserialize, Serialize, Debug, PartialEq)]
pub struct UserResponse {
    pub username: String,
    pub role: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        UserResponse {
            username: user.username.clone(),
            role: user.role.clone(),
        }
    }
}
