use serde::{Deserialize, Serialize};

/// Issued access + refresh token pair, returned verbatim as the login and
/// refresh response body. `expires_in` is the access token lifetime in
/// seconds so clients can schedule their refresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

impl TokenPair {
    pub fn new(access_token: String, refresh_token: String, expires_in: i64) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in,
        }
    }
}
