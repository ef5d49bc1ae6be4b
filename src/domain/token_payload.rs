use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

/// Claims carried inside a signed token.
///
/// `extra` is an open map for business data (role, username, ...) that the
/// token layer itself never interprets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenPayload {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
    pub token_type: TokenType,
    #[serde(default)]
    pub extra: Map<String, Value>,
}
