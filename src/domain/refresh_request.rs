use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug)]
pub struct RefreshTokenRequestBody {
    pub refresh_token: String,
}
