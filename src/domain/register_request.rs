use serde::{Deserialize, Serialize};

fn default_role() -> String {
    "level_1".to_string()
}

#[derive(Deserialize, Serialize, Debug)]
pub struct RegisterRequestBody {
    pub username: String,
    pub password: String,
    #[serde(default = "default_role")]
    pub role: String,
}
