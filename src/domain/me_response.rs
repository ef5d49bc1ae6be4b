use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Deserialize, Serialize, Debug)]
pub struct MeResponse {
    pub user_id: String,
    pub extra: Map<String, Value>,
}
