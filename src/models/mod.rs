use serde::{Deserialize, Serialize};

/// Inbound body of `POST /chat`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChatPayload {
    #[serde(default)]
    pub message: Option<String>,
}

impl ChatPayload {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
