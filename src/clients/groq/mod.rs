use std::env;

use anyhow::Error;
use http::header;
use once_cell::sync::OnceCell;
use tracing::{debug, error, warn};

pub mod types;

use types::{ChatRequest, ChatResponse};

const GROQ_BASE_URL: &str = "GROQ_BASE_URL";
const GROQ_API_KEY: &str = "GROQ_API_KEY";

fn groq_base_url() -> String {
    env::var(GROQ_BASE_URL)
        .unwrap_or_else(|_| "https://api.groq.com/openai/v1/chat/completions".to_string())
}

/// Client for the Groq chat completions API. One instance lives for the
/// whole process; see [`provider`].
pub struct GroqClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

static CLIENT: OnceCell<GroqClient> = OnceCell::new();

/// The process-wide provider client, built from the environment on first use.
pub fn provider() -> &'static GroqClient {
    CLIENT.get_or_init(GroqClient::from_env)
}

impl GroqClient {
    pub fn new(base_url: String, api_key: String) -> Self {
        GroqClient {
            http: reqwest::Client::new(),
            base_url,
            api_key,
        }
    }

    /// A missing key is not fatal at startup; every provider call will fail
    /// and surface as a generic server error instead.
    pub fn from_env() -> Self {
        let api_key = env::var(GROQ_API_KEY).unwrap_or_default();
        if api_key.is_empty() {
            warn!("{} is not set, provider calls will fail", GROQ_API_KEY);
        }
        Self::new(groq_base_url(), api_key)
    }

    pub async fn get_completion_message(
        &self,
        chat_request: &ChatRequest,
    ) -> Result<ChatResponse, Error> {
        let body = match serde_json::to_string(chat_request) {
            Ok(b) => b,
            Err(e) => {
                error!("Failed to serialize chat request: {}", e);
                return Err(Error::msg(format!(
                    "Failed to serialize chat request: {}",
                    e
                )));
            }
        };

        debug!(
            "Sending request to LLM API: {} - {}\nbody:\n{}",
            chat_request.model, self.base_url, body,
        );

        let response = self
            .http
            .post(&self.base_url)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .header(header::AUTHORIZATION, format!("Bearer {}", self.api_key))
            .body(body)
            .send()
            .await;

        let response = match response {
            Ok(resp) => resp,
            Err(e) => {
                error!("Error sending request to LLM API: {}", e);
                return Err(Error::msg(format!(
                    "Failed to send request to LLM API: {}",
                    e
                )));
            }
        };

        let status = response.status();
        let response_text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                error!("Error reading response text: {}", e);
                return Err(Error::msg(format!("Failed to read response text: {}", e)));
            }
        };

        if !status.is_success() {
            error!(
                "LLM API returned error status {}: {}",
                status, response_text
            );
            return Err(Error::msg(format!(
                "LLM API error {}: {}",
                status, response_text
            )));
        }

        match ChatResponse::from_json(&response_text) {
            Ok(r) => Ok(r),
            Err(e) => {
                error!(
                    "Error parsing response JSON: {}\nRaw response: {}",
                    e, response_text
                );
                Err(Error::msg(format!(
                    "Failed to parse response JSON: {}\nRaw response: {}",
                    e, response_text
                )))
            }
        }
    }
}
