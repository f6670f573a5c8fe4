use bytes::Bytes;
use http::header;
use http::HeaderValue;
use http_body_util::Full;
use hyper::{Response, StatusCode};
use tracing::{error, info};
use uuid::Uuid;

use crate::clients::groq::types::ChatRequest;
use crate::clients::groq::GroqClient;
use crate::models::{ChatPayload, ChatReply, ErrorBody};
use crate::prompt::build_conversation;

const NO_MESSAGE_ERROR: &str = "No message provided";
const INTERNAL_ERROR: &str = "Internal server error";

fn json_response(status: StatusCode, body: String) -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::new(Bytes::from(body)));
    *response.status_mut() = status;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    response
}

fn error_response(status: StatusCode, message: &str) -> Response<Full<Bytes>> {
    let body = ErrorBody {
        error: message.to_string(),
    };
    let json = serde_json::to_string(&body)
        .unwrap_or_else(|_| r#"{"error":"Internal server error"}"#.to_string());
    json_response(status, json)
}

pub fn internal_error() -> Response<Full<Bytes>> {
    error_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR)
}

/// Relays one chat message to the completion provider. Everything that goes
/// wrong after the empty-message check collapses into the same generic
/// server error; detail only reaches the logs.
pub async fn handle_chat(client: &GroqClient, whole_body: Bytes) -> Response<Full<Bytes>> {
    let trace_id = Uuid::new_v4();
    let json_string = String::from_utf8_lossy(&whole_body).to_string();

    let payload = match ChatPayload::from_json(&json_string) {
        Ok(p) => p,
        Err(e) => {
            error!("[{}] Invalid chat payload: {}", trace_id, e);
            return internal_error();
        }
    };

    let user_message = payload.message.unwrap_or_default();
    if user_message.is_empty() {
        info!("[{}] Rejected chat request with no message", trace_id);
        return error_response(StatusCode::BAD_REQUEST, NO_MESSAGE_ERROR);
    }

    info!("[{}] Relaying chat message to provider", trace_id);
    let chat_request = ChatRequest::new(build_conversation(&user_message));

    let response = match client.get_completion_message(&chat_request).await {
        Ok(r) => r,
        Err(e) => {
            error!("[{}] Provider call failed: {}", trace_id, e);
            return internal_error();
        }
    };

    let text = match response.first_choice_text() {
        Some(t) => t.to_string(),
        None => {
            error!("[{}] Provider response contained no choices", trace_id);
            return internal_error();
        }
    };

    match serde_json::to_string(&ChatReply { response: text }) {
        Ok(body) => json_response(StatusCode::OK, body),
        Err(e) => {
            error!("[{}] Failed to serialize chat reply: {}", trace_id, e);
            internal_error()
        }
    }
}
