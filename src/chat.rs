//! Client for the generative chat assistant. The wire types and the response
//! text extraction are plain data so they can be tested on the host; only
//! [`generate_response`] performs the actual fetch from the hydrated client.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed reply shown whenever the collaborator fails, whatever the reason.
pub const FALLBACK_REPLY: &str = "Sorry, I couldn't process your request.";

pub const GEMINI_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent";

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("chat assistant is not configured")]
    NotConfigured,
    #[error("chat request could not be sent: {0}")]
    Transport(String),
    #[error("chat service responded with status {0}")]
    Status(u16),
    #[error("chat response had no text candidates")]
    EmptyResponse,
}

#[derive(Debug, Serialize)]
pub struct GenerateRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Content,
}

pub fn request_body(prompt: &str) -> GenerateRequest {
    GenerateRequest {
        contents: vec![Content {
            parts: vec![Part {
                text: prompt.to_string(),
            }],
        }],
    }
}

/// First candidate's first text part, if the service returned any.
pub fn extract_text(response: GenerateResponse) -> Option<String> {
    response
        .candidates
        .into_iter()
        .next()?
        .content
        .parts
        .into_iter()
        .next()
        .map(|part| part.text)
}

#[cfg(feature = "hydrate")]
pub async fn generate_response(prompt: &str) -> Result<String, ChatError> {
    let config = crate::config::chat_config().map_err(|_| ChatError::NotConfigured)?;
    let url = format!("{GEMINI_ENDPOINT}?key={}", config.api_key);
    let response = gloo_net::http::Request::post(&url)
        .json(&request_body(prompt))
        .map_err(|err| ChatError::Transport(err.to_string()))?
        .send()
        .await
        .map_err(|err| ChatError::Transport(err.to_string()))?;
    if !response.ok() {
        return Err(ChatError::Status(response.status()));
    }
    let payload = response
        .json::<GenerateResponse>()
        .await
        .map_err(|err| ChatError::Transport(err.to_string()))?;
    extract_text(payload).ok_or(ChatError::EmptyResponse)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_matches_the_wire_shape() {
        let body = serde_json::to_value(request_body("hello")).expect("body serializes");
        assert_eq!(
            body,
            serde_json::json!({
                "contents": [{ "parts": [{ "text": "hello" }] }]
            })
        );
    }

    #[test]
    fn extract_text_reads_the_first_candidate() {
        let payload: GenerateResponse = serde_json::from_value(serde_json::json!({
            "candidates": [
                { "content": { "parts": [{ "text": "first" }, { "text": "second" }] } },
                { "content": { "parts": [{ "text": "other" }] } }
            ]
        }))
        .expect("payload parses");
        assert_eq!(extract_text(payload), Some("first".to_string()));
    }

    #[test]
    fn extract_text_tolerates_empty_responses() {
        assert_eq!(extract_text(GenerateResponse::default()), None);

        let no_parts: GenerateResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{ "content": { "parts": [] } }]
        }))
        .expect("payload parses");
        assert_eq!(extract_text(no_parts), None);

        // The candidates field itself may be absent on safety blocks.
        let absent: GenerateResponse =
            serde_json::from_value(serde_json::json!({})).expect("payload parses");
        assert_eq!(extract_text(absent), None);
    }
}
