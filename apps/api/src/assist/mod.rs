//! AI Assist Gateway — the boundary around the remote generation service.
//!
//! Every operation here is request/response and independently fallible.
//! Failures are classified into user-facing categories by sniffing the
//! transport status and message; none are retried automatically, and none
//! of them can reach the render pipeline, which has no dependency on this
//! module.

pub mod handlers;
pub mod normalize;
pub mod parser;
pub mod prompts;
pub mod writer;

use axum::http::StatusCode;
use thiserror::Error;

use crate::llm_client::LlmError;

/// User-surfaceable AI failure categories.
#[derive(Debug, Error)]
pub enum AssistError {
    #[error("AI usage limit exceeded")]
    QuotaExceeded,

    #[error("AI service overloaded")]
    Overloaded,

    #[error("invalid or missing AI credential")]
    InvalidCredential,

    #[error("malformed AI response")]
    MalformedResponse,

    #[error("AI service error: {0}")]
    Other(String),
}

impl AssistError {
    /// Classifies a transport-level failure by status code first, then by
    /// message content — upstream error bodies are not structured enough
    /// to do better.
    pub fn classify(err: LlmError) -> AssistError {
        match err {
            LlmError::Parse(_) | LlmError::EmptyContent => AssistError::MalformedResponse,
            LlmError::Api { status, message } => {
                let lower = message.to_lowercase();
                if status == 429 || lower.contains("quota") || lower.contains("rate limit") {
                    AssistError::QuotaExceeded
                } else if status == 503 || lower.contains("overloaded") {
                    AssistError::Overloaded
                } else if status == 401 || status == 403 || lower.contains("api key") {
                    AssistError::InvalidCredential
                } else if lower.contains("json") {
                    AssistError::MalformedResponse
                } else {
                    AssistError::Other(truncate(&message, 100))
                }
            }
            LlmError::Http(e) => AssistError::Other(truncate(&e.to_string(), 100)),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AssistError::QuotaExceeded => StatusCode::TOO_MANY_REQUESTS,
            AssistError::Overloaded => StatusCode::SERVICE_UNAVAILABLE,
            AssistError::InvalidCredential => StatusCode::INTERNAL_SERVER_ERROR,
            AssistError::MalformedResponse => StatusCode::BAD_GATEWAY,
            AssistError::Other(_) => StatusCode::BAD_GATEWAY,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AssistError::QuotaExceeded => "AI_QUOTA_EXCEEDED",
            AssistError::Overloaded => "AI_OVERLOADED",
            AssistError::InvalidCredential => "AI_CREDENTIAL",
            AssistError::MalformedResponse => "AI_MALFORMED_RESPONSE",
            AssistError::Other(_) => "AI_ERROR",
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            AssistError::QuotaExceeded => {
                "AI usage limit exceeded. Please try again in a minute.".to_string()
            }
            AssistError::Overloaded => {
                "The AI service is currently overloaded. Please try again later.".to_string()
            }
            AssistError::InvalidCredential => {
                "Invalid AI credential. Please check the service configuration.".to_string()
            }
            AssistError::MalformedResponse => {
                "Failed to process the AI response. Please try again.".to_string()
            }
            AssistError::Other(msg) => format!("AI service error: {msg}"),
        }
    }
}

fn truncate(message: &str, max: usize) -> String {
    if message.chars().count() <= max {
        message.to_string()
    } else {
        let cut: String = message.chars().take(max).collect();
        format!("{cut}...")
    }
}
