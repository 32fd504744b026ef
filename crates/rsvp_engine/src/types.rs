use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Failure classification for the completion client.
///
/// Retry eligibility is decided per kind: credential and quota failures
/// propagate immediately, everything else is retried with backoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionErrorKind {
    /// Missing/blank credential at construction, or HTTP 401.
    Unauthorized,
    /// HTTP 402: credits exhausted.
    QuotaExceeded,
    /// HTTP 429.
    RateLimited,
    /// HTTP 500.
    ServerError,
    /// Any other non-success HTTP status.
    HttpStatus(u16),
    /// 2xx response without the expected JSON shape.
    MalformedResponse,
    /// Network-level failure (connect, reset, timeout).
    Transport,
}

impl CompletionErrorKind {
    pub fn is_retryable(self) -> bool {
        !matches!(self, Self::Unauthorized | Self::QuotaExceeded)
    }
}

impl fmt::Display for CompletionErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unauthorized => write!(f, "unauthorized"),
            Self::QuotaExceeded => write!(f, "quota exceeded"),
            Self::RateLimited => write!(f, "rate limited"),
            Self::ServerError => write!(f, "server error"),
            Self::HttpStatus(code) => write!(f, "http status {code}"),
            Self::MalformedResponse => write!(f, "malformed response"),
            Self::Transport => write!(f, "transport failure"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct CompletionError {
    pub kind: CompletionErrorKind,
    pub message: String,
}

impl CompletionError {
    pub fn new(kind: CompletionErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Message author for the chat-completion wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Inputs to a single completion call. Optional fields fall back to the
/// client defaults (temperature 0.7, top_k 10, max_tokens 1000); `provider`
/// is only sent when set and non-blank.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionParams {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: Option<f32>,
    pub top_k: Option<u32>,
    pub max_tokens: Option<u32>,
    pub provider: Option<String>,
}

impl CompletionParams {
    pub fn new(model: impl Into<String>, messages: Vec<ChatMessage>) -> Self {
        Self {
            model: model.into(),
            messages,
            temperature: None,
            top_k: None,
            max_tokens: None,
            provider: None,
        }
    }
}
