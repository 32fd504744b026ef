//! Request/response bodies for the OpenRouter chat-completions endpoint.

use serde::{Deserialize, Serialize};

use crate::types::{ChatMessage, CompletionParams};

pub(crate) const DEFAULT_TEMPERATURE: f32 = 0.7;
pub(crate) const DEFAULT_TOP_K: u32 = 10;
pub(crate) const DEFAULT_MAX_TOKENS: u32 = 1000;

#[derive(Debug, Clone, Serialize)]
pub(crate) struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub top_k: u32,
    pub max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<ProviderPreference>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct ProviderPreference {
    pub order: Vec<String>,
}

impl CompletionRequest {
    pub(crate) fn from_params(params: CompletionParams) -> Self {
        let provider = params
            .provider
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(|name| ProviderPreference {
                order: vec![name.to_string()],
            });

        Self {
            model: params.model,
            messages: params.messages,
            temperature: params.temperature.unwrap_or(DEFAULT_TEMPERATURE),
            top_k: params.top_k.unwrap_or(DEFAULT_TOP_K),
            max_tokens: params.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
            provider,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct CompletionResponse {
    pub choices: Option<Vec<Choice>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Choice {
    pub message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChoiceMessage {
    pub content: Option<String>,
}
