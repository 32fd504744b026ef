use std::sync::Arc;

use rsvp_core::split_whitespace_words;
use rsvp_logging::{rsvp_debug, rsvp_info, rsvp_warn};

use crate::client::CompletionClient;
use crate::prompt::{extraction_prompt, summary_prompt};
use crate::types::{ChatMessage, CompletionError, CompletionParams};

const EXTRACTION_TEMPERATURE: f32 = 0.3;
const EXTRACTION_MAX_TOKENS: u32 = 4000;
const SUMMARY_TEMPERATURE: f32 = 0.5;
const SUMMARY_MAX_TOKENS: u32 = 1000;

/// Which rendition of the page the reader is currently playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentMode {
    #[default]
    Original,
    Extracted,
    Summary,
}

/// Observable state of the AI pipeline. Caches are keyed implicitly by the
/// current original content: replacing the content clears both.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProcessingState {
    pub mode: ContentMode,
    pub is_loading: bool,
    pub error: Option<String>,
    pub extracted_text: Option<String>,
    pub summary_text: Option<String>,
}

/// Sequences extract/summarize operations against a completion client.
///
/// Owns prompt construction and caching policy; all transport concerns
/// (retry, backoff, error taxonomy) stay in the client. The `&mut self`
/// receivers rule out concurrent identical in-flight requests.
pub struct ContentProcessor {
    client: Arc<dyn CompletionClient>,
    model: String,
    provider: Option<String>,
    original_content: String,
    state: ProcessingState,
}

impl ContentProcessor {
    pub fn new(
        client: Arc<dyn CompletionClient>,
        model: impl Into<String>,
        provider: Option<String>,
        original_content: impl Into<String>,
    ) -> Self {
        Self {
            client,
            model: model.into(),
            provider,
            original_content: original_content.into(),
            state: ProcessingState::default(),
        }
    }

    pub fn state(&self) -> &ProcessingState {
        &self.state
    }

    pub fn mode(&self) -> ContentMode {
        self.state.mode
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    pub fn original_content(&self) -> &str {
        &self.original_content
    }

    /// Replaces the original content. A different text invalidates both
    /// caches and returns the mode to `Original`.
    pub fn set_original_content(&mut self, content: impl Into<String>) {
        let content = content.into();
        if content == self.original_content {
            return;
        }
        rsvp_debug!("original content changed, dropping processed caches");
        self.original_content = content;
        self.state = ProcessingState::default();
    }

    /// Extracts the main article body, returning it as a token sequence.
    /// A populated cache is returned without a network call.
    pub async fn extract_content(&mut self) -> Result<Vec<String>, CompletionError> {
        if let Some(text) = self.state.extracted_text.clone() {
            self.state.mode = ContentMode::Extracted;
            self.state.error = None;
            return Ok(split_whitespace_words(&text));
        }

        self.state.is_loading = true;
        self.state.error = None;

        let params = CompletionParams {
            model: self.model.clone(),
            messages: vec![ChatMessage::user(extraction_prompt(&self.original_content))],
            temperature: Some(EXTRACTION_TEMPERATURE),
            top_k: None,
            max_tokens: Some(EXTRACTION_MAX_TOKENS),
            provider: self.provider.clone(),
        };

        match self.client.generate_completion(params).await {
            Ok(text) => {
                rsvp_info!("content extraction produced {} characters", text.len());
                self.state.is_loading = false;
                self.state.mode = ContentMode::Extracted;
                self.state.extracted_text = Some(text.clone());
                Ok(split_whitespace_words(&text))
            }
            Err(err) => {
                rsvp_warn!("content extraction failed: {}", err);
                self.state.is_loading = false;
                self.state.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Summarizes the original content, returning it as a token sequence.
    /// A populated cache is returned without a network call.
    pub async fn summarize_content(&mut self) -> Result<Vec<String>, CompletionError> {
        if let Some(text) = self.state.summary_text.clone() {
            self.state.mode = ContentMode::Summary;
            self.state.error = None;
            return Ok(split_whitespace_words(&text));
        }

        self.state.is_loading = true;
        self.state.error = None;

        let params = CompletionParams {
            model: self.model.clone(),
            messages: vec![ChatMessage::user(summary_prompt(&self.original_content))],
            temperature: Some(SUMMARY_TEMPERATURE),
            top_k: None,
            max_tokens: Some(SUMMARY_MAX_TOKENS),
            provider: self.provider.clone(),
        };

        match self.client.generate_completion(params).await {
            Ok(text) => {
                rsvp_info!("summarization produced {} characters", text.len());
                self.state.is_loading = false;
                self.state.mode = ContentMode::Summary;
                self.state.summary_text = Some(text.clone());
                Ok(split_whitespace_words(&text))
            }
            Err(err) => {
                rsvp_warn!("summarization failed: {}", err);
                self.state.is_loading = false;
                self.state.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Switches back to the original rendition. Caches are kept so moving
    /// between modes stays cheap.
    pub fn reset_to_original(&mut self) {
        self.state.mode = ContentMode::Original;
        self.state.error = None;
    }
}
