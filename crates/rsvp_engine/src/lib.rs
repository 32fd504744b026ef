//! RSVP engine: the OpenRouter completion client, the AI content pipeline,
//! and the IO-facing session glue around the pure core.
mod client;
mod processor;
mod prompt;
mod session;
mod store;
mod ticker;
mod types;
mod wire;

pub use client::{CompletionClient, OpenRouterClient, RetryPolicy, OPENROUTER_ENDPOINT};
pub use processor::{ContentMode, ContentProcessor, ProcessingState};
pub use prompt::{extraction_prompt, summary_prompt, truncate_for_prompt, MAX_PROMPT_CHARS};
pub use session::ReaderSession;
pub use store::{MemorySettingsStore, RonSettingsStore, SettingsStore};
pub use ticker::TokioTicker;
pub use types::{ChatMessage, CompletionError, CompletionErrorKind, CompletionParams, Role};
