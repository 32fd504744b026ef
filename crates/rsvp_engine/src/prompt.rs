//! Prompt templates for the extract/summarize operations.

/// Character budget for page text embedded in a prompt, keeping requests
/// inside the model's context window.
pub const MAX_PROMPT_CHARS: usize = 15_000;

const TRUNCATION_MARKER: &str = "... [truncated]";

const EXTRACTION_INSTRUCTION: &str = "Remove advertisements, navigation, footers, sidebars and \
other page chrome from the following text and extract only the article body. Do not reformat; \
return the original text as-is. No explanations; output the body text only.";

const SUMMARY_INSTRUCTION: &str = "Summarize the following text concisely while keeping the \
important points. Write natural prose rather than bullet points. No explanations; output the \
summary only.";

/// Truncates `text` to [`MAX_PROMPT_CHARS`] characters, appending a marker
/// when anything was cut.
pub fn truncate_for_prompt(text: &str) -> String {
    let mut chars = text.char_indices();
    match chars.nth(MAX_PROMPT_CHARS) {
        None => text.to_string(),
        Some((byte_index, _)) => format!("{}{}", &text[..byte_index], TRUNCATION_MARKER),
    }
}

pub fn extraction_prompt(page_text: &str) -> String {
    format!(
        "{}\n\nText:\n{}",
        EXTRACTION_INSTRUCTION,
        truncate_for_prompt(page_text)
    )
}

pub fn summary_prompt(page_text: &str) -> String {
    format!(
        "{}\n\nText:\n{}",
        SUMMARY_INSTRUCTION,
        truncate_for_prompt(page_text)
    )
}
