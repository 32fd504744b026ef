use crate::chunk::split_whitespace_words;

/// Supplies the raw token sequences the reader plays back.
///
/// `selection_words` takes precedence over `page_words` whenever it returns
/// a non-empty sequence.
pub trait WordSource {
    /// Tokens for the whole page/document.
    fn page_words(&self) -> Vec<String>;
    /// Tokens for the current user selection, or `None` when nothing is
    /// selected.
    fn selection_words(&self) -> Option<Vec<String>>;
}

/// A fixed-text source backed by plain strings.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    page_text: String,
    selection_text: Option<String>,
}

impl StaticSource {
    pub fn new(page_text: impl Into<String>) -> Self {
        Self {
            page_text: page_text.into(),
            selection_text: None,
        }
    }

    pub fn with_selection(mut self, selection: impl Into<String>) -> Self {
        self.selection_text = Some(selection.into());
        self
    }
}

impl WordSource for StaticSource {
    fn page_words(&self) -> Vec<String> {
        split_whitespace_words(&self.page_text)
    }

    fn selection_words(&self) -> Option<Vec<String>> {
        let words = split_whitespace_words(self.selection_text.as_deref()?);
        if words.is_empty() {
            None
        } else {
            Some(words)
        }
    }
}
