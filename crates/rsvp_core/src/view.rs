/// Read-only snapshot of playback state for a presentation layer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReaderView {
    pub is_paused: bool,
    pub wpm: u32,
    pub max_chars: usize,
    pub current_word: String,
    pub current_word_index: usize,
    pub word_count: usize,
    /// Position through the token sequence, 0.0 to 100.0.
    pub progress: f64,
}
