use std::time::Duration;

use crate::chunk::preprocess_words;
use crate::settings::{clamp_max_chars, clamp_wpm, ReaderSettings, WPM_STEP};
use crate::source::WordSource;
use crate::ticker::Ticker;
use crate::view::ReaderView;

/// Playback behaviour after the token sequence is replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapPolicy {
    /// Stay (or become) paused; the caller resumes explicitly.
    Pause,
    /// Keep reading from the start of the new sequence.
    Resume,
}

/// The word-pacing state machine.
///
/// Owns the token sequence, the playback position, and the advancement
/// ticker. `words` is always `preprocess_words(&raw_words, max_chars)`; the
/// un-chunked tokens are retained so width changes re-derive the displayed
/// sequence without losing the original text.
///
/// None of the operations fail: rates and widths are clamped, out-of-range
/// reads yield the empty word and zero progress.
#[derive(Debug)]
pub struct Reader<T: Ticker> {
    ticker: T,
    wpm: u32,
    max_chars: usize,
    raw_words: Vec<String>,
    words: Vec<String>,
    current_word_index: usize,
    is_paused: bool,
}

impl<T: Ticker> Reader<T> {
    /// Creates a reader over `initial_tokens` and starts playback, unless
    /// the sequence is empty, in which case it stays paused.
    pub fn new(initial_tokens: Vec<String>, settings: ReaderSettings, ticker: T) -> Self {
        let settings = settings.clamped();
        let words = preprocess_words(&initial_tokens, settings.max_chars);

        let mut reader = Self {
            ticker,
            wpm: settings.wpm,
            max_chars: settings.max_chars,
            raw_words: initial_tokens,
            words,
            current_word_index: 0,
            is_paused: true,
        };
        reader.play();
        reader
    }

    /// Starts periodic advancement. No-op while already playing or when
    /// there is nothing to play.
    pub fn play(&mut self) {
        if !self.is_paused || self.words.is_empty() {
            return;
        }
        self.is_paused = false;
        self.reschedule();
    }

    /// Stops periodic advancement, keeping the current position. Idempotent.
    pub fn pause(&mut self) {
        self.ticker.cancel();
        self.is_paused = true;
    }

    pub fn toggle_play_pause(&mut self) {
        if self.is_paused {
            self.play();
        } else {
            self.pause();
        }
    }

    /// Sets the playback rate, clamped to the supported range. While playing
    /// the ticker is rescheduled at the new interval without losing the
    /// current position.
    pub fn set_wpm(&mut self, wpm: u32) {
        self.wpm = clamp_wpm(wpm);
        if !self.is_paused {
            self.reschedule();
        }
    }

    /// Adjusts the rate by whole steps of [`WPM_STEP`].
    pub fn adjust_wpm(&mut self, delta_steps: i32) {
        let target = i64::from(self.wpm) + i64::from(delta_steps) * i64::from(WPM_STEP);
        self.set_wpm(target.clamp(0, i64::from(u32::MAX)) as u32);
    }

    /// Sets the per-token width budget, re-deriving the displayed sequence
    /// from the retained raw tokens. Resets the position to the start.
    pub fn set_max_chars(&mut self, max_chars: usize) {
        self.max_chars = clamp_max_chars(max_chars);
        self.words = preprocess_words(&self.raw_words, self.max_chars);
        self.current_word_index = 0;
        if !self.is_paused {
            self.reschedule();
        }
    }

    /// Adjusts the width budget by single characters.
    pub fn adjust_max_chars(&mut self, delta_steps: i32) {
        let target = self.max_chars as i64 + i64::from(delta_steps);
        self.set_max_chars(target.max(0) as usize);
    }

    /// Replaces the token sequence, rewinding to the start. This is the
    /// integration point for AI-processed content.
    pub fn set_words(&mut self, tokens: Vec<String>, policy: SwapPolicy) {
        self.words = preprocess_words(&tokens, self.max_chars);
        self.raw_words = tokens;
        self.current_word_index = 0;

        match policy {
            SwapPolicy::Pause => self.pause(),
            SwapPolicy::Resume => {
                if self.words.is_empty() {
                    self.pause();
                } else {
                    self.is_paused = false;
                    self.reschedule();
                }
            }
        }
    }

    /// Re-derives the raw tokens from `source` (selection wins when
    /// non-empty) and rewinds, paused.
    pub fn reset(&mut self, source: &dyn WordSource) {
        let raw = source
            .selection_words()
            .filter(|words| !words.is_empty())
            .unwrap_or_else(|| source.page_words());
        self.set_words(raw, SwapPolicy::Pause);
    }

    /// One advancement step. Reaching the end wraps to the start and pauses.
    pub fn tick(&mut self) {
        if self.current_word_index + 1 >= self.words.len() {
            self.current_word_index = 0;
            self.pause();
        } else {
            self.current_word_index += 1;
        }
    }

    /// The interval between advancement steps at the current rate.
    pub fn interval(&self) -> Duration {
        Duration::from_secs_f64(60.0 / f64::from(self.wpm))
    }

    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    pub fn wpm(&self) -> u32 {
        self.wpm
    }

    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    pub fn current_word_index(&self) -> usize {
        self.current_word_index
    }

    /// The displayed (post-chunking) token sequence.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// The token currently in focus, or the empty string when out of range.
    pub fn current_word(&self) -> &str {
        self.words
            .get(self.current_word_index)
            .map_or("", String::as_str)
    }

    /// Position through the sequence as a percentage; 0.0 when empty.
    pub fn progress(&self) -> f64 {
        if self.words.is_empty() {
            return 0.0;
        }
        self.current_word_index as f64 / self.words.len() as f64 * 100.0
    }

    pub fn settings(&self) -> ReaderSettings {
        ReaderSettings::new(self.wpm, self.max_chars)
    }

    /// Snapshot for a presentation layer.
    pub fn view(&self) -> ReaderView {
        ReaderView {
            is_paused: self.is_paused,
            wpm: self.wpm,
            max_chars: self.max_chars,
            current_word: self.current_word().to_string(),
            current_word_index: self.current_word_index,
            word_count: self.words.len(),
            progress: self.progress(),
        }
    }

    /// Cancel-then-start; the only path that schedules the ticker, so at
    /// most one timer is active at any time.
    fn reschedule(&mut self) {
        self.ticker.cancel();
        self.ticker.start(self.interval());
    }
}
