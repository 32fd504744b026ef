//! RSVP core: pure playback state machine and word-layout helpers.
mod chunk;
mod orp;
mod reader;
mod settings;
mod source;
mod ticker;
mod view;

pub use chunk::{preprocess_words, split_long_word, split_whitespace_words};
pub use orp::{calculate_orp, split_word, OrpSplit};
pub use reader::{Reader, SwapPolicy};
pub use settings::{
    clamp_max_chars, clamp_wpm, ReaderSettings, DEFAULT_MAX_CHARS, DEFAULT_WPM, MAX_MAX_CHARS,
    MAX_WPM, MIN_MAX_CHARS, MIN_WPM, WPM_STEP,
};
pub use source::{StaticSource, WordSource};
pub use ticker::Ticker;
pub use view::ReaderView;
