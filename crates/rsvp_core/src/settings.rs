/// Default playback rate in words per minute.
pub const DEFAULT_WPM: u32 = 300;
/// Lowest accepted playback rate.
pub const MIN_WPM: u32 = 100;
/// Highest accepted playback rate.
pub const MAX_WPM: u32 = 1000;
/// Granularity of relative rate adjustments.
pub const WPM_STEP: u32 = 50;

/// Default width budget of a displayed token, in characters.
pub const DEFAULT_MAX_CHARS: usize = 12;
/// Narrowest accepted width budget.
pub const MIN_MAX_CHARS: usize = 6;
/// Widest accepted width budget.
pub const MAX_MAX_CHARS: usize = 20;

/// Clamps a words-per-minute value into the supported range.
pub fn clamp_wpm(wpm: u32) -> u32 {
    wpm.clamp(MIN_WPM, MAX_WPM)
}

/// Clamps a per-token character budget into the supported range.
pub fn clamp_max_chars(max_chars: usize) -> usize {
    max_chars.clamp(MIN_MAX_CHARS, MAX_MAX_CHARS)
}

/// User-tunable playback parameters that should survive restarts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderSettings {
    pub wpm: u32,
    pub max_chars: usize,
}

impl ReaderSettings {
    pub const fn new(wpm: u32, max_chars: usize) -> Self {
        Self { wpm, max_chars }
    }

    /// Returns a copy with both fields forced into their supported ranges.
    pub fn clamped(self) -> Self {
        Self {
            wpm: clamp_wpm(self.wpm),
            max_chars: clamp_max_chars(self.max_chars),
        }
    }
}

impl Default for ReaderSettings {
    fn default() -> Self {
        Self {
            wpm: DEFAULT_WPM,
            max_chars: DEFAULT_MAX_CHARS,
        }
    }
}
