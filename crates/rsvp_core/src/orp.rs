//! Optimal recognition point layout.
//!
//! The ORP is the letter the eye should fixate on while a word flashes by.
//! Placing it at a fixed screen position lets the reader keep their gaze
//! still between words.

/// A word split around its recognition point for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrpSplit {
    pub before: String,
    pub focus: String,
    pub after: String,
}

/// Returns the character index of the optimal recognition point.
///
/// The empty word maps to 0. The base position is `ceil((len - 1) / 4)`;
/// when that lands on punctuation the index shifts one character left,
/// never below 0.
pub fn calculate_orp(word: &str) -> usize {
    let chars: Vec<char> = word.chars().collect();
    if chars.is_empty() {
        return 0;
    }

    let orp = (chars.len() - 1).div_ceil(4);
    if orp > 0 && orp < chars.len() && !is_word_char(chars[orp]) {
        return orp - 1;
    }

    orp
}

/// Splits a word into the parts before, at, and after its recognition point.
pub fn split_word(word: &str) -> OrpSplit {
    let chars: Vec<char> = word.chars().collect();
    if chars.is_empty() {
        return OrpSplit::default();
    }

    let orp = calculate_orp(word);

    OrpSplit {
        before: chars[..orp].iter().collect(),
        focus: chars[orp].to_string(),
        after: chars[orp + 1..].iter().collect(),
    }
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}
