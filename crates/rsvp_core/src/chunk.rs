//! Word preprocessing: fitting tokens into a per-token character budget.

/// Splits an over-length word into consecutive chunks of `max_chars`
/// characters; the final chunk may be shorter. Words within budget come
/// back unchanged as a single entry.
pub fn split_long_word(word: &str, max_chars: usize) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    if chars.len() <= max_chars || max_chars == 0 {
        return vec![word.to_string()];
    }

    chars
        .chunks(max_chars)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// Applies [`split_long_word`] to every token, preserving order.
pub fn preprocess_words(words: &[String], max_chars: usize) -> Vec<String> {
    words
        .iter()
        .flat_map(|word| split_long_word(word, max_chars))
        .collect()
}

/// Splits raw text on whitespace, discarding empty entries.
pub fn split_whitespace_words(text: &str) -> Vec<String> {
    text.split_whitespace().map(ToOwned::to_owned).collect()
}
