/// Average reading speed assumed for the estimate.
const WORDS_PER_MINUTE: usize = 200;

/// Whitespace-delimited token count; the empty string counts zero words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Minutes needed to read `word_count` words, never less than one.
pub fn reading_time_minutes(word_count: usize) -> u32 {
    word_count.div_ceil(WORDS_PER_MINUTE).max(1) as u32
}
