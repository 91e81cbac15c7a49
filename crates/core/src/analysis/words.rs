/// Counts whitespace-delimited tokens.
///
/// Runs of any Unicode whitespace separate tokens; no locale-aware
/// segmentation is attempted, so `"don't"` and `"e-mail"` are single words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
