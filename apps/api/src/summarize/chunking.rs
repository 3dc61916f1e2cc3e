/// Groups whitespace-separated words into chunks of at most `max_words`,
/// each chunk re-joined with single spaces. The trailing partial chunk is
/// kept; text without words yields no chunks.
pub fn chunk_words(text: &str, max_words: usize) -> Vec<String> {
    let max_words = max_words.max(1);
    let words: Vec<&str> = text.split_whitespace().collect();
    words.chunks(max_words).map(|c| c.join(" ")).collect()
}
